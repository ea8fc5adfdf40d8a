//! Text-fetch capability.
//!
//! The walk never touches the filesystem directly; it fetches document text
//! through the [`TextSource`] trait. [`FsSource`] is the production
//! implementation, [`MemorySource`] serves a fixed document set for tests
//! and virtual document trees.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rustc_hash::FxHashMap;

use crate::error::SourceError;

/// Asynchronously yields the full text of a document, or a fetch error
/// naming it.
#[async_trait]
pub trait TextSource: Send + Sync {
    async fn fetch(&self, path: &Path) -> Result<String, SourceError>;
}

/// Reads documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

#[async_trait]
impl TextSource for FsSource {
    async fn fetch(&self, path: &Path) -> Result<String, SourceError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SourceError::new(path, source))
    }
}

/// Serves documents from an in-memory map, keyed by resolved path.
///
/// Fetching an unknown path fails with a not-found error, mirroring what
/// [`FsSource`] reports for a missing file.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: FxHashMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, replacing any previous text under the same path.
    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.documents.insert(path.into(), text.into());
    }

    /// Builder-style [`insert`](MemorySource::insert).
    pub fn with(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }
}

#[async_trait]
impl TextSource for MemorySource {
    async fn fetch(&self, path: &Path) -> Result<String, SourceError> {
        self.documents.get(path).cloned().ok_or_else(|| {
            SourceError::new(path, io::Error::new(io::ErrorKind::NotFound, "no such document"))
        })
    }
}
