//! Error types for scanning and walking.

use std::path::PathBuf;

use thiserror::Error;

/// A malformed import directive.
///
/// The display format is load-bearing: downstream tooling matches on the
/// exact `invalid import: <path>:<line>: <text>` shape, with a zero-based
/// line number and the offending line verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid import: {}:{}: {}", path.display(), line, text)]
pub struct ScanError {
    /// Document the directive appeared in.
    pub path: PathBuf,
    /// Zero-based line index of the directive.
    pub line: usize,
    /// The offending line, verbatim.
    pub text: String,
}

/// A document could not be fetched.
#[derive(Debug, Error)]
#[error("failed to read '{}': {}", path.display(), source)]
pub struct SourceError {
    /// Document that could not be read.
    pub path: PathBuf,
    /// Underlying failure.
    #[source]
    pub source: std::io::Error,
}

impl SourceError {
    pub fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self { path: path.into(), source }
    }
}

/// Error that can occur during a walk.
///
/// The first scan or fetch failure anywhere in the transitive closure aborts
/// the whole walk; no partial result is returned.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Fetch(#[from] SourceError),
}
