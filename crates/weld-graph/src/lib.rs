//! # weld-graph
//!
//! Core walk for dependency-aware concatenation of text documents.
//!
//! Documents declare their dependencies with `import "target"` directives.
//! This crate scans those directives, resolves targets against the importing
//! document, and walks the resulting graph recursively, producing either a
//! deduplicated dependency-first order or a raw per-document edge map.
//! Streaming emission on top of the same walk lives in `weld-bundler`.
//!
//! The walk is cycle-safe: a per-walk [`VisitedSet`] guarantees each document
//! is processed at most once, so self-imports and circular imports terminate.
//! For a circular pair the document reached first is ordered first; the order
//! is deterministic per entry point, not per graph.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use weld_graph::{FsSource, WalkConfig, Walker};
//!
//! # async fn demo() -> Result<(), weld_graph::WalkError> {
//! let source = FsSource;
//! let walker = Walker::new(&source, WalkConfig::default());
//!
//! // Dependency-first order over the entries and everything they import.
//! let order = walker.flatten(&["src/main.js"]).await?;
//! for path in &order {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Text is fetched through the [`TextSource`] trait; [`FsSource`] reads the
//! local filesystem and [`MemorySource`] serves a fixed in-memory document
//! set, which is what the test suites use.

pub mod config;
pub mod error;
pub mod resolve;
pub mod scan;
pub mod source;
pub mod visited;
pub mod walk;

pub use config::WalkConfig;
pub use error::{ScanError, SourceError, WalkError};
pub use scan::{Directive, ScanItem, Scanner};
pub use source::{FsSource, MemorySource, TextSource};
pub use visited::VisitedSet;
pub use walk::{DependencyGraph, Walker};
