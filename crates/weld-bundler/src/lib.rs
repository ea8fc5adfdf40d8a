//! # weld-bundler
//!
//! Streaming emission on top of the `weld-graph` walk, plus derived views.
//!
//! The [`Emitter`] performs the same dependency-first descent as
//! `Walker::flatten`, but instead of batching documents into a list it
//! writes each document's content chunks to a [`ChunkSink`] — postorder, so
//! a document's own text only appears after everything it imports. Writes
//! are serialized through a single writer task; the sink sees either one
//! end-of-stream signal or one error signal, never both.
//!
//! [`index_view`] renders the raw dependency graph as a module-key index,
//! a pure formatting pass with no traversal of its own.

pub mod emit;
pub mod index_view;
pub mod sink;

pub use emit::{EmitError, Emitter};
pub use index_view::{IndexOptions, index_view};
pub use sink::{ChunkSink, StringSink, WriterSink};
