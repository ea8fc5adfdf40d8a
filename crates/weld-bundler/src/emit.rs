//! Streaming dependency-first emission.
//!
//! The emitter performs the same visited-guarded recursive descent as the
//! flattened walk, fused with the scan: each document's imports are visited
//! to completion, in declared order, before its own content chunks are
//! released. Chunks flow over a bounded channel to a single writer task
//! that owns the sink, so scanning of later documents overlaps with writes
//! of earlier ones without ever reordering them.

use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::pin::Pin;

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use weld_graph::scan::{ScanItem, Scanner};
use weld_graph::{TextSource, VisitedSet, WalkConfig, WalkError, resolve};

use crate::sink::{ChunkSink, StringSink};

/// Capacity of the chunk channel between the walk and the writer task.
const WRITER_QUEUE: usize = 16;

/// Error that can occur while streaming a bundle.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error("failed to write output: {0}")]
    Sink(#[source] io::Error),
}

/// Streams the dependency-first concatenation of entry documents to a sink.
pub struct Emitter<'a> {
    source: &'a dyn TextSource,
    config: WalkConfig,
}

impl<'a> Emitter<'a> {
    pub fn new(source: &'a dyn TextSource, config: WalkConfig) -> Self {
        Self { source, config }
    }

    /// Stream `entries` and their transitive imports into `sink`.
    ///
    /// On success every document's chunks were written exactly once, in
    /// dependency-first order, and the sink received one
    /// [`finish`](ChunkSink::finish). On failure the sink received one
    /// [`abort`](ChunkSink::abort) and the error is returned; no writes
    /// happen after the abort.
    pub async fn stream<S, K>(&self, entries: &[S], sink: K) -> Result<K, EmitError>
    where
        S: AsRef<str>,
        K: ChunkSink + 'static,
    {
        let (chunks, mut queue) = mpsc::channel::<String>(WRITER_QUEUE);

        // Single active writer: the only task that touches the sink while
        // the walk runs.
        let writer = tokio::spawn(async move {
            let mut sink = sink;
            while let Some(chunk) = queue.recv().await {
                if let Err(error) = sink.write(&chunk).await {
                    return (sink, Err(error));
                }
            }
            (sink, Ok(()))
        });

        let mut visited = VisitedSet::new();
        let mut walked = Ok(());
        for entry in entries {
            let path = resolve::expand_entry(entry.as_ref(), self.config.default_extension());
            if let Err(error) = self.emit_into(path, &mut visited, &chunks).await {
                walked = Err(error);
                break;
            }
        }
        drop(chunks);

        let (mut sink, wrote) = writer
            .await
            .map_err(|join| EmitError::Sink(io::Error::other(join.to_string())))?;

        let outcome = match (walked, wrote) {
            (Ok(()), Ok(())) => Ok(()),
            // A sink failure wins: the walk error it may have caused is the
            // writer stopping, not the root cause.
            (_, Err(error)) => Err(EmitError::Sink(error)),
            (Err(error), Ok(())) => Err(error),
        };

        match outcome {
            Ok(()) => {
                sink.finish().await.map_err(EmitError::Sink)?;
                Ok(sink)
            }
            Err(error) => {
                if let Err(abort_error) = sink.abort(&error).await {
                    warn!(error = %abort_error, "sink abort failed");
                }
                Err(error)
            }
        }
    }

    /// Collect the stream into a string.
    pub async fn bundle_to_string<S: AsRef<str>>(&self, entries: &[S]) -> Result<String, EmitError> {
        let sink = self.stream(entries, StringSink::new()).await?;
        Ok(sink.into_string())
    }

    /// Fused scan + postorder descent for one document.
    fn emit_into<'s>(
        &'s self,
        path: PathBuf,
        visited: &'s mut VisitedSet,
        chunks: &'s mpsc::Sender<String>,
    ) -> Pin<Box<dyn Future<Output = Result<(), EmitError>> + Send + 's>> {
        Box::pin(async move {
            if !visited.mark(&path) {
                trace!(path = %path.display(), "already emitted");
                return Ok(());
            }
            debug!(path = %path.display(), "emitting document");

            let text = self
                .source
                .fetch(&path)
                .await
                .map_err(WalkError::from)?;

            let mut content = Vec::new();
            let mut targets = Vec::new();
            for item in Scanner::new(&path, &text) {
                match item.map_err(WalkError::from)? {
                    ScanItem::Content(line) => content.push(line),
                    ScanItem::Import(directive) => targets.push(resolve::resolve_target(
                        &path,
                        directive.target,
                        self.config.default_extension(),
                    )),
                }
            }

            for target in targets {
                self.emit_into(target, visited, chunks).await?;
            }

            // The document's own chunks go out only after its entire import
            // subtree has been written.
            for line in content {
                chunks.send(format!("{line}\n")).await.map_err(|_| {
                    EmitError::Sink(io::Error::new(
                        io::ErrorKind::BrokenPipe,
                        "output writer stopped",
                    ))
                })?;
            }
            Ok(())
        })
    }
}
