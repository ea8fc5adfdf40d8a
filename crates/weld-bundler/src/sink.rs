//! Output sinks for streamed emission.

use std::io;

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::emit::EmitError;

/// Ordered consumer of emitted content chunks.
///
/// The emitter upholds the sink contract: writes arrive strictly in
/// emission order, each awaited to completion before the next; exactly one
/// of [`finish`](ChunkSink::finish) (end-of-stream) or
/// [`abort`](ChunkSink::abort) (error) is called, and nothing is written
/// after either.
#[async_trait]
pub trait ChunkSink: Send {
    /// Write one content chunk. Completion of the returned future is the
    /// per-write completion signal.
    async fn write(&mut self, chunk: &str) -> io::Result<()>;

    /// End-of-stream signal, issued once after every write completed.
    async fn finish(&mut self) -> io::Result<()>;

    /// Error signal, issued once on the first failure anywhere in the walk.
    async fn abort(&mut self, error: &EmitError) -> io::Result<()> {
        let _ = error;
        Ok(())
    }
}

/// Collects the stream into an in-memory string.
#[derive(Debug, Default)]
pub struct StringSink {
    buffer: String,
    closed: bool,
}

impl StringSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a terminal signal has fired.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

#[async_trait]
impl ChunkSink for StringSink {
    async fn write(&mut self, chunk: &str) -> io::Result<()> {
        if self.closed {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink already closed"));
        }
        self.buffer.push_str(chunk);
        Ok(())
    }

    async fn finish(&mut self) -> io::Result<()> {
        self.closed = true;
        Ok(())
    }

    async fn abort(&mut self, _error: &EmitError) -> io::Result<()> {
        self.closed = true;
        Ok(())
    }
}

/// Streams chunks into any async writer (stdout, an output file).
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> ChunkSink for WriterSink<W> {
    async fn write(&mut self, chunk: &str) -> io::Result<()> {
        self.writer.write_all(chunk.as_bytes()).await
    }

    async fn finish(&mut self) -> io::Result<()> {
        self.writer.flush().await
    }
}
