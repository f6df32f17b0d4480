use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while buffering, recording, or reading samples.
///
/// Only `OversizedChunk` is meant to be recoverable. The rest are reported
/// to the driver, which decides to terminate.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("cannot write {len} bytes into a ring of {capacity} bytes")]
    OversizedChunk { len: usize, capacity: usize },

    #[error("failed to create output file {}: {source}", path.display())]
    SinkCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write to output file failed: {0}")]
    SinkWrite(#[source] io::Error),

    #[error("short write to output file: {written} of {expected} bytes")]
    ShortWrite { expected: usize, written: usize },

    #[error("read from input failed: {0}")]
    SourceRead(#[source] io::Error),

    #[error("short read from input: {got} of {expected} bytes")]
    ShortRead { expected: usize, got: usize },

    #[error("input ended")]
    EndOfStream,
}

impl CaptureError {
    /// Whether the caller can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::OversizedChunk { .. })
    }
}
