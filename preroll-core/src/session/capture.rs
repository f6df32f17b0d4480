use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::models::config::CaptureConfiguration;
use crate::models::error::CaptureError;
use crate::models::event::ToggleEvent;
use crate::models::recording_result::{CaptureDiagnostics, RecordingSummary};
use crate::models::state::CaptureMode;
use crate::processing::ring_buffer::RingBuffer;
use crate::storage::file_sink::FileSink;

/// Everything behind the lock. The sink is `Some` exactly while recording.
struct Inner {
    ring: RingBuffer,
    sink: Option<FileSink>,
    diagnostics: CaptureDiagnostics,
}

impl Inner {
    fn mode(&self) -> CaptureMode {
        if self.sink.is_some() {
            CaptureMode::Recording
        } else {
            CaptureMode::Buffering
        }
    }
}

/// Pre-roll capture state machine.
///
/// Shared between the toggle thread and the producer loop, usually as an
/// `Arc<CaptureState>`. Every operation runs entirely under one lock, so a
/// write never observes a half-finished transition.
///
/// ```text
/// [samples] → write ─┬─ buffering → [RingBuffer] ──drain on activate──┐
///                    └─ recording → [FileSink] ←──────────────────────┘
/// ```
pub struct CaptureState {
    target_path: PathBuf,
    inner: Mutex<Inner>,
}

impl CaptureState {
    pub fn new(target_path: impl Into<PathBuf>, ring_capacity: usize) -> Self {
        Self {
            target_path: target_path.into(),
            inner: Mutex::new(Inner {
                ring: RingBuffer::new(ring_capacity),
                sink: None,
                diagnostics: CaptureDiagnostics::default(),
            }),
        }
    }

    pub fn from_config(config: &CaptureConfiguration) -> Self {
        Self::new(config.output_path.clone(), config.ring_capacity)
    }

    pub fn path(&self) -> &Path {
        &self.target_path
    }

    pub fn mode(&self) -> CaptureMode {
        self.inner.lock().mode()
    }

    /// Bytes currently held in the pre-roll ring.
    pub fn buffered_len(&self) -> usize {
        self.inner.lock().ring.len()
    }

    pub fn diagnostics(&self) -> CaptureDiagnostics {
        let inner = self.inner.lock();
        let mut diagnostics = inner.diagnostics.clone();
        diagnostics.bytes_evicted = inner.ring.evicted();
        diagnostics
    }

    /// Create the output file, flush the pre-roll into it, start recording.
    ///
    /// Calling this while already recording starts the file over: the
    /// previous contents are truncated and the (empty) ring is drained again.
    pub fn activate(&self) -> Result<(), CaptureError> {
        let mut inner = self.inner.lock();

        if inner.mode().is_recording() {
            log::warn!(
                "activate while recording; restarting {}",
                self.target_path.display()
            );
        }

        let mut sink = FileSink::create(&self.target_path)?;
        if let Some(old) = inner.sink.take() {
            let summary = old.close();
            inner.diagnostics.deactivations += 1;
            log::info!(
                "replaced {} after {} bytes (sha256 {})",
                summary.file_path.display(),
                summary.bytes_written,
                summary.checksum
            );
        }

        let preroll = inner.ring.drain();
        sink.write_preroll(&preroll)?;

        log::info!(
            "recording to {} with {} bytes of pre-roll",
            self.target_path.display(),
            preroll.len()
        );
        inner.sink = Some(sink);
        inner.diagnostics.activations += 1;
        Ok(())
    }

    /// Close the output file and go back to buffering.
    ///
    /// Returns `None` if nothing was recording.
    pub fn deactivate(&self) -> Option<RecordingSummary> {
        let mut inner = self.inner.lock();

        let Some(sink) = inner.sink.take() else {
            log::warn!("deactivate while buffering; ignored");
            return None;
        };

        let summary = sink.close();
        inner.diagnostics.deactivations += 1;
        log::info!(
            "closed {} after {} bytes (sha256 {})",
            summary.file_path.display(),
            summary.bytes_written,
            summary.checksum
        );
        Some(summary)
    }

    /// Close any open recording on the way out. Quiet when buffering.
    pub fn shutdown(&self) -> Option<RecordingSummary> {
        let mut inner = self.inner.lock();
        let summary = inner.sink.take()?.close();
        inner.diagnostics.deactivations += 1;
        log::info!(
            "closed {} on shutdown after {} bytes (sha256 {})",
            summary.file_path.display(),
            summary.bytes_written,
            summary.checksum
        );
        Some(summary)
    }

    /// Route one chunk to the ring or the file, whichever is current.
    pub fn write(&self, chunk: &[u8]) -> Result<usize, CaptureError> {
        let mut inner = self.inner.lock();
        let Inner {
            ring,
            sink,
            diagnostics,
        } = &mut *inner;

        match sink {
            Some(sink) => {
                let n = sink.write(chunk)?;
                diagnostics.chunks_recorded += 1;
                Ok(n)
            }
            None => {
                let n = ring.append(chunk)?;
                diagnostics.chunks_buffered += 1;
                Ok(n)
            }
        }
    }

    /// Dispatch a toggle request.
    pub fn apply(&self, event: ToggleEvent) -> Result<(), CaptureError> {
        match event {
            ToggleEvent::Activate => self.activate(),
            ToggleEvent::Deactivate => {
                self.deactivate();
                Ok(())
            }
        }
    }
}
