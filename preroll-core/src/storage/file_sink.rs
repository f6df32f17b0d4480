use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::models::error::CaptureError;
use crate::models::recording_result::RecordingSummary;

/// Raw output file for one recording.
///
/// ## File Format
///
/// ```text
/// [pre-roll window flushed at activation]
/// [sample][sample][sample]...
/// ```
/// No header, no framing. A SHA-256 of everything written is kept as the
/// file grows so closing doesn't need to re-read it.
pub struct FileSink {
    file_path: PathBuf,
    file: File,
    hasher: Sha256,
    preroll_bytes: u64,
    total_bytes_written: u64,
}

impl FileSink {
    /// Create the file, truncating anything already at `file_path`.
    pub fn create(file_path: &Path) -> Result<Self, CaptureError> {
        let file = File::create(file_path).map_err(|source| CaptureError::SinkCreation {
            path: file_path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            file_path: file_path.to_path_buf(),
            file,
            hasher: Sha256::new(),
            preroll_bytes: 0,
            total_bytes_written: 0,
        })
    }

    /// Write the drained pre-roll in full.
    pub fn write_preroll(&mut self, data: &[u8]) -> Result<(), CaptureError> {
        self.file.write_all(data).map_err(CaptureError::SinkWrite)?;
        self.hasher.update(data);
        self.preroll_bytes += data.len() as u64;
        self.total_bytes_written += data.len() as u64;
        Ok(())
    }

    /// Single write call. The count may be short; callers decide what that
    /// means.
    pub fn write(&mut self, data: &[u8]) -> Result<usize, CaptureError> {
        let n = self.file.write(data).map_err(CaptureError::SinkWrite)?;
        self.hasher.update(&data[..n]);
        self.total_bytes_written += n as u64;
        Ok(n)
    }

    /// Close the file and report what went into it.
    pub fn close(self) -> RecordingSummary {
        let Self {
            file_path,
            file,
            hasher,
            preroll_bytes,
            total_bytes_written,
        } = self;
        drop(file);

        RecordingSummary {
            file_path,
            preroll_bytes,
            bytes_written: total_bytes_written,
            checksum: hex_encode(&hasher.finalize()),
        }
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
