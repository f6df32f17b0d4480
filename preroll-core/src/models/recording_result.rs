use std::path::PathBuf;

/// What a recording produced, returned when it is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingSummary {
    pub file_path: PathBuf,
    /// Bytes flushed from the ring at activation.
    pub preroll_bytes: u64,
    /// Everything written to the file, pre-roll included.
    pub bytes_written: u64,
    /// SHA-256 of the file contents, lowercase hex.
    pub checksum: String,
}

/// Running counters for a capture process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureDiagnostics {
    pub chunks_buffered: u64,
    pub chunks_recorded: u64,
    pub bytes_evicted: u64,
    pub activations: u64,
    pub deactivations: u64,
}
