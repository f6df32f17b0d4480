use std::path::PathBuf;

/// Configuration for a capture process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfiguration {
    /// File written on every activation. Overwritten each time.
    pub output_path: PathBuf,

    /// Bytes per sample read from the input.
    pub sample_size: usize,

    /// Bytes of pre-roll kept while buffering. Should be a multiple of
    /// `sample_size` for a clean sliding window.
    pub ring_capacity: usize,
}

impl CaptureConfiguration {
    pub fn new(output_path: impl Into<PathBuf>, sample_size: usize, ring_capacity: usize) -> Self {
        Self {
            output_path: output_path.into(),
            sample_size,
            ring_capacity,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.output_path.as_os_str().is_empty() {
            return Err("output path must not be empty".into());
        }
        if self.sample_size == 0 {
            return Err("sample size must be positive".into());
        }
        if self.ring_capacity == 0 {
            return Err("ring capacity must be positive".into());
        }
        if self.sample_size > self.ring_capacity {
            return Err(format!(
                "sample size {} exceeds ring capacity {}",
                self.sample_size, self.ring_capacity
            ));
        }
        if self.ring_capacity % self.sample_size != 0 {
            log::warn!(
                "ring capacity {} is not a multiple of sample size {}; pre-roll will hold {} samples",
                self.ring_capacity,
                self.sample_size,
                self.ring_capacity / self.sample_size
            );
        }
        Ok(())
    }

    /// Whole samples that fit in the pre-roll window.
    pub fn preroll_samples(&self) -> usize {
        if self.sample_size == 0 {
            return 0;
        }
        self.ring_capacity / self.sample_size
    }
}
