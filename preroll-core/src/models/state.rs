use std::fmt;

/// Where incoming samples currently go.
///
/// State transitions:
/// ```text
/// buffering ──activate──→ recording
///     ↑  ↺                  ↺  │
///     └─────deactivate─────────┘
/// ```
/// Both self-transitions are legal. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureMode {
    #[default]
    Buffering,
    Recording,
}

impl CaptureMode {
    pub fn is_buffering(&self) -> bool {
        matches!(self, Self::Buffering)
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording)
    }
}

impl fmt::Display for CaptureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffering => f.write_str("buffering"),
            Self::Recording => f.write_str("recording"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_buffering_and_displays_lowercase() {
        assert_eq!(CaptureMode::default(), CaptureMode::Buffering);
        assert_eq!(CaptureMode::Buffering.to_string(), "buffering");
        assert_eq!(CaptureMode::Recording.to_string(), "recording");
    }
}
