/// A request from the controlling process to flip the capture mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleEvent {
    /// Flush the pre-roll to a fresh file and start recording.
    Activate,
    /// Close the file and go back to buffering.
    Deactivate,
}
