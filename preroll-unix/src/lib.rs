//! # preroll-unix
//!
//! Unix backend for the pre-roll capture tool.
//!
//! Provides:
//! - `SignalToggleSource` — SIGUSR1 / SIGUSR2 as activate / deactivate events
//! - `args` — positional argument parsing into a `CaptureConfiguration`
//!
//! The `preroll` binary wires these to `preroll_core::CaptureState`:
//! ```text
//! preroll <output-path> <sample-size> <ring-capacity> < samples
//! kill -USR1 <pid>   # flush pre-roll, start recording
//! kill -USR2 <pid>   # close the file, back to buffering
//! ```

pub mod args;
#[cfg(unix)]
pub mod signals;

#[cfg(unix)]
pub use signals::SignalToggleSource;
