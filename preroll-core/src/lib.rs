//! # preroll-core
//!
//! Platform-agnostic core of the pre-roll capture tool.
//!
//! Samples are kept in a fixed-size ring until a toggle arrives. Activation
//! flushes the ring to a fresh output file and every later sample goes
//! straight to disk until deactivation closes it. Platform backends supply
//! the toggles by implementing `ToggleSource`.
//!
//! ## Architecture
//!
//! ```text
//! preroll-core (this crate)
//! ├── models/       ← CaptureError, CaptureMode, CaptureConfiguration, ToggleEvent, RecordingSummary
//! ├── processing/   ← RingBuffer
//! ├── source/       ← SampleReader (fixed-size reads)
//! ├── storage/      ← FileSink
//! ├── traits/       ← ToggleSource
//! └── session/      ← CaptureState, producer and toggle loops
//! ```

pub mod models;
pub mod processing;
pub mod session;
pub mod source;
pub mod storage;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::config::CaptureConfiguration;
pub use models::error::CaptureError;
pub use models::event::ToggleEvent;
pub use models::recording_result::{CaptureDiagnostics, RecordingSummary};
pub use models::state::CaptureMode;
pub use processing::ring_buffer::RingBuffer;
pub use session::capture::CaptureState;
pub use session::pump::{run_producer, run_toggles};
pub use source::sample_reader::SampleReader;
pub use storage::file_sink::FileSink;
pub use traits::toggle_source::ToggleSource;
