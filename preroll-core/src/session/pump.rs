use std::convert::Infallible;
use std::io::Read;

use crate::models::error::CaptureError;
use crate::source::sample_reader::SampleReader;
use crate::traits::toggle_source::ToggleSource;

use super::capture::CaptureState;

/// Feed samples from `reader` into `state` until something fails.
///
/// Only returns on error: a failed or short read, a failed or short write,
/// or a rejected chunk. The driver decides whether that is fatal.
pub fn run_producer<R: Read>(
    reader: &mut SampleReader<R>,
    state: &CaptureState,
) -> Result<Infallible, CaptureError> {
    loop {
        let sample = reader.read_sample()?;
        let n = state.write(sample)?;
        if n != sample.len() {
            return Err(CaptureError::ShortWrite {
                expected: sample.len(),
                written: n,
            });
        }
    }
}

/// Apply toggle events to `state` until the source runs dry.
///
/// Stops at the first failed activation and hands the error back.
pub fn run_toggles<T: ToggleSource + ?Sized>(
    source: &mut T,
    state: &CaptureState,
) -> Result<(), CaptureError> {
    while let Some(event) = source.next_event() {
        state.apply(event)?;
        log::debug!("toggle event {:?}, now {}", event, state.mode());
    }
    log::debug!("toggle source closed");
    Ok(())
}
