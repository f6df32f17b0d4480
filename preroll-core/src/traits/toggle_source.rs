use crate::models::event::ToggleEvent;

/// Interface for whatever tells the capture process to start and stop.
///
/// Implemented by:
/// - `SignalToggleSource` in `preroll-unix` (SIGUSR1 / SIGUSR2)
/// - Any `Iterator<Item = ToggleEvent>`, for scripted runs and tests
///
/// The sequence is lazy and not restartable. `next_event` blocks until the
/// next request arrives and returns `None` only when the source is gone.
pub trait ToggleSource: Send {
    fn next_event(&mut self) -> Option<ToggleEvent>;
}

impl<I> ToggleSource for I
where
    I: Iterator<Item = ToggleEvent> + Send,
{
    fn next_event(&mut self) -> Option<ToggleEvent> {
        self.next()
    }
}
