use std::io;

use tokio::runtime::{Builder, Runtime};
use tokio::signal::unix::{signal, Signal, SignalKind};

use preroll_core::{ToggleEvent, ToggleSource};

/// Toggle source fed by SIGUSR1 (activate) and SIGUSR2 (deactivate).
///
/// Handlers are installed in `new`, so build this before reading any input:
/// an early SIGUSR1 would otherwise kill the process. A small
/// current-thread runtime drives the signal streams from whichever thread
/// calls `next_event`. Other signals keep their default handling.
pub struct SignalToggleSource {
    runtime: Runtime,
    activate: Signal,
    deactivate: Signal,
}

impl SignalToggleSource {
    pub fn new() -> io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let (activate, deactivate) = {
            let _guard = runtime.enter();
            (
                signal(SignalKind::user_defined1())?,
                signal(SignalKind::user_defined2())?,
            )
        };
        log::debug!("listening for SIGUSR1 (activate) and SIGUSR2 (deactivate)");

        Ok(Self {
            runtime,
            activate,
            deactivate,
        })
    }
}

impl ToggleSource for SignalToggleSource {
    fn next_event(&mut self) -> Option<ToggleEvent> {
        let Self {
            runtime,
            activate,
            deactivate,
        } = self;

        runtime.block_on(async {
            tokio::select! {
                Some(()) = activate.recv() => Some(ToggleEvent::Activate),
                Some(()) = deactivate.recv() => Some(ToggleEvent::Deactivate),
                else => None,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raise(name: &str) {
        let status = std::process::Command::new("kill")
            .arg(format!("-{}", name))
            .arg(std::process::id().to_string())
            .status()
            .unwrap();
        assert!(status.success());
    }

    // Both signals in one test: the handlers are process-wide.
    #[test]
    fn maps_user_signals_to_events() {
        let mut source = SignalToggleSource::new().unwrap();

        raise("USR1");
        assert_eq!(source.next_event(), Some(ToggleEvent::Activate));

        raise("USR2");
        assert_eq!(source.next_event(), Some(ToggleEvent::Deactivate));
    }
}
