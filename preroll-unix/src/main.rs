use std::io;
use std::process;
use std::sync::Arc;
use std::thread;

use preroll_core::{run_producer, run_toggles, CaptureConfiguration, CaptureState, SampleReader};
use preroll_unix::args::{self, USAGE};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match args::parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    run(config);
}

#[cfg(unix)]
fn run(config: CaptureConfiguration) -> ! {
    use preroll_unix::SignalToggleSource;

    let state = Arc::new(CaptureState::from_config(&config));

    // Handlers go in before the first read.
    let mut source = match SignalToggleSource::new() {
        Ok(source) => source,
        Err(e) => {
            log::error!("failed to install signal handlers: {}", e);
            process::exit(1);
        }
    };

    let toggle_state = Arc::clone(&state);
    let spawned = thread::Builder::new()
        .name("toggle-events".into())
        .spawn(move || match run_toggles(&mut source, &toggle_state) {
            Ok(()) => log::warn!("signal source closed; no further toggles"),
            Err(e) => {
                log::error!("{}", e);
                toggle_state.shutdown();
                process::exit(1);
            }
        });
    if let Err(e) = spawned {
        log::error!("failed to spawn toggle thread: {}", e);
        process::exit(1);
    }

    log::info!(
        "buffering {}-byte samples, {} bytes of pre-roll ({} samples), output {}",
        config.sample_size,
        config.ring_capacity,
        config.preroll_samples(),
        state.path().display()
    );

    let mut reader = SampleReader::new(io::stdin().lock(), config.sample_size);
    let err = match run_producer(&mut reader, &state) {
        Ok(never) => match never {},
        Err(e) => e,
    };
    log::error!("{}", err);

    state.shutdown();
    log::debug!("{:?}", state.diagnostics());
    process::exit(1);
}

#[cfg(not(unix))]
fn run(_config: CaptureConfiguration) -> ! {
    log::error!("preroll needs Unix signals (SIGUSR1 / SIGUSR2)");
    process::exit(1);
}
