use thiserror::Error;

use preroll_core::CaptureConfiguration;

pub const USAGE: &str = "usage: preroll <output-path> <sample-size> <ring-capacity>\n\
\n\
Reads <sample-size>-byte samples from stdin, keeping the last <ring-capacity>\n\
bytes. SIGUSR1 writes them to <output-path> and starts recording; SIGUSR2 stops.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing argument: {0}")]
    Missing(&'static str),

    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("unexpected argument: {0:?}")]
    Unexpected(String),

    #[error("{0}")]
    Invalid(String),
}

/// Build a validated configuration from the positional arguments
/// (program name already stripped).
pub fn parse_args<I>(args: I) -> Result<CaptureConfiguration, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();

    let output_path = args.next().ok_or(ArgsError::Missing("output-path"))?;
    let sample_size = parse_size("sample-size", args.next())?;
    let ring_capacity = parse_size("ring-capacity", args.next())?;
    if let Some(extra) = args.next() {
        return Err(ArgsError::Unexpected(extra));
    }

    let config = CaptureConfiguration::new(output_path, sample_size, ring_capacity);
    config.validate().map_err(ArgsError::Invalid)?;
    Ok(config)
}

fn parse_size(name: &'static str, value: Option<String>) -> Result<usize, ArgsError> {
    let value = value.ok_or(ArgsError::Missing(name))?;
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ArgsError::InvalidNumber { name, value }),
    }
}
