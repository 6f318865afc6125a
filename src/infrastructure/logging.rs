//! # Logging
//!
//! Installs the global `tracing` subscriber.

use crate::infrastructure::config::{LogFormat, LoggingSettings};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Logging setup error.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber was already installed.
    #[error("failed to install subscriber: {0}")]
    Install(String),
}

/// Installs a fmt subscriber writing to stderr.
///
/// `RUST_LOG` overrides `settings.level` when set.
///
/// # Errors
///
/// Returns `LoggingError::InvalidFilter` for a bad directive and
/// `LoggingError::Install` if a global subscriber already exists.
pub fn init_tracing(settings: &LoggingSettings) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| LoggingError::InvalidFilter(e.to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match settings.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    installed.map_err(|e| LoggingError::Install(e.to_string()))
}
