//! # Infrastructure Layer
//!
//! Process-level concerns: configuration loading and logging setup.

pub mod config;
pub mod logging;

pub use config::{AppConfig, ConfigError, LogFormat, LoggingSettings, SelectionSettings};
pub use logging::{LoggingError, init_tracing};
