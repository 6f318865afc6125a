//! # Configuration
//!
//! Layered application settings.
//!
//! Sources, lowest precedence first:
//!
//! ```text
//! serde defaults -> TOML file (optional) -> SELLER_SELECT_* environment
//! ```
//!
//! A `.env` file in the working directory is loaded into the process
//! environment first, when present. Nested keys use `__` in variable names,
//! e.g. `SELLER_SELECT_SELECTION__DEFAULT_DEVIATION=5`.
//!
//! # Examples
//!
//! ```
//! use seller_select::infrastructure::config::{AppConfig, LogFormat};
//!
//! let config = AppConfig::from_toml_str(
//!     r#"
//!     [selection]
//!     default_deviation = 2
//!
//!     [logging]
//!     format = "json"
//!     "#,
//! ).unwrap();
//!
//! assert_eq!(config.selection.default_deviation, 2);
//! assert_eq!(config.logging.format, LogFormat::Json);
//! assert_eq!(config.logging.level, "info");
//! ```

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SELLER_SELECT";

/// Default log filter directive.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),

    /// Values were read but are not acceptable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Selection defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionSettings {
    /// Deviation used when a caller does not pass one.
    pub default_deviation: u64,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Selection defaults.
    pub selection: SelectionSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Loads configuration from `.env`, an optional TOML file and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if the file is missing or malformed, or
    /// `ConfigError::Invalid` if the merged values are unusable.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();

        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        let config: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a TOML string, ignoring the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if the TOML is malformed or has wrong
    /// types, or `ConfigError::Invalid` if the values are unusable.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
