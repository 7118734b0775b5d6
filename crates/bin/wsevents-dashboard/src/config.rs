//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `wsevents-dashboard.toml` in the working directory. The file is
//! optional; without it the dashboard follows `ws://server:5003/events` and
//! watches no sequences.

use serde::Deserialize;
use wsevents_adapter_ws_client::ClientConfig;
use wsevents_domain::error::ValidationError;
use wsevents_domain::sequence::SequenceDefinition;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event feed connection.
    pub connection: ClientConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Sequences to watch for, declared as `[[sequences]]` tables.
    pub sequences: Vec<SequenceDefinition>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `wsevents-dashboard.toml` (if present) then
    /// apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("wsevents-dashboard.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("WSEVENTS_URL") {
            self.connection.url = val;
        }
        if let Ok(val) = std::env::var("WSEVENTS_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.connection.url;
        if !(url.starts_with("ws://") || url.starts_with("wss://")) {
            return Err(ConfigError::Validation(format!(
                "connection url {url:?} must start with ws:// or wss://"
            )));
        }
        for sequence in &self.sequences {
            sequence.validate()?;
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// A `[[sequences]]` entry is malformed.
    #[error("invalid sequence")]
    Sequence(#[from] ValidationError),
}
