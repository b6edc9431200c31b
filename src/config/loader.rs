use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Smallest and largest accepted avatar edge, in terminal columns.
const AVATAR_SIZE_RANGE: std::ops::RangeInclusive<u16> = 4..=64;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/profile-view/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("profile-view").join("config.toml")
    }

    /// Loads and validates configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses `path` without validating, so command line overrides can be
    /// applied first.
    ///
    /// If the file doesn't exist, returns `Config::default()`.
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The endpoint is not blank (whether it parses is the fetcher's call)
    /// - Timeouts and tick rate are non-zero
    /// - The avatar size is within the supported range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "fetch.endpoint must not be empty".to_string(),
            });
        }

        if self.fetch.timeout_seconds == 0 || self.fetch.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "fetch timeouts must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if !AVATAR_SIZE_RANGE.contains(&self.ui.avatar_size) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.avatar_size {} outside {}..={}",
                    self.ui.avatar_size,
                    AVATAR_SIZE_RANGE.start(),
                    AVATAR_SIZE_RANGE.end()
                ),
            });
        }

        Ok(())
    }
}
