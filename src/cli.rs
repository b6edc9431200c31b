//! Command line arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "profile-view", version, about = "Show a GitHub user profile in the terminal")]
pub struct Cli {
    /// Profile resource to fetch (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the log file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Applies command line overrides on top of a loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(endpoint) = &self.endpoint {
            config.fetch.endpoint = endpoint.clone();
        }
        config
    }

    /// Reads the config file, applies overrides, then validates the result.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let config = self.apply(Config::read_from(&path)?);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_flag_overrides_config() {
        let cli = Cli::parse_from(["profile-view", "--endpoint", "https://example.com/u"]);
        let config = cli.apply(Config::default());
        assert_eq!(config.fetch.endpoint, "https://example.com/u");
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["profile-view"]);
        let config = cli.apply(Config::default());
        assert_eq!(config, Config::default());
    }
}
