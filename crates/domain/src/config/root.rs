use serde::{Deserialize, Serialize};
use std::path::Path;

use super::decoder::DecoderConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_FILE: &str = "ferrous-mdns.toml";

/// Main configuration structure for Ferrous mDNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Message decoder tunables
    #[serde(default)]
    pub decoder: DecoderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-mdns.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_FILE).exists() {
            Self::from_file(LOCAL_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.strict_section_counts {
            self.decoder.strict_section_counts = true;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decoder.max_pointer_hops == 0 {
            return Err(ConfigError::Validation(
                "decoder.max_pointer_hops must be at least 1".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.level cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub strict_section_counts: bool,
}
