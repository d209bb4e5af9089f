//! Configuration file loading for the self-play driver.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Self-play settings.
///
/// Every key is optional in the file; missing keys take their defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SelfPlayConfig {
    /// Number of games to play. Defaults to 1.
    #[serde(default = "default_games")]
    pub games: u32,
    /// Plies after which an unfinished game is abandoned. Defaults to 300.
    #[serde(default = "default_max_plies")]
    pub max_plies: u32,
    /// Seed for the move picker. Unseeded runs draw from system entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_games() -> u32 {
    1
}

fn default_max_plies() -> u32 {
    300
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            games: default_games(),
            max_plies: default_max_plies(),
            seed: None,
        }
    }
}

impl SelfPlayConfig {
    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the default configuration file path, `selfplay.toml` in the
    /// current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("selfplay.toml")
    }
}
