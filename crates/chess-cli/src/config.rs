//! Configuration file loading for the terminal front end.
//!
//! The file is TOML with a `[rules]` table passed straight to the engine and
//! a `[display]` table for rendering options. A missing file means defaults.

use chess_rules::RulesConfig;
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

/// Rendering options.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Print rank numbers and file letters around the board.
    pub coordinates: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { coordinates: true }
    }
}

/// Top-level configuration file.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CliConfig {
    pub rules: RulesConfig,
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Loads the configuration from `path`, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            tracing::debug!("No config file at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path, `chess.toml` in the current
    /// working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }
}
