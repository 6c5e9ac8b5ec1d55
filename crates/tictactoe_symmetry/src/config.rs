//! Enumeration settings loaded from TOML.

use crate::error::ConfigError;
use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Deepest possible game: one ply per cell.
pub const MAX_PLIES: usize = 9;

/// Settings for one enumeration run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Mark playing the first ply.
    #[serde(default = "default_first_mark")]
    first_mark: Mark,

    /// Number of turns after which the driver stops (1-9).
    #[serde(default = "default_max_plies")]
    max_plies: usize,
}

#[instrument]
fn default_first_mark() -> Mark {
    Mark::X
}

#[instrument]
fn default_max_plies() -> usize {
    MAX_PLIES
}

impl TreeConfig {
    /// Creates a configuration, validating the ply limit.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `max_plies` is outside 1-9.
    #[instrument]
    pub fn new(first_mark: Mark, max_plies: usize) -> Result<Self, ConfigError> {
        let config = Self {
            first_mark,
            max_plies,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(first_mark = %config.first_mark, max_plies = config.max_plies, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    #[track_caller]
    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_PLIES).contains(&self.max_plies) {
            return Err(ConfigError::new(format!(
                "max_plies must be between 1 and {}, got {}",
                MAX_PLIES, self.max_plies
            )));
        }
        Ok(())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            first_mark: default_first_mark(),
            max_plies: default_max_plies(),
        }
    }
}
