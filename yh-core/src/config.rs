//! Game configuration.
//!
//! Loaded from YAML; every field has a default so an empty document is a
//! valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Who fills a card this game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// One human card, no opponent, no winner.
    Solo,
    /// Human against the built-in heuristic opponent.
    #[default]
    VersusOpponent,
}

/// Root configuration for a game.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub mode: GameMode,
    /// Fixed seed for the shared dice RNG. `None` seeds from entropy;
    /// `Some` makes the whole game sequence reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
