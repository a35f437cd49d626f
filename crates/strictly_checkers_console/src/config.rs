//! Game configuration: TOML file plus command-line overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_checkers::IllegalMovePolicy;
use tracing::{debug, info, instrument};

/// Settings for one console game.
///
/// ```toml
/// white_name = "Alice"
/// black_name = "Bob"
/// illegal_moves = "retry"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Name of the White player.
    #[serde(default = "default_white_name")]
    white_name: String,

    /// Name of the Black player.
    #[serde(default = "default_black_name")]
    black_name: String,

    /// What happens to the turn after an illegal move.
    #[serde(default)]
    illegal_moves: IllegalMovePolicy,
}

#[instrument]
fn default_white_name() -> String {
    "Player 1".to_string()
}

#[instrument]
fn default_black_name() -> String {
    "Player 2".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            white_name: default_white_name(),
            black_name: default_black_name(),
            illegal_moves: IllegalMovePolicy::default(),
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(white = %config.white_name, black = %config.black_name, "Config loaded successfully");
        Ok(config)
    }

    /// Builds the configuration for a run: the file named on the command line
    /// (or defaults), then any flags given explicitly.
    #[instrument(skip(cli))]
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    /// Applies command-line flags on top of this configuration.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(name) = &cli.white {
            self.white_name = name.clone();
        }
        if let Some(name) = &cli.black {
            self.black_name = name.clone();
        }
        if let Some(policy) = cli.illegal_moves {
            self.illegal_moves = policy;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
