//! Player and logging configuration loaded from TOML.

use crate::games::tictactoe::{Marker, Player, Roster};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// One player's entry in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    name: String,
    /// Board symbol.
    marker: String,
}

impl PlayerConfig {
    /// Creates a player entry.
    pub fn new(name: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: marker.into(),
        }
    }

    fn to_player(&self) -> Player {
        Player::new(self.name.clone(), Marker::new(self.marker.clone()))
    }
}

/// Game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player who moves first.
    #[serde(default = "default_first")]
    first: PlayerConfig,

    /// Player who moves second.
    #[serde(default = "default_second")]
    second: PlayerConfig,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_first() -> PlayerConfig {
    PlayerConfig::new("Player 1", "🐱")
}

fn default_second() -> PlayerConfig {
    PlayerConfig::new("Player 2", "🐶")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first: default_first(),
            second: default_second(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration for two players with the default log file.
    pub fn new(first: PlayerConfig, second: PlayerConfig) -> Self {
        Self {
            first,
            second,
            log_file: default_log_file(),
        }
    }

    /// Parses and validates TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
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
        info!(
            first = %config.first.name,
            second = %config.second.name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks names and markers are present and markers differ.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (label, player) in [("first", &self.first), ("second", &self.second)] {
            if player.name.trim().is_empty() {
                return Err(ConfigError::new(format!("{} player name is empty", label)));
            }
            if player.marker.trim().is_empty() {
                return Err(ConfigError::new(format!(
                    "{} player marker is empty",
                    label
                )));
            }
        }
        if self.first.marker == self.second.marker {
            return Err(ConfigError::new(format!(
                "Both players use marker '{}'",
                self.first.marker
            )));
        }
        Ok(())
    }

    /// Builds the roster the engine plays with.
    pub fn roster(&self) -> Roster {
        Roster::new(self.first.to_player(), self.second.to_player())
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
