//! Configuration file loading for the terminal driver.
//!
//! Settings come from `chess-play.toml` when present, then command-line
//! flags override individual fields.

use chess_core::Side;
use chess_engine::SearchConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Deepest search the driver accepts.
pub const MAX_DEPTH: u8 = 6;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Search depth outside `1..=MAX_DEPTH`.
    #[error("Invalid search depth {0}: expected 1 to 6")]
    InvalidDepth(u8),
}

/// Which side the human controls.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HumanSide {
    #[default]
    Friendly,
    Opponent,
}

impl From<HumanSide> for Side {
    fn from(side: HumanSide) -> Self {
        match side {
            HumanSide::Friendly => Side::Friendly,
            HumanSide::Opponent => Side::Opponent,
        }
    }
}

/// Driver settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    /// Engine search depth in plies. Defaults to 2.
    #[serde(default = "default_depth")]
    pub depth: u8,
    /// The side typed moves are played for. Defaults to friendly.
    #[serde(default)]
    pub human_side: HumanSide,
    /// Time the engine gets per turn before it forfeits. Defaults to 5000.
    #[serde(default = "default_turn_budget_ms")]
    pub turn_budget_ms: u64,
    /// Let the engine play both sides.
    #[serde(default)]
    pub self_play: bool,
    /// Stop after this many plies. Defaults to 200.
    #[serde(default = "default_max_plies")]
    pub max_plies: u32,
}

fn default_depth() -> u8 {
    2
}

fn default_turn_budget_ms() -> u64 {
    5000
}

fn default_max_plies() -> u32 {
    200
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            depth: default_depth(),
            human_side: HumanSide::default(),
            turn_budget_ms: default_turn_budget_ms(),
            self_play: false,
            max_plies: default_max_plies(),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub depth: Option<u8>,
    pub turn_budget_ms: Option<u64>,
    pub self_play: bool,
    pub max_plies: Option<u32>,
}

impl PlayConfig {
    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the defaults.
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

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// The default configuration file path.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess-play.toml")
    }

    /// Applies command-line overrides.
    pub fn apply(mut self, overrides: &Overrides) -> Self {
        if let Some(depth) = overrides.depth {
            self.depth = depth;
        }
        if let Some(ms) = overrides.turn_budget_ms {
            self.turn_budget_ms = ms;
        }
        if overrides.self_play {
            self.self_play = true;
        }
        if let Some(plies) = overrides.max_plies {
            self.max_plies = plies;
        }
        self
    }

    /// Checks value ranges.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(ConfigError::InvalidDepth(self.depth));
        }
        Ok(self)
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new(self.depth)
    }

    pub fn turn_budget(&self) -> Duration {
        Duration::from_millis(self.turn_budget_ms)
    }

    /// Whether the engine plays `side`.
    pub fn engine_plays(&self, side: Side) -> bool {
        self.self_play || side != Side::from(self.human_side)
    }
}
