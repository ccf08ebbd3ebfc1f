//! Self-play settings, read from TOML.
//!
//! ```toml
//! white_level = 4
//! black_level = 2
//! games = 10
//! max_plies = 200
//! alternate_colors = true
//! seed = 7
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use opponent::Difficulty;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for a series of games
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Level playing White in the first game
    pub white_level: Difficulty,
    /// Level playing Black in the first game
    pub black_level: Difficulty,
    /// Number of games to play
    pub games: u32,
    /// Half-moves per game before it is scored as a draw
    pub max_plies: u32,
    /// Whether the levels swap colours every game
    pub alternate_colors: bool,
    /// Seed for the random levels; None draws from the OS
    pub seed: Option<u64>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            white_level: Difficulty::new(4),
            black_level: Difficulty::new(3),
            games: 10,
            max_plies: 200,
            alternate_colors: true,
            seed: None,
        }
    }
}

impl SelfPlayConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Levels playing (White, Black) in game `index`, counting from 0.
    pub fn levels_for_game(&self, index: u32) -> (Difficulty, Difficulty) {
        if self.alternate_colors && index % 2 == 1 {
            (self.black_level, self.white_level)
        } else {
            (self.white_level, self.black_level)
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
