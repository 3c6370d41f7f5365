use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::{Color, WALLS_PER_PLAYER};
use crate::engine::{Opponent, Strategy};
use crate::error::ConfigError;
use crate::search::SearchConfig;

/// Largest wall inventory accepted per player
pub const MAX_WALLS: u8 = 20;

/// Engine and match configuration, loadable from TOML.
///
/// ```toml
/// walls_per_player = 10
/// white = "minimax"
/// black = "greedy"
/// seed = 42
///
/// [search]
/// depth = 2
/// vertical_wall_turn = 10
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub walls_per_player: u8,
    pub search: SearchConfig,
    pub white: Strategy,
    pub black: Strategy,
    /// Fixed RNG seed for reproducible matches
    pub seed: Option<u64>,
    /// Plies after which a match is abandoned as a draw
    pub max_plies: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            walls_per_player: WALLS_PER_PLAYER,
            search: SearchConfig::default(),
            white: Strategy::Minimax,
            black: Strategy::Greedy,
            seed: None,
            max_plies: 400,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if self.walls_per_player > MAX_WALLS {
            return Err(ConfigError::Validation(format!(
                "walls_per_player must be <= {MAX_WALLS}"
            )));
        }
        if self.max_plies == 0 {
            return Err(ConfigError::Validation("max_plies must be > 0".into()));
        }
        for (side, strategy) in [("white", self.white), ("black", self.black)] {
            if let Some(p) = strategy.block_probability() {
                if !(0.0..=1.0).contains(&p) {
                    return Err(ConfigError::Validation(format!(
                        "{side} blocker probability must be in [0, 1]"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn strategy(&self, color: Color) -> Strategy {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Build the opponent for `color`. Seeded configs give each side its own
    /// stream.
    pub fn opponent(&self, color: Color) -> Opponent {
        let seed = self.seed.map(|s| s.wrapping_add(color.index() as u64));
        Opponent::with_config(self.strategy(color), self.search, seed)
    }
}
