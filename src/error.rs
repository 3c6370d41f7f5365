use std::path::PathBuf;

use crate::board::{Color, Pos, Wall};

/// Rejections reported by game operations.
///
/// All of these are expected outcomes of user or opponent input; the game
/// state is left untouched whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("{0} is outside the board")]
    OutOfBounds(Pos),

    #[error("cannot move to {0}")]
    IllegalMove(Pos),

    #[error("{0} overlaps an existing wall")]
    WallOverlap(Wall),

    #[error("{0} crosses an existing wall")]
    WallCrossing(Wall),

    #[error("{0} would cut a player off from their goal")]
    PathBlocked(Wall),

    #[error("that token belongs to the other player")]
    NotYourTurn,

    #[error("no token is selected")]
    NoActiveSelection,

    #[error("no token at {0}")]
    NothingToSelect(Pos),

    #[error("no wall is lifted")]
    NoWallLifted,

    #[error("a wall is lifted; place or drop it first")]
    WallLifted,

    #[error("{} has no walls left", .0.name())]
    InventoryExhausted(Color),

    #[error("game is over, {} won", .0.name())]
    GameOver(Color),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_error_display() {
        let err = RuleError::PathBlocked(Wall::horizontal(3, 4));
        assert_eq!(
            err.to_string(),
            "horizontal wall at (3, 4) would cut a player off from their goal"
        );
    }

    #[test]
    fn test_inventory_error_display() {
        let err = RuleError::InventoryExhausted(Color::Black);
        assert_eq!(err.to_string(), "Black has no walls left");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("search.depth must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search.depth must be >= 1"
        );
    }
}
