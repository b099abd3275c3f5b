//! Game configuration.
//!
//! A game is fully described by its board size and the largest tile
//! magnitude. Everything else (stone counts, tile supply) is derived.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Board side length used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Largest tile magnitude in the standard ruleset.
pub const MAX_TILE_VALUE: i32 = 4;

/// Largest tile magnitude a configuration may ask for.
pub const TILE_VALUE_LIMIT: i32 = 1024;

/// Configuration for a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board. Must be a positive multiple of 4.
    pub board_size: usize,

    /// Largest tile magnitude. Tiles range over `[-max, -1] ∪ [1, max]`.
    pub max_tile_value: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            max_tile_value: MAX_TILE_VALUE,
        }
    }
}

impl GameConfig {
    /// Create a config for the given board size with standard tiles.
    #[must_use]
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the largest tile magnitude.
    #[must_use]
    pub fn with_max_tile_value(mut self, max: i32) -> Self {
        self.max_tile_value = max;
        self
    }

    /// Items each player is entitled to: one quarter of the board.
    #[must_use]
    pub fn num_items(&self) -> u32 {
        (self.board_size * self.board_size / 4) as u32
    }

    /// Check the board size and tile range.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_size == 0 || self.board_size % 4 != 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "board size must be a positive multiple of 4, not {}",
                self.board_size
            )));
        }
        if self.board_size > u16::MAX as usize {
            return Err(GameError::InvalidConfiguration(format!(
                "board size {} is too large",
                self.board_size
            )));
        }
        if !(1..=TILE_VALUE_LIMIT).contains(&self.max_tile_value) {
            return Err(GameError::InvalidConfiguration(format!(
                "max tile value must be between 1 and {TILE_VALUE_LIMIT}, not {}",
                self.max_tile_value
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.max_tile_value, 4);
        assert_eq!(config.num_items(), 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new(12).with_max_tile_value(6);
        assert_eq!(config.board_size, 12);
        assert_eq!(config.max_tile_value, 6);
        assert_eq!(config.with_board_size(4).num_items(), 4);
    }

    #[test]
    fn test_rejects_bad_board_sizes() {
        for size in [0, 1, 2, 6, 10, 13] {
            let result = GameConfig::new(size).validate();
            assert!(
                matches!(result, Err(GameError::InvalidConfiguration(_))),
                "size {} should be rejected",
                size
            );
        }
    }

    #[test]
    fn test_rejects_bad_tile_range() {
        for max in [0, -3, TILE_VALUE_LIMIT + 1, 300_000_000, i32::MAX] {
            let result = GameConfig::default().with_max_tile_value(max).validate();
            assert!(
                matches!(result, Err(GameError::InvalidConfiguration(_))),
                "max tile value {} should be rejected",
                max
            );
        }
        let widest = GameConfig::default().with_max_tile_value(TILE_VALUE_LIMIT);
        assert!(widest.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(16);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
