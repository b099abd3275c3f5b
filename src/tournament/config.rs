//! Tournament configuration.

use serde::{Deserialize, Serialize};

use crate::core::GameConfig;

/// Configuration for a round-robin tournament.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Settings for every game played.
    pub game: GameConfig,
}

impl TournamentConfig {
    /// Create a config with the default board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size for every game.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.game = self.game.with_board_size(size);
        self
    }

    /// Set the largest tile magnitude.
    #[must_use]
    pub fn with_max_tile_value(mut self, max: i32) -> Self {
        self.game = self.game.with_max_tile_value(max);
        self
    }

    /// Replace the whole game configuration.
    #[must_use]
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DEFAULT_BOARD_SIZE, MAX_TILE_VALUE};

    #[test]
    fn test_builder() {
        let config = TournamentConfig::new().with_board_size(12).with_max_tile_value(3);
        assert_eq!(config.game.board_size, 12);
        assert_eq!(config.game.max_tile_value, 3);

        let default = TournamentConfig::default();
        assert_eq!(default.game.board_size, DEFAULT_BOARD_SIZE);
        assert_eq!(default.game.max_tile_value, MAX_TILE_VALUE);
    }

    #[test]
    fn test_serde() {
        let config: TournamentConfig =
            serde_json::from_str(r#"{"game": {"board_size": 4, "max_tile_value": 4}}"#).unwrap();
        assert_eq!(config, TournamentConfig::new().with_board_size(4));
    }
}
