//! Error types.
//!
//! `GameError` is the rules taxonomy: every failure the board, the state
//! machine or the tournament can report. `StrategyError` covers a strategy
//! failing to produce a move at all; the tournament wraps it in
//! `GameError::MoveRequest` so transport details never leak into the rules.

use std::time::Duration;

use thiserror::Error;

use super::player::PlayerId;
use crate::board::Position;

/// Errors raised by the rules engine and the tournament.
#[derive(Debug, Error)]
pub enum GameError {
    /// Malformed board size, tile range or player registration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Position outside the grid.
    #[error("position {position} is outside the {size}x{size} board")]
    OutOfRange { position: Position, size: usize },

    /// Position already holds a stone or a tile.
    #[error("position {0} is already taken")]
    CellOccupied(Position),

    /// Stone played with none left.
    #[error("{0} has no stones left")]
    InsufficientStones(PlayerId),

    /// Tile value that is not part of the supply.
    #[error("{player} played tile {value}, which is not a valid tile value")]
    UnknownTileValue { player: PlayerId, value: i32 },

    /// Tile value that the player has run out of.
    #[error("{player} has no tiles of value {value} left")]
    InsufficientTiles { player: PlayerId, value: i32 },

    /// Move attempted before any players were registered.
    #[error("no players registered")]
    NotStarted,

    /// The strategy for `player` could not produce a move.
    #[error("{player} failed to produce a move: {source}")]
    MoveRequest {
        player: PlayerId,
        #[source]
        source: StrategyError,
    },
}

/// Failures of a strategy to answer a move request.
#[derive(Debug, Error)]
pub enum StrategyError {
    /// Reading from or writing to an external agent failed.
    #[error("agent i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The agent's answer could not be understood.
    #[error("malformed agent response: {0}")]
    Protocol(String),

    /// The agent did not answer in time.
    #[error("agent did not answer within {0:?}")]
    Timeout(Duration),

    /// The agent closed its output stream.
    #[error("agent disconnected")]
    Disconnected,

    /// The strategy holds nothing it can place, or the board is full.
    #[error("no legal move available")]
    NoLegalMove,
}

impl From<serde_json::Error> for StrategyError {
    fn from(err: serde_json::Error) -> Self {
        StrategyError::Protocol(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::OutOfRange {
            position: Position::new(4, 0),
            size: 4,
        };
        assert_eq!(err.to_string(), "position (4, 0) is outside the 4x4 board");

        let err = GameError::InsufficientTiles {
            player: PlayerId::new(1),
            value: -3,
        };
        assert_eq!(err.to_string(), "Player 1 has no tiles of value -3 left");
    }

    #[test]
    fn test_move_request_keeps_source() {
        use std::error::Error as _;

        let err = GameError::MoveRequest {
            player: PlayerId::new(0),
            source: StrategyError::Timeout(Duration::from_millis(50)),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("Player 0 failed to produce a move"));
    }

    #[test]
    fn test_json_error_becomes_protocol() {
        let parse: Result<u32, _> = serde_json::from_str("not json");
        let err: StrategyError = parse.unwrap_err().into();
        assert!(matches!(err, StrategyError::Protocol(_)));
    }
}
