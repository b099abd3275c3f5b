//! JSON messages exchanged with external agents.
//!
//! One object per line in each direction. A request carries everything a
//! strategy is shown:
//!
//! ```json
//! {"board": [[null, "P0", 3, ...], ...],
//!  "current_player": "P1",
//!  "players": {"P0": {"stones": 15, "tiles": {"-4": 1, "1": 2, ...}}, ...},
//!  "scores": {"P0": 3, "P1": 0}}
//! ```
//!
//! and the reply names one move: `{"position": [row, col], "item": 0}`,
//! where item `0` is a stone and anything else a tile value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Position};
use crate::core::{Move, PlayerId, PlayerMap, StrategyError};
use crate::scoring::Scores;
use crate::supply::PlayerRecord;

/// An occupied cell. Empty cells are `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireCell {
    Stone(String),
    Tile(i32),
}

/// One player's inventory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRecord {
    pub stones: u32,
    pub tiles: BTreeMap<i32, u32>,
}

impl From<&PlayerRecord> for WireRecord {
    fn from(record: &PlayerRecord) -> Self {
        Self {
            stones: record.stones,
            tiles: record.tiles.iter().collect(),
        }
    }
}

/// Everything sent to an agent for one decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub board: Vec<Vec<Option<WireCell>>>,
    pub current_player: String,
    pub players: BTreeMap<String, WireRecord>,
    pub scores: BTreeMap<String, i64>,
}

impl DecisionRequest {
    /// Snapshot the view a strategy is given.
    #[must_use]
    pub fn new(
        board: &Board,
        current: PlayerId,
        players: &PlayerMap<PlayerRecord>,
        scores: &Scores,
    ) -> Self {
        let board = board
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match *cell {
                        Cell::Empty => None,
                        Cell::Stone(owner) => Some(WireCell::Stone(owner.token())),
                        Cell::Tile(value) => Some(WireCell::Tile(value)),
                    })
                    .collect()
            })
            .collect();

        Self {
            board,
            current_player: current.token(),
            players: players
                .iter()
                .map(|(p, record)| (p.token(), WireRecord::from(record)))
                .collect(),
            scores: scores.iter().map(|(p, s)| (p.token(), *s)).collect(),
        }
    }
}

/// An agent's answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub position: [i64; 2],
    pub item: i32,
}

impl DecisionResponse {
    /// Convert into a move. Coordinates must be non-negative; range against
    /// the board is left to the game.
    pub fn into_move(self) -> Result<Move, StrategyError> {
        let [row, col] = self.position;
        let coord = |v: i64| {
            usize::try_from(v)
                .map_err(|_| StrategyError::Protocol(format!("negative coordinate {v}")))
        };
        Ok(Move::from_raw(Position::new(coord(row)?, coord(col)?), self.item))
    }
}

impl From<Move> for DecisionResponse {
    fn from(mv: Move) -> Self {
        Self {
            position: [mv.position.row as i64, mv.position.col as i64],
            item: mv.item.raw(),
        }
    }
}
