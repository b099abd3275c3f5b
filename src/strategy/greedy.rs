//! One-ply greedy play.

use crate::board::{Board, Cell};
use crate::core::{Item, Move, PlayerId, PlayerMap, StrategyError};
use crate::scoring::{self, Scores};
use crate::supply::PlayerRecord;

use super::traits::Strategy;

/// Tries every empty cell with every placeable item and keeps the move that
/// most improves its own score relative to the others. Ties go to the first
/// candidate in row-major order, so play is deterministic.
#[derive(Clone, Debug)]
pub struct GreedyStrategy {
    name: String,
}

impl Default for GreedyStrategy {
    fn default() -> Self {
        Self {
            name: "greedy".to_string(),
        }
    }
}

impl GreedyStrategy {
    /// Create a greedy strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Strategy for GreedyStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_move(
        &mut self,
        board: &Board,
        current: PlayerId,
        players: &PlayerMap<PlayerRecord>,
        _scores: &Scores,
    ) -> Result<Move, StrategyError> {
        let record = players.get(current).ok_or(StrategyError::NoLegalMove)?;
        let ids: Vec<PlayerId> = players.player_ids().collect();
        let items: Vec<Item> = record.placeable().collect();

        let mut best: Option<(i64, Move)> = None;
        for position in board.empty_positions() {
            for &item in &items {
                let cell = match item {
                    Item::Stone => Cell::Stone(current),
                    Item::Tile(value) => Cell::Tile(value),
                };
                let delta = scoring::placement_delta(board, &ids, position, cell);
                let advantage: i64 = delta
                    .iter()
                    .map(|(p, d)| if p == current { *d } else { -*d })
                    .sum();

                if best.map_or(true, |(score, _)| advantage > score) {
                    best = Some((advantage, Move::new(position, item)));
                }
            }
        }

        best.map(|(_, mv)| mv).ok_or(StrategyError::NoLegalMove)
    }
}
