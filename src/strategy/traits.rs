//! The player capability.

use crate::board::Board;
use crate::core::{Move, PlayerId, PlayerMap, StrategyError};
use crate::scoring::Scores;
use crate::supply::PlayerRecord;

/// Anything that can choose a move.
///
/// Strategies see the game only through shared borrows: the board, the
/// token of the player they are moving for, every player's remaining
/// inventory (keyed by token) and the current scores. They cannot reach
/// the live game or another strategy.
///
/// `Send` lets independent tournaments run on separate threads.
pub trait Strategy: Send {
    /// Display name used in standings and logs.
    fn name(&self) -> &str;

    /// Choose the next move for `current`.
    ///
    /// Returning an illegal move is not an error here; the game rejects it
    /// and the tournament stops with that rejection.
    fn decide_move(
        &mut self,
        board: &Board,
        current: PlayerId,
        players: &PlayerMap<PlayerRecord>,
        scores: &Scores,
    ) -> Result<Move, StrategyError>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn decide_move(
        &mut self,
        board: &Board,
        current: PlayerId,
        players: &PlayerMap<PlayerRecord>,
        scores: &Scores,
    ) -> Result<Move, StrategyError> {
        (**self).decide_move(board, current, players, scores)
    }
}
