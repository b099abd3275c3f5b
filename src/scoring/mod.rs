//! Adjacency scoring.
//!
//! Each stone earns the sum of the tile values orthogonally next to it.
//! Stones never score against other stones and a tile counts once for
//! every adjacent stone. Scoring only reads the board, so it can be
//! queried at any point of a game.

use crate::board::{Board, Cell, Position};
use crate::core::{PlayerId, PlayerMap};

/// Score per player.
pub type Scores = PlayerMap<i64>;

/// Sum of the tiles next to `position`.
#[must_use]
pub fn adjacent_tile_sum(board: &Board, position: Position) -> i64 {
    board
        .neighbors(position)
        .filter_map(|p| board.get(p).ok().and_then(Cell::tile_value))
        .map(i64::from)
        .sum()
}

/// Score every player in `players` on the current board.
///
/// Every listed player gets an entry, starting at 0. Stones of players not
/// in the list are ignored.
///
/// ```
/// use isis_osiris::board::{Board, Cell, Position};
/// use isis_osiris::core::PlayerId;
/// use isis_osiris::scoring::score;
///
/// let a = PlayerId::new(0);
/// let mut board = Board::new(4).unwrap();
/// board.set(Position::new(1, 1), Cell::Stone(a)).unwrap();
/// board.set(Position::new(0, 1), Cell::Tile(3)).unwrap();
/// board.set(Position::new(1, 2), Cell::Tile(-2)).unwrap();
///
/// let scores = score(&board, &[a, PlayerId::new(1)]);
/// assert_eq!(scores[a], 1);
/// assert_eq!(scores[PlayerId::new(1)], 0);
/// ```
#[must_use]
pub fn score(board: &Board, players: &[PlayerId]) -> Scores {
    let mut scores = Scores::with_value(players, 0);

    for (position, cell) in board.cells() {
        if let Cell::Stone(owner) = cell {
            if let Some(total) = scores.get_mut(owner) {
                *total += adjacent_tile_sum(board, position);
            }
        }
    }

    scores
}

/// Score change for each player if `cell` were placed at an empty `position`.
///
/// The board itself is not modified.
#[must_use]
pub fn placement_delta(
    board: &Board,
    players: &[PlayerId],
    position: Position,
    cell: Cell,
) -> Scores {
    let mut delta = Scores::with_value(players, 0);

    match cell {
        Cell::Empty => {}
        Cell::Stone(owner) => {
            if let Some(total) = delta.get_mut(owner) {
                *total += adjacent_tile_sum(board, position);
            }
        }
        Cell::Tile(value) => {
            for neighbor in board.neighbors(position) {
                if let Ok(Cell::Stone(owner)) = board.get(neighbor) {
                    if let Some(total) = delta.get_mut(owner) {
                        *total += i64::from(value);
                    }
                }
            }
        }
    }

    delta
}
