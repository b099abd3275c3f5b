//! Move representation: a position plus the item placed there.
//!
//! Strategies and the wire protocol use the raw integer convention
//! (`0` is a stone, anything else a tile of that value); inside the engine
//! it is an `Item`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::Position;

/// What gets placed on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    /// A stone of the moving player.
    Stone,
    /// A tile with a signed, non-zero value.
    Tile(i32),
}

impl Item {
    /// Decode the raw convention: `0` is a stone, anything else a tile.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        if raw == 0 {
            Item::Stone
        } else {
            Item::Tile(raw)
        }
    }

    /// Encode back to the raw convention.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Item::Stone => 0,
            Item::Tile(value) => value,
        }
    }
}

impl From<i32> for Item {
    fn from(raw: i32) -> Self {
        Item::from_raw(raw)
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Stone => write!(f, "stone"),
            Item::Tile(value) => write!(f, "tile {:+}", value),
        }
    }
}

/// A complete move.
///
/// ```
/// use isis_osiris::board::Position;
/// use isis_osiris::core::{Item, Move};
///
/// let stone = Move::from_raw(Position::new(0, 3), 0);
/// assert_eq!(stone.item, Item::Stone);
///
/// let tile = Move::from_raw(Position::new(2, 2), -4);
/// assert_eq!(tile.item, Item::Tile(-4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Target cell.
    pub position: Position,
    /// Placed item.
    pub item: Item,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(position: Position, item: Item) -> Self {
        Self { position, item }
    }

    /// Create a move from the raw item convention (`0` is a stone).
    #[must_use]
    pub const fn from_raw(position: Position, raw: i32) -> Self {
        Self::new(position, Item::from_raw(raw))
    }

    /// Place a stone.
    #[must_use]
    pub const fn stone(position: Position) -> Self {
        Self::new(position, Item::Stone)
    }

    /// Place a tile.
    #[must_use]
    pub const fn tile(position: Position, value: i32) -> Self {
        Self::from_raw(position, value)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.item, self.position)
    }
}

/// An applied move, kept in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The move taken.
    pub mv: Move,

    /// Zero-based position in the game's move sequence.
    pub sequence: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_raw_convention() {
        assert_eq!(Item::from_raw(0), Item::Stone);
        assert_eq!(Item::from_raw(3), Item::Tile(3));
        assert_eq!(Item::from_raw(-1), Item::Tile(-1));
        assert_eq!(Item::Tile(-2).raw(), -2);
        assert_eq!(Item::Stone.raw(), 0);
    }

    #[test]
    fn test_move_constructors() {
        let pos = Position::new(1, 2);
        assert_eq!(Move::stone(pos), Move::from_raw(pos, 0));
        assert_eq!(Move::tile(pos, 4).item, Item::Tile(4));
        // A zero tile is a stone under the raw convention.
        assert_eq!(Move::tile(pos, 0).item, Item::Stone);
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::tile(Position::new(1, 3), -2).to_string(), "tile -2 at (1, 3)");
        assert_eq!(Move::stone(Position::new(0, 0)).to_string(), "stone at (0, 0)");
    }
}
