//! Per-player inventory of stones and tiles.

use serde::{Deserialize, Serialize};

use super::tiles::TileSupply;
use crate::core::{GameConfig, GameError, Item, PlayerId};

/// What a player still has to place.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Stones left.
    pub stones: u32,

    /// Tiles left, by value.
    pub tiles: TileSupply,
}

impl PlayerRecord {
    /// Create a record from explicit counts.
    #[must_use]
    pub fn new(stones: u32, tiles: TileSupply) -> Self {
        Self { stones, tiles }
    }

    /// Starting inventory for a game: one quarter of the board in stones
    /// plus a full tile supply.
    pub fn initial(config: &GameConfig) -> Result<Self, GameError> {
        Ok(Self::new(config.num_items(), TileSupply::for_config(config)?))
    }

    /// Check that `player` (the owner of this record) may place `item`.
    pub fn check(&self, player: PlayerId, item: Item) -> Result<(), GameError> {
        match item {
            Item::Stone if self.stones == 0 => Err(GameError::InsufficientStones(player)),
            Item::Stone => Ok(()),
            Item::Tile(value) => match self.tiles.get(value) {
                None => Err(GameError::UnknownTileValue { player, value }),
                Some(0) => Err(GameError::InsufficientTiles { player, value }),
                Some(_) => Ok(()),
            },
        }
    }

    /// Remove one `item` from the record. Nothing changes on error.
    pub fn take(&mut self, player: PlayerId, item: Item) -> Result<(), GameError> {
        self.check(player, item)?;
        match item {
            Item::Stone => self.stones -= 1,
            Item::Tile(value) => {
                if let Some(count) = self.tiles.get_mut(value) {
                    *count -= 1;
                }
            }
        }
        Ok(())
    }

    /// Stones plus tiles left.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.stones + self.tiles.total()
    }

    /// True when there is nothing left to place.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.total_items() == 0
    }

    /// Items that can currently be placed, stone first.
    pub fn placeable(&self) -> impl Iterator<Item = Item> + '_ {
        let stone = (self.stones > 0).then_some(Item::Stone);
        stone
            .into_iter()
            .chain(self.tiles.available().map(Item::Tile))
    }
}

impl std::fmt::Display for PlayerRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} stones, tiles [", self.stones)?;
        for (i, (value, count)) in self.tiles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:+}: {}", value, count)?;
        }
        write!(f, "]")
    }
}
