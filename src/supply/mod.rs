//! Stones and tiles available to each player.
//!
//! - `TileSupply`: deterministic tile counts derived from the board size
//! - `PlayerRecord`: a player's remaining stones and tiles

pub mod record;
pub mod tiles;

pub use record::PlayerRecord;
pub use tiles::TileSupply;
