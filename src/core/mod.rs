//! Core types: players, moves, configuration, errors, RNG.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Item, Move, MoveRecord};
pub use config::{GameConfig, DEFAULT_BOARD_SIZE, MAX_TILE_VALUE, TILE_VALUE_LIMIT};
pub use error::{GameError, StrategyError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
