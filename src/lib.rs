//! # isis-osiris
//!
//! Engine and round-robin tournament runner for Isis and Osiris, a
//! two-player tile-placement game on an `N x N` board.
//!
//! Players take turns placing either a stone of their own or a signed tile
//! on an empty cell. When the board is full, each stone scores the sum of
//! the tiles orthogonally next to it.
//!
//! ## Design Principles
//!
//! 1. **Validated moves**: every rule check happens before any state
//!    changes, so a rejected move leaves the game untouched.
//!
//! 2. **Read-only strategies**: strategies see the board, inventories and
//!    scores through shared borrows only.
//!
//! 3. **Deterministic**: tile supplies derive from the board size alone and
//!    the built-in random strategy is seeded.
//!
//! ## Modules
//!
//! - `core`: player IDs, moves, configuration, RNG, errors
//! - `board`: the grid and its cells
//! - `supply`: tile supply derivation and per-player inventories
//! - `rules`: the game state machine
//! - `scoring`: adjacency scoring
//! - `strategy`: the `Strategy` trait, built-in players, external agents
//! - `tournament`: round-robin scheduling and standings
//!
//! ## Example
//!
//! ```
//! use isis_osiris::{run_tournament, GreedyStrategy, RandomStrategy, Strategy};
//!
//! let mut strategies: Vec<Box<dyn Strategy>> = vec![
//!     Box::new(GreedyStrategy::new()),
//!     Box::new(RandomStrategy::new(7)),
//! ];
//! let standings = run_tournament(&mut strategies, 4).unwrap();
//! assert_eq!(standings.matches().len(), 2);
//! ```

pub mod board;
pub mod core;
pub mod rules;
pub mod scoring;
pub mod strategy;
pub mod supply;
pub mod tournament;

pub use crate::board::{Board, Cell, Position};
pub use crate::core::{
    GameConfig, GameError, GameRng, Item, Move, MoveRecord, PlayerId, PlayerMap, StrategyError,
    DEFAULT_BOARD_SIZE, MAX_TILE_VALUE,
};
pub use crate::rules::{Game, GamePhase, GameResult};
pub use crate::scoring::{score, Scores};
pub use crate::strategy::{
    GreedyStrategy, ProcessConfig, ProcessStrategy, RandomStrategy, Strategy,
};
pub use crate::supply::{PlayerRecord, TileSupply};
pub use crate::tournament::{
    run_tournament, MatchResult, Standings, Tournament, TournamentConfig,
};
