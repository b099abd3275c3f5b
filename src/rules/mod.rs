//! Game rules: the state machine and game outcomes.
//!
//! - `Game`: board, turn order, per-player records and move validation
//! - `GamePhase`: NotStarted, InProgress, Finished
//! - `GameResult`: winner / draw from final scores

pub mod game;
pub mod outcome;

pub use game::{Game, GamePhase};
pub use outcome::GameResult;
