//! Round-robin tournaments between strategies.

pub mod config;
pub mod scheduler;

pub use config::TournamentConfig;
pub use scheduler::{run_tournament, MatchResult, Standings, Tournament, MAX_STRATEGIES};
