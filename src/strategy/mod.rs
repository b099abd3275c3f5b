//! Strategies: anything that can pick a move.
//!
//! - [`Strategy`]: the capability handed to the tournament
//! - [`RandomStrategy`] and [`GreedyStrategy`]: built-in players
//! - [`ProcessStrategy`]: an external agent speaking the [`wire`] format

pub mod greedy;
pub mod process;
pub mod random;
pub mod traits;
pub mod wire;

pub use greedy::GreedyStrategy;
pub use process::{ProcessConfig, ProcessStrategy};
pub use random::RandomStrategy;
pub use traits::Strategy;
pub use wire::{DecisionRequest, DecisionResponse};
