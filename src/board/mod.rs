//! The playing surface.
//!
//! A `Board` knows only about occupancy: which cells are filled and with
//! what. Whether a player is allowed to place a given piece is the state
//! machine's business.

pub mod grid;

pub use grid::{Board, Cell, Position};
