//! Seeded randomness for the built-in random strategy.
//!
//! Replaying a tournament between random strategies with the same seeds
//! gives the same games move for move.
//!
//! ```
//! use isis_osiris::core::GameRng;
//!
//! let cells = ["a", "b", "c"];
//! let mut rng = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//! assert_eq!(rng.choose(&cells), replay.choose(&cells));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Odd constant spreading fork seeds apart (64-bit golden ratio).
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive a new stream. The n-th fork of a given seed is always the same.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Fair coin.
    pub fn coin(&mut self) -> bool {
        self.stream.gen_bool(0.5)
    }

    /// Uniform pick, `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.stream)
    }
}
