//! Tile supply derivation.
//!
//! ## Derivation
//!
//! With `num_items = size² / 4` and magnitudes `m = 1..=max`, in order:
//!
//! ```text
//! remaining = num_items - (sum of every count assigned so far)
//! count(m) = count(-m) = remaining / (2 * (max - m + 1))
//! ```
//!
//! Remainders of the integer divisions are not redistributed: they simply
//! carry into `remaining` for the next magnitude.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameConfig, GameError};

/// Remaining count per tile value.
///
/// Entries are ordered `1, -1, 2, -2, ...`; at most eight of them fit
/// inline, which covers the standard ruleset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileSupply {
    counts: SmallVec<[(i32, u32); 8]>,
}

impl TileSupply {
    /// Derive the per-player supply for a board size and tile range.
    ///
    /// ```
    /// use isis_osiris::supply::TileSupply;
    ///
    /// let supply = TileSupply::derive(8, 4).unwrap();
    /// assert_eq!(supply.get(1), Some(2));
    /// assert_eq!(supply.get(-4), Some(2));
    /// assert_eq!(supply.total(), 16);
    /// ```
    pub fn derive(board_size: usize, max_tile_value: i32) -> Result<Self, GameError> {
        let config = GameConfig::new(board_size).with_max_tile_value(max_tile_value);
        config.validate()?;

        let num_items = config.num_items();
        let mut counts: SmallVec<[(i32, u32); 8]> = SmallVec::new();
        let mut assigned = 0u32;

        for magnitude in 1..=max_tile_value {
            let remaining = num_items - assigned;
            let divisor = 2 * (max_tile_value - magnitude + 1) as u32;
            let count = remaining / divisor;

            counts.push((magnitude, count));
            counts.push((-magnitude, count));
            assigned += 2 * count;
        }

        Ok(Self { counts })
    }

    /// Derive the supply described by a game config.
    pub fn for_config(config: &GameConfig) -> Result<Self, GameError> {
        Self::derive(config.board_size, config.max_tile_value)
    }

    /// Count for a tile value, `None` if the value is not in the supply.
    #[must_use]
    pub fn get(&self, value: i32) -> Option<u32> {
        self.counts
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, c)| *c)
    }

    pub(crate) fn get_mut(&mut self, value: i32) -> Option<&mut u32> {
        self.counts
            .iter_mut()
            .find(|(v, _)| *v == value)
            .map(|(_, c)| c)
    }

    /// Check if a tile value is part of the supply (even with count 0).
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.get(value).is_some()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    /// Iterate over (value, count) in derivation order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        self.counts.iter().copied()
    }

    /// Tile values with at least one copy left.
    pub fn available(&self) -> impl Iterator<Item = i32> + '_ {
        self.counts
            .iter()
            .filter(|(_, c)| *c > 0)
            .map(|(v, _)| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(supply: &TileSupply) -> Vec<(i32, u32)> {
        supply.iter().collect()
    }

    #[test]
    fn test_size_4() {
        let supply = TileSupply::derive(4, 4).unwrap();
        // num_items = 4: 4/8 = 0, 4/6 = 0, 4/4 = 1, then (4 - 2)/2 = 1.
        assert_eq!(
            counts(&supply),
            vec![(1, 0), (-1, 0), (2, 0), (-2, 0), (3, 1), (-3, 1), (4, 1), (-4, 1)]
        );
        assert_eq!(supply.total(), 4);
    }

    #[test]
    fn test_size_8() {
        let supply = TileSupply::derive(8, 4).unwrap();
        for value in [1, -1, 2, -2, 3, -3, 4, -4] {
            assert_eq!(supply.get(value), Some(2), "value {}", value);
        }
        assert_eq!(supply.total(), 16);
    }

    #[test]
    fn test_size_12() {
        let supply = TileSupply::derive(12, 4).unwrap();
        // 36/8 = 4, 28/6 = 4, 20/4 = 5, 10/2 = 5.
        assert_eq!(supply.get(1), Some(4));
        assert_eq!(supply.get(2), Some(4));
        assert_eq!(supply.get(3), Some(5));
        assert_eq!(supply.get(4), Some(5));
        assert_eq!(supply.total(), 36);
    }

    #[test]
    fn test_other_tile_ranges() {
        // 16/10 = 1, 14/8 = 1, 12/6 = 2, 8/4 = 2, 4/2 = 2.
        let supply = TileSupply::derive(8, 5).unwrap();
        let positive: Vec<_> = supply
            .iter()
            .filter(|(v, _)| *v > 0)
            .map(|(_, c)| c)
            .collect();
        assert_eq!(positive, vec![1, 1, 2, 2, 2]);

        // 4/12, 4/10, 4/8 and 4/6 are all 0, then 4/4 = 1 and 2/2 = 1.
        let supply = TileSupply::derive(4, 6).unwrap();
        assert_eq!(supply.get(4), Some(0));
        assert_eq!(supply.get(5), Some(1));
        assert_eq!(supply.get(-6), Some(1));
    }

    #[test]
    fn test_last_magnitude_takes_what_is_left() {
        // Earlier divisions drop their remainders, but the last step divides
        // an even remainder by 2, so nothing is ever left over.
        for size in [4, 8, 12, 16, 20, 24] {
            for max in 1..=9 {
                let supply = TileSupply::derive(size, max).unwrap();
                let expected = GameConfig::new(size).num_items();
                assert_eq!(supply.total(), expected, "size {} max {}", size, max);
            }
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            TileSupply::derive(6, 4),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            TileSupply::derive(8, 0),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            TileSupply::derive(8, 300_000_000),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_available_skips_empty_values() {
        let supply = TileSupply::derive(4, 4).unwrap();
        let available: Vec<_> = supply.available().collect();
        assert_eq!(available, vec![3, -3, 4, -4]);
        assert!(supply.contains(1));
        assert!(!supply.contains(0));
        assert!(!supply.contains(5));
    }
}
