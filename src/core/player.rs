//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Opaque player token supporting up to 255 participants. The tournament
//! hands out one token per strategy; the game only ever compares them.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a `Vec`, kept in registration order.
//! Players in a single game are few, so lookups are a linear scan.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Opaque player identifier.
///
/// The value carries no meaning beyond identity: a tournament assigns
/// `PlayerId(i)` to the `i`-th strategy, but a game between strategies 3
/// and 1 simply registers those two tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over `PlayerId(0)..PlayerId(count)`.
    ///
    /// ```
    /// use isis_osiris::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(count: usize) -> impl Iterator<Item = PlayerId> {
        (0..count.min(256)).map(|i| PlayerId(i as u8))
    }

    /// Short token used on the wire and in board renderings (`P0`, `P1`, ...).
    #[must_use]
    pub fn token(self) -> String {
        format!("P{}", self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data keyed by `PlayerId`, iterated in insertion order.
///
/// ## Example
///
/// ```
/// use isis_osiris::core::{PlayerId, PlayerMap};
///
/// let players = [PlayerId::new(3), PlayerId::new(1)];
/// let mut points: PlayerMap<u32> = PlayerMap::with_value(&players, 0);
///
/// points[PlayerId::new(1)] += 2;
/// assert_eq!(points[PlayerId::new(1)], 2);
/// assert_eq!(points.get(PlayerId::new(0)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    entries: Vec<(PlayerId, T)>,
}

impl<T> PlayerMap<T> {
    /// Create a map with one entry per player, values from a factory.
    ///
    /// Duplicate players keep their first entry only.
    pub fn new(players: &[PlayerId], factory: impl Fn(PlayerId) -> T) -> Self {
        let mut entries: Vec<(PlayerId, T)> = Vec::with_capacity(players.len());
        for &player in players {
            if !entries.iter().any(|(p, _)| *p == player) {
                entries.push((player, factory(player)));
            }
        }
        Self { entries }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(players: &[PlayerId], value: T) -> Self
    where
        T: Clone,
    {
        Self::new(players, |_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default(players: &[PlayerId]) -> Self
    where
        T: Default,
    {
        Self::new(players, |_| T::default())
    }

    /// Number of players in the map.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.entries.len()
    }

    /// Check whether a player has an entry.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.entries.iter().any(|(p, _)| *p == player)
    }

    /// Get a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.entries
            .iter()
            .find(|(p, _)| *p == player)
            .map(|(_, v)| v)
    }

    /// Get a player's data mutably.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|(p, _)| *p == player)
            .map(|(_, v)| v)
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.entries.iter().map(|(p, v)| (*p, v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.entries.iter_mut().map(|(p, v)| (*p, v))
    }

    /// Iterate over the player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.entries.iter().map(|(p, _)| *p)
    }
}

impl<T> Default for PlayerMap<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        match self.get(player) {
            Some(value) => value,
            None => panic!("{} is not in this map", player),
        }
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        match self.get_mut(player) {
            Some(value) => value,
            None => panic!("{} is not in this map", player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p7 = PlayerId::new(7);

        assert_eq!(p0.index(), 0);
        assert_eq!(p7.index(), 7);
        assert_eq!(format!("{}", p7), "Player 7");
        assert_eq!(p7.token(), "P7");
    }

    #[test]
    fn test_player_map_keeps_registration_order() {
        let players = [PlayerId::new(2), PlayerId::new(0), PlayerId::new(5)];
        let map: PlayerMap<usize> = PlayerMap::new(&players, |p| p.index() * 10);

        let ids: Vec<_> = map.player_ids().collect();
        assert_eq!(ids, players.to_vec());
        assert_eq!(map[PlayerId::new(5)], 50);
        assert_eq!(map.player_count(), 3);
    }

    #[test]
    fn test_player_map_ignores_duplicates() {
        let players = [PlayerId::new(1), PlayerId::new(1)];
        let map: PlayerMap<i32> = PlayerMap::with_value(&players, 4);
        assert_eq!(map.player_count(), 1);
    }

    #[test]
    fn test_player_map_mutation() {
        let players = [PlayerId::new(0), PlayerId::new(1)];
        let mut map: PlayerMap<i64> = PlayerMap::with_default(&players);

        map[PlayerId::new(0)] = 10;
        *map.get_mut(PlayerId::new(1)).unwrap() -= 3;

        assert_eq!(map[PlayerId::new(0)], 10);
        assert_eq!(map[PlayerId::new(1)], -3);
        assert!(map.get_mut(PlayerId::new(9)).is_none());
    }

    #[test]
    #[should_panic(expected = "Player 4 is not in this map")]
    fn test_player_map_index_missing() {
        let map: PlayerMap<i32> = PlayerMap::with_value(&[PlayerId::new(0)], 0);
        let _ = map[PlayerId::new(4)];
    }

    #[test]
    fn test_player_map_serialization() {
        let players = [PlayerId::new(0), PlayerId::new(1)];
        let map: PlayerMap<i32> = PlayerMap::new(&players, |p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
