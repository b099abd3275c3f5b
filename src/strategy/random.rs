//! Uniformly random play.

use crate::board::{Board, Position};
use crate::core::{GameRng, Item, Move, PlayerId, PlayerMap, StrategyError};
use crate::scoring::Scores;
use crate::supply::PlayerRecord;

use super::traits::Strategy;

/// Picks a random empty cell, then flips a coin between a stone and a
/// random tile it still holds. Falls back to whichever kind is left.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    name: String,
    rng: GameRng,
}

impl RandomStrategy {
    /// Create a seeded random strategy.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create from an existing RNG (e.g. a fork).
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            name: format!("random-{}", rng.seed()),
            rng,
        }
    }

    /// `count` independent players derived from one seed.
    #[must_use]
    pub fn family(seed: u64, count: usize) -> Vec<Self> {
        let mut root = GameRng::new(seed);
        (0..count).map(|_| Self::from_rng(root.fork())).collect()
    }

    /// Override the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_move(
        &mut self,
        board: &Board,
        current: PlayerId,
        players: &PlayerMap<PlayerRecord>,
        _scores: &Scores,
    ) -> Result<Move, StrategyError> {
        let record = players.get(current).ok_or(StrategyError::NoLegalMove)?;

        let empty: Vec<Position> = board.empty_positions().collect();
        let position = *self.rng.choose(&empty).ok_or(StrategyError::NoLegalMove)?;

        let tiles: Vec<i32> = record.tiles.available().collect();
        let use_tile = match (record.stones > 0, tiles.is_empty()) {
            (false, true) => return Err(StrategyError::NoLegalMove),
            (true, true) => false,
            (false, false) => true,
            (true, false) => self.rng.coin(),
        };

        let item = if use_tile {
            Item::Tile(*self.rng.choose(&tiles).ok_or(StrategyError::NoLegalMove)?)
        } else {
            Item::Stone
        };
        Ok(Move::new(position, item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Game;

    const A: PlayerId = PlayerId::new(0);
    const B: PlayerId = PlayerId::new(1);

    fn ask(strategy: &mut RandomStrategy, game: &Game) -> Result<Move, StrategyError> {
        let current = game.current_player().unwrap();
        strategy.decide_move(game.board(), current, game.records(), &game.scores())
    }

    #[test]
    fn test_random_moves_are_legal_until_the_end() {
        let mut game = Game::with_board_size(8).unwrap();
        game.register_players(&[A, B]).unwrap();
        let mut strategy = RandomStrategy::new(42);

        while !game.is_finished() {
            let mv = ask(&mut strategy, &game).unwrap();
            game.play(mv).unwrap();
        }
        assert!(game.records().iter().all(|(_, r)| r.is_exhausted()));
    }

    #[test]
    fn test_same_seed_same_moves() {
        let mut game = Game::with_board_size(4).unwrap();
        game.register_players(&[A, B]).unwrap();

        let mut first = RandomStrategy::new(7);
        let mut second = RandomStrategy::new(7);
        for _ in 0..5 {
            assert_eq!(ask(&mut first, &game).unwrap(), ask(&mut second, &game).unwrap());
        }
    }

    #[test]
    fn test_uses_tiles_when_out_of_stones() {
        let mut game = Game::with_board_size(4).unwrap();
        game.register_players(&[A, B]).unwrap();
        let cells: Vec<_> = game.board().empty_positions().collect();
        for position in cells.into_iter().take(8) {
            game.apply_move(position, 0).unwrap();
        }

        let mut strategy = RandomStrategy::new(3);
        let mv = ask(&mut strategy, &game).unwrap();
        assert!(matches!(mv.item, Item::Tile(_)));
    }

    #[test]
    fn test_no_legal_move_on_full_board() {
        let mut game = Game::with_board_size(4).unwrap();
        game.register_players(&[A, B]).unwrap();
        let mut strategy = RandomStrategy::new(1);
        while !game.is_finished() {
            let mv = ask(&mut strategy, &game).unwrap();
            game.play(mv).unwrap();
        }
        assert!(matches!(ask(&mut strategy, &game), Err(StrategyError::NoLegalMove)));
    }

    #[test]
    fn test_family() {
        let family = RandomStrategy::family(3, 4);
        let again = RandomStrategy::family(3, 4);
        assert_eq!(family.len(), 4);

        let names: Vec<_> = family.iter().map(|s| s.name().to_string()).collect();
        let replay: Vec<_> = again.iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, replay);
        assert_ne!(names[0], names[1]);
    }

    #[test]
    fn test_names() {
        assert_eq!(RandomStrategy::new(5).name(), "random-5");
        assert_eq!(RandomStrategy::new(5).with_name("bob").name(), "bob");
    }
}
