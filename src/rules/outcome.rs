//! Game outcome derived from final scores.

use crate::core::PlayerId;
use crate::scoring::Scores;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Every player tied.
    Draw,
    /// Several players share the top score, but not all of them.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Decide the outcome from a score table.
    ///
    /// An empty table is a draw.
    #[must_use]
    pub fn from_scores(scores: &Scores) -> Self {
        let Some(best) = scores.iter().map(|(_, s)| *s).max() else {
            return GameResult::Draw;
        };
        let leaders: Vec<PlayerId> = scores
            .iter()
            .filter(|(_, s)| **s == best)
            .map(|(p, _)| p)
            .collect();

        match leaders.len() {
            1 => GameResult::Winner(leaders[0]),
            n if n == scores.player_count() => GameResult::Draw,
            _ => GameResult::Winners(leaders),
        }
    }

    /// Check if a player won (alone or shared).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}
