//! Round-robin scheduling and standings.
//!
//! Every ordered pair of distinct strategies plays one game, so each pairing
//! is played twice with the seats swapped. Strategy `i` always plays as
//! `PlayerId(i)`. A draw is worth 1 point to each side, a win 2.

use std::fmt;

use tracing::{debug, info, instrument, warn};

use crate::core::{GameError, PlayerId, PlayerMap};
use crate::rules::Game;
use crate::strategy::Strategy;

use super::config::TournamentConfig;

/// Most strategies one tournament can seat; one per `PlayerId`.
pub const MAX_STRATEGIES: usize = u8::MAX as usize + 1;

/// Points for a won game.
pub const WIN_POINTS: u32 = 2;

/// Points each side gets for a drawn game.
pub const DRAW_POINTS: u32 = 1;

/// Final scores of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchResult {
    pub first: PlayerId,
    pub second: PlayerId,
    pub first_score: i64,
    pub second_score: i64,
}

impl MatchResult {
    /// The strictly higher scorer, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.first_score.cmp(&self.second_score) {
            std::cmp::Ordering::Greater => Some(self.first),
            std::cmp::Ordering::Less => Some(self.second),
            std::cmp::Ordering::Equal => None,
        }
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.first_score == self.second_score
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.first.token(),
            self.first_score,
            self.second_score,
            self.second.token()
        )
    }
}

/// Points per strategy and every game played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standings {
    points: PlayerMap<u32>,
    names: Vec<String>,
    matches: Vec<MatchResult>,
}

impl Standings {
    fn new(names: Vec<String>) -> Self {
        let players: Vec<PlayerId> = PlayerId::all(names.len()).collect();
        Self {
            points: PlayerMap::with_value(&players, 0),
            names,
            matches: Vec::new(),
        }
    }

    /// Award points for a finished game and keep it.
    fn record(&mut self, result: MatchResult) {
        match result.winner() {
            Some(winner) => self.award(winner, WIN_POINTS),
            None => {
                self.award(result.first, DRAW_POINTS);
                self.award(result.second, DRAW_POINTS);
            }
        }
        self.matches.push(result);
    }

    fn award(&mut self, player: PlayerId, points: u32) {
        if let Some(total) = self.points.get_mut(player) {
            *total += points;
        }
    }

    /// Points for the strategy seated as `player`.
    #[must_use]
    pub fn points(&self, player: PlayerId) -> Option<u32> {
        self.points.get(player).copied()
    }

    /// Points per strategy, in input order.
    #[must_use]
    pub fn points_table(&self) -> &PlayerMap<u32> {
        &self.points
    }

    /// Name of the strategy seated as `player`.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> Option<&str> {
        self.names.get(player.index()).map(String::as_str)
    }

    /// Every game, in the order played.
    #[must_use]
    pub fn matches(&self) -> &[MatchResult] {
        &self.matches
    }

    /// Strategies by points, highest first. Ties keep input order.
    #[must_use]
    pub fn ranking(&self) -> Vec<(PlayerId, &str, u32)> {
        let mut ranked: Vec<_> = self
            .points
            .iter()
            .map(|(p, points)| (p, self.names[p.index()].as_str(), *points))
            .collect();
        ranked.sort_by(|a, b| b.2.cmp(&a.2));
        ranked
    }
}

impl fmt::Display for Standings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Standings:")?;
        for (rank, (_, name, points)) in self.ranking().into_iter().enumerate() {
            writeln!(f, "{:>3}. {name:<20} {points:>4}", rank + 1)?;
        }
        Ok(())
    }
}

/// Runs round-robin tournaments.
#[derive(Clone, Debug, Default)]
pub struct Tournament {
    config: TournamentConfig,
}

impl Tournament {
    #[must_use]
    pub fn new(config: TournamentConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Play every ordered pairing once.
    ///
    /// Fewer than two strategies plays nothing. The first error from a game
    /// ends the tournament: rule violations come back as they are, a
    /// strategy that cannot answer comes back as `MoveRequest`.
    #[instrument(
        skip_all,
        fields(strategies = strategies.len(), board_size = self.config.game.board_size)
    )]
    pub fn run<S: Strategy>(&self, strategies: &mut [S]) -> Result<Standings, GameError> {
        self.config.game.validate()?;
        if strategies.len() > MAX_STRATEGIES {
            return Err(GameError::InvalidConfiguration(format!(
                "at most {MAX_STRATEGIES} strategies can play, got {}",
                strategies.len()
            )));
        }

        let names: Vec<String> = strategies.iter().map(|s| s.name().to_string()).collect();
        let mut standings = Standings::new(names);
        let ids: Vec<PlayerId> = PlayerId::all(strategies.len()).collect();

        for (i, &first) in ids.iter().enumerate() {
            for (j, &second) in ids.iter().enumerate() {
                if i == j {
                    continue;
                }
                let (a, b) = pair_mut(strategies, i, j);
                let result = self.play_match((first, a), (second, b))?;
                info!(
                    first = %standings.names[i],
                    second = %standings.names[j],
                    first_score = result.first_score,
                    second_score = result.second_score,
                    "match finished"
                );
                standings.record(result);
            }
        }

        Ok(standings)
    }

    /// Play one game between two seated strategies.
    #[instrument(skip_all, fields(first = %first.0, second = %second.0))]
    pub fn play_match<A, B>(
        &self,
        first: (PlayerId, &mut A),
        second: (PlayerId, &mut B),
    ) -> Result<MatchResult, GameError>
    where
        A: Strategy + ?Sized,
        B: Strategy + ?Sized,
    {
        let (first_id, first_strategy) = first;
        let (second_id, second_strategy) = second;

        let mut game = Game::new(self.config.game)?;
        game.register_players(&[first_id, second_id])?;

        while !game.is_finished() {
            let current = game.current_player().ok_or(GameError::NotStarted)?;
            let scores = game.scores();
            let decision = if current == first_id {
                first_strategy.decide_move(game.board(), current, game.records(), &scores)
            } else {
                second_strategy.decide_move(game.board(), current, game.records(), &scores)
            };

            let mv = decision.map_err(|source| {
                warn!(player = %current, error = %source, "strategy failed to move");
                GameError::MoveRequest { player: current, source }
            })?;

            debug!(player = %current, %mv, "move");
            game.play(mv).map_err(|err| {
                warn!(player = %current, %mv, error = %err, "illegal move");
                err
            })?;
        }

        let scores = game.scores();
        Ok(MatchResult {
            first: first_id,
            second: second_id,
            first_score: scores[first_id],
            second_score: scores[second_id],
        })
    }
}

/// Round-robin over `strategies` on a `board_size` board with standard tiles.
pub fn run_tournament<S: Strategy>(
    strategies: &mut [S],
    board_size: usize,
) -> Result<Standings, GameError> {
    Tournament::new(TournamentConfig::new().with_board_size(board_size)).run(strategies)
}

/// Two distinct mutable elements. `i != j`.
fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(i, j);
    if i < j {
        let (lo, hi) = items.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = items.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}
