//! The game state machine.
//!
//! ## Lifecycle
//!
//! ```text
//! NotStarted --register_players--> InProgress --board full--> Finished
//! ```
//!
//! `apply_move` validates everything before touching the state, so a
//! rejected move leaves the game exactly as it was.

use crate::board::{Board, Cell, Position};
use crate::core::{GameConfig, GameError, Item, Move, MoveRecord, PlayerId, PlayerMap};
use crate::scoring::{self, Scores};
use crate::supply::{PlayerRecord, TileSupply};

use super::outcome::GameResult;

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// No players registered yet.
    NotStarted,
    /// Players registered, empty cells remain.
    InProgress,
    /// Every cell is filled.
    Finished,
}

/// A single game of Isis and Osiris.
///
/// ## Example
///
/// ```
/// use isis_osiris::board::Position;
/// use isis_osiris::core::PlayerId;
/// use isis_osiris::rules::Game;
///
/// let (a, b) = (PlayerId::new(0), PlayerId::new(1));
/// let mut game = Game::with_board_size(4).unwrap();
/// game.register_players(&[a, b]).unwrap();
///
/// game.apply_move(Position::new(0, 0), 0).unwrap(); // a places a stone
/// game.apply_move(Position::new(0, 1), 3).unwrap(); // b places a +3 tile
///
/// assert_eq!(game.current_player(), Some(a));
/// assert_eq!(game.scores()[a], 3);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    supply: TileSupply,
    turn_order: Vec<PlayerId>,
    current: usize,
    records: PlayerMap<PlayerRecord>,
    history: Vec<MoveRecord>,
}

impl Game {
    /// Create a game with no players registered.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.board_size)?,
            supply: TileSupply::for_config(&config)?,
            config,
            turn_order: Vec::new(),
            current: 0,
            records: PlayerMap::default(),
            history: Vec::new(),
        })
    }

    /// Create a game with the standard tile range.
    pub fn with_board_size(board_size: usize) -> Result<Self, GameError> {
        Self::new(GameConfig::new(board_size))
    }

    /// Register players in turn order and start a fresh game.
    ///
    /// The first entry moves first. Needs at least two distinct players.
    /// Any previous game on this instance is discarded: the board is
    /// cleared and every player gets a fresh copy of the tile supply.
    pub fn register_players(&mut self, order: &[PlayerId]) -> Result<(), GameError> {
        if order.len() < 2 {
            return Err(GameError::InvalidConfiguration(format!(
                "at least 2 players are needed, got {}",
                order.len()
            )));
        }
        for (i, player) in order.iter().enumerate() {
            if order[..i].contains(player) {
                return Err(GameError::InvalidConfiguration(format!(
                    "{} is registered twice",
                    player
                )));
            }
        }

        let supply = TileSupply::for_config(&self.config)?;
        let initial = PlayerRecord::new(self.config.num_items(), supply.clone());

        self.board = Board::new(self.config.board_size)?;
        self.supply = supply;
        self.records = PlayerMap::with_value(order, initial);
        self.turn_order = order.to_vec();
        self.current = 0;
        self.history.clear();
        Ok(())
    }

    /// Place `item` for the current player at `position`.
    ///
    /// `item` follows the raw convention when given as an integer: `0` is
    /// a stone, anything else a tile of that value. On success the current
    /// player's counter drops by one and the turn passes to the next
    /// player in registration order.
    pub fn apply_move(
        &mut self,
        position: Position,
        item: impl Into<Item>,
    ) -> Result<(), GameError> {
        let item = item.into();
        let player = self.current_player().ok_or(GameError::NotStarted)?;

        if !self.board.get(position)?.is_empty() {
            return Err(GameError::CellOccupied(position));
        }

        let record = self.records.get_mut(player).ok_or(GameError::NotStarted)?;
        record.check(player, item)?;

        let cell = match item {
            Item::Stone => Cell::Stone(player),
            Item::Tile(value) => Cell::Tile(value),
        };
        self.board.set(position, cell)?;
        record.take(player, item)?;

        self.history.push(MoveRecord {
            player,
            mv: Move::new(position, item),
            sequence: self.history.len() as u32,
        });
        self.current = (self.current + 1) % self.turn_order.len();
        Ok(())
    }

    /// Apply a `Move`.
    pub fn play(&mut self, mv: Move) -> Result<(), GameError> {
        self.apply_move(mv.position, mv.item)
    }

    /// True once the board is full.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.board.all_occupied()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.turn_order.is_empty() {
            GamePhase::NotStarted
        } else if self.is_finished() {
            GamePhase::Finished
        } else {
            GamePhase::InProgress
        }
    }

    /// Player to move, `None` before registration.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.turn_order.get(self.current).copied()
    }

    /// Registered players in turn order.
    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every player's remaining stones and tiles.
    #[must_use]
    pub fn records(&self) -> &PlayerMap<PlayerRecord> {
        &self.records
    }

    /// One player's remaining stones and tiles.
    #[must_use]
    pub fn record(&self, player: PlayerId) -> Option<&PlayerRecord> {
        self.records.get(player)
    }

    /// Tile supply each player started with.
    #[must_use]
    pub fn tile_supply(&self) -> &TileSupply {
        &self.supply
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The configuration this game was built from.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current scores of all registered players.
    #[must_use]
    pub fn scores(&self) -> Scores {
        scoring::score(&self.board, &self.turn_order)
    }

    /// Final outcome, `None` until the game is finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        (self.phase() == GamePhase::Finished).then(|| GameResult::from_scores(&self.scores()))
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board:")?;
        write!(f, "{}", self.board)?;
        for (player, record) in self.records.iter() {
            writeln!(f, "{} has: {}", player, record)?;
        }
        let scores: Vec<String> = self
            .scores()
            .iter()
            .map(|(p, s)| format!("{}: {}", p.token(), s))
            .collect();
        write!(f, "Scores: {}", scores.join(", "))
    }
}
