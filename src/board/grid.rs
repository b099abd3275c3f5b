//! Square grid of cells.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId};

/// Board coordinate, `(row, col)`, both zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Content of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// A stone owned by a player.
    Stone(PlayerId),
    /// A numbered tile.
    Tile(i32),
}

impl Cell {
    /// Check if the cell is empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Tile value, if the cell holds a tile.
    #[must_use]
    pub fn tile_value(self) -> Option<i32> {
        match self {
            Cell::Tile(value) => Some(value),
            _ => None,
        }
    }

    /// Stone owner, if the cell holds a stone.
    #[must_use]
    pub fn stone_owner(self) -> Option<PlayerId> {
        match self {
            Cell::Stone(player) => Some(player),
            _ => None,
        }
    }
}

/// Square board whose cells, once filled, stay filled.
///
/// Cells are stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// Fails unless `size` is a positive multiple of 4.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 || size % 4 != 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "board size must be a positive multiple of 4, not {}",
                size
            )));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether a position is on the board.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.size && position.col < self.size
    }

    fn offset(&self, position: Position) -> Result<usize, GameError> {
        if self.contains(position) {
            Ok(position.row * self.size + position.col)
        } else {
            Err(GameError::OutOfRange {
                position,
                size: self.size,
            })
        }
    }

    /// Content of a cell.
    pub fn get(&self, position: Position) -> Result<Cell, GameError> {
        let offset = self.offset(position)?;
        Ok(self.cells[offset])
    }

    /// Fill an empty cell.
    ///
    /// Only occupancy is checked here; whether the player may place `cell`
    /// is up to the caller.
    pub fn set(&mut self, position: Position, cell: Cell) -> Result<(), GameError> {
        let offset = self.offset(position)?;
        if !self.cells[offset].is_empty() {
            return Err(GameError::CellOccupied(position));
        }
        self.cells[offset] = cell;
        Ok(())
    }

    /// True once no cell is empty.
    #[must_use]
    pub fn all_occupied(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of filled cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Positions of all empty cells, row-major.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(move |(i, _)| Position::new(i / self.size, i % self.size))
    }

    /// Every (position, cell) pair, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (Position::new(i / self.size, i % self.size), *c))
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Orthogonal neighbours of a position that lie on the board.
    ///
    /// A position off the board has none.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> {
        let Position { row, col } = position;
        let size = self.size;
        let around = if self.contains(position) {
            [
                row.checked_sub(1).map(|r| Position::new(r, col)),
                (row + 1 < size).then(|| Position::new(row + 1, col)),
                col.checked_sub(1).map(|c| Position::new(row, c)),
                (col + 1 < size).then(|| Position::new(row, col + 1)),
            ]
        } else {
            [None; 4]
        };
        around.into_iter().flatten()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => format!("{:>3}", "."),
                    Cell::Stone(p) => format!("{:>3}", p.token()),
                    Cell::Tile(v) => format!("{:>+3}", v),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
