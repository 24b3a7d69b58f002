//! The 6x7 grid and the gravity-drop placement rule.
//!
//! Cells are stored row-major with row 0 at the bottom. `try_drop` is the
//! only way to change a board, so the gravity invariant (no token above an
//! empty cell) holds for every board reachable through the public API.

use std::fmt;

use thiserror::Error;

use crate::constants::{CELLS, COLS, GLYPH_EMPTY, ROWS};
use crate::player::Player;

/// Contents of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Where a token landed: `(row, column)`, row 0 being the bottom.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Why a drop was refused. The board is unchanged in both cases.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejected {
    #[error("column {0} is outside the board")]
    OutOfRange(usize),
    #[error("column {0} is full")]
    ColumnFull(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    /// Number of tokens in each column; the next free row.
    heights: [usize; COLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
            heights: [0; COLS],
        }
    }

    /// Drop `player`'s token into `column`; it lands on the lowest empty row.
    pub fn try_drop(&mut self, column: usize, player: Player) -> Result<Position, Rejected> {
        if column >= COLS {
            return Err(Rejected::OutOfRange(column));
        }
        let row = self.heights[column];
        if row >= ROWS {
            return Err(Rejected::ColumnFull(column));
        }
        self.cells[row][column] = Cell::Occupied(player);
        self.heights[column] += 1;
        Ok(Position::new(row, column))
    }

    /// Read a cell. Coordinates outside the grid read as empty.
    pub fn cell_at(&self, row: usize, column: usize) -> Cell {
        if row >= ROWS || column >= COLS {
            return Cell::Empty;
        }
        self.cells[row][column]
    }

    /// Number of tokens in `column` (0 for columns outside the grid).
    pub fn column_height(&self, column: usize) -> usize {
        self.heights.get(column).copied().unwrap_or(0)
    }

    /// True for a full column. Columns outside the grid count as full,
    /// since nothing can be dropped there.
    pub fn is_column_full(&self, column: usize) -> bool {
        column >= COLS || self.heights[column] >= ROWS
    }

    /// Columns that still accept a token, left to right.
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(|&c| !self.is_column_full(c))
    }

    /// Total number of tokens on the board.
    pub fn occupied(&self) -> usize {
        self.heights.iter().sum()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == CELLS
    }

    pub fn is_empty(&self) -> bool {
        self.occupied() == 0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(2 * COLS + 1);
        for column in 1..=COLS {
            write!(f, " {column}")?;
        }
        writeln!(f, " ")?;
        writeln!(f, "{rule}")?;
        for row in (0..ROWS).rev() {
            for column in 0..COLS {
                let ch = match self.cells[row][column] {
                    Cell::Occupied(p) => p.glyph(),
                    Cell::Empty => GLYPH_EMPTY,
                };
                write!(f, "|{ch}")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{rule}")
    }
}
