//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::Serialize;
use tracing::instrument;

/// Mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, strum::EnumIter)]
pub enum Symbol {
    /// The human's mark (always moves first).
    X,
    /// The bot's mark.
    O,
}

impl Symbol {
    /// Mark used by the human player.
    pub const HUMAN: Symbol = Symbol::X;

    /// Mark used by the computer player.
    pub const BOT: Symbol = Symbol::O;

    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A cell coordinate on the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[display("({row}, {col})")]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// All nine cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::at(0, 0),
        Cell::at(0, 1),
        Cell::at(0, 2),
        Cell::at(1, 0),
        Cell::at(1, 1),
        Cell::at(1, 2),
        Cell::at(2, 0),
        Cell::at(2, 1),
        Cell::at(2, 2),
    ];

    /// Creates a cell, rejecting coordinates outside the board.
    #[track_caller]
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, CellError> {
        if row >= 3 || col >= 3 {
            return Err(CellError::new(row, col));
        }
        Ok(Self::at(row, col))
    }

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Creates a cell from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Coordinates outside the 3x3 board.
#[derive(Debug, Clone, Display, Error)]
#[display("Cell ({}, {}) is off the board at {}:{}", row, col, file, line)]
pub struct CellError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CellError {
    /// Creates a new cell error with caller location tracking.
    #[track_caller]
    pub fn new(row: usize, col: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            row,
            col,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Square {
    /// Nobody has played here.
    Empty,
    /// Square holds a mark.
    Occupied(Symbol),
}

/// 3x3 tic-tac-toe board.
///
/// Boards are derived from a [`TurnHistory`](crate::TurnHistory) and are
/// cheap to copy, so hypothetical placements build a new board with
/// [`Board::with`] instead of mutating a shared one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Board {
    squares: [[Square; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; 3]; 3],
        }
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.row][cell.col]
    }

    /// Sets the square at the given cell.
    pub fn set(&mut self, cell: Cell, square: Square) {
        self.squares[cell.row][cell.col] = square;
    }

    /// Returns a copy of this board with `symbol` placed at `cell`.
    pub fn with(&self, cell: Cell, symbol: Symbol) -> Self {
        let mut next = *self;
        next.set(cell, Square::Occupied(symbol));
        next
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        Cell::ALL.iter().filter(|c| !self.is_empty(**c)).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rejects_off_board() {
        assert!(Cell::new(3, 0).is_err());
        assert!(Cell::new(0, 3).is_err());
        assert!(Cell::new(2, 2).is_ok());
    }

    #[test]
    fn test_cell_index_round_trip() {
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), i);
            assert_eq!(Cell::from_index(i), Some(*cell));
        }
        assert_eq!(Cell::from_index(9), None);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::new();
        let center = Cell::new(1, 1).unwrap();
        let staged = board.with(center, Symbol::X);

        assert!(board.is_empty(center));
        assert_eq!(staged.get(center), Square::Occupied(Symbol::X));
        assert_eq!(staged.occupied(), 1);
    }

    #[test]
    fn test_symbols_iterate_human_first() {
        use strum::IntoEnumIterator;

        let symbols: Vec<Symbol> = Symbol::iter().collect();
        assert_eq!(symbols, vec![Symbol::HUMAN, Symbol::BOT]);
    }
}
