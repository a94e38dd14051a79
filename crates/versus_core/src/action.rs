//! Move records and the errors raised when appending them.

use super::{Cell, Symbol};
use derive_more::{Display, Error};
use serde::Serialize;

/// A mark placed on a cell. Never mutated once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, derive_new::new)]
#[display("{symbol} selected {},{}", cell.row(), cell.col())]
pub struct Move {
    /// Where the mark went.
    pub cell: Cell,
    /// Who placed it.
    pub symbol: Symbol,
}

/// Reason a move could not be appended to the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] Cell),

    /// All nine cells are taken.
    #[display("Board is full")]
    BoardFull,
}
