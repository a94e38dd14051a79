//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Square, Symbol};
use tracing::instrument;

/// The eight lines in evaluation order: rows, columns, main diagonal,
/// anti-diagonal.
pub const LINES: [[Cell; 3]; 8] = {
    let c = Cell::ALL;
    [
        // Rows
        [c[0], c[1], c[2]],
        [c[3], c[4], c[5]],
        [c[6], c[7], c[8]],
        // Columns
        [c[0], c[3], c[6]],
        [c[1], c[4], c[7]],
        [c[2], c[5], c[8]],
        // Diagonals
        [c[0], c[4], c[8]],
        [c[2], c[4], c[6]],
    ]
};

/// Returns the first completed line in [`LINES`] order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Cell; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Returns the mark that fully occupies a line, if any.
#[instrument(skip(board))]
pub fn line_winner(board: &Board) -> Option<Symbol> {
    winning_line(board).and_then(|[a, _, _]| match board.get(a) {
        Square::Occupied(symbol) => Some(symbol),
        Square::Empty => None,
    })
}
