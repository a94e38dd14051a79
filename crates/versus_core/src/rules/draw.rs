//! Draw detection logic for tic-tac-toe.

use super::super::history::{MAX_MOVES, TurnHistory};
use super::super::{Board, Cell};
use super::win::line_winner;
use tracing::instrument;

/// Checks if every square holds a mark.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    Cell::ALL.iter().all(|c| !board.is_empty(*c))
}

/// A draw is nine moves with no completed line.
#[instrument(skip(board, history), fields(len = history.len()))]
pub fn is_draw(board: &Board, history: &TurnHistory) -> bool {
    history.len() == MAX_MOVES && line_winner(board).is_none()
}
