//! Pure derivations of board, turn and outcome from a [`TurnHistory`].

use super::history::TurnHistory;
use super::outcome::Outcome;
use super::rules::{is_draw, line_winner};
use super::{Board, Square, Symbol};
use tracing::instrument;

/// Rebuilds the board from scratch. Never touches the history.
#[instrument(skip(history), fields(len = history.len()))]
pub fn derive_board(history: &TurnHistory) -> Board {
    let mut board = Board::new();
    for mv in history.iter() {
        board.set(mv.cell, Square::Occupied(mv.symbol));
    }
    board
}

/// Player whose turn it is: X on an empty log or after an O move.
pub fn derive_active_player(history: &TurnHistory) -> Symbol {
    match history.latest() {
        Some(mv) if mv.symbol == Symbol::X => Symbol::O,
        _ => Symbol::X,
    }
}

/// Winner, draw or ongoing.
#[instrument(skip(history), fields(len = history.len()))]
pub fn derive_outcome(history: &TurnHistory) -> Outcome {
    let board = derive_board(history);
    if let Some(winner) = line_winner(&board) {
        Outcome::Winner(winner)
    } else if is_draw(&board, history) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
