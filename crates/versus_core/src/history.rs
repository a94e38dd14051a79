//! Append-only turn history, the single source of game state.

use super::action::{Move, MoveError};
use super::derive::derive_active_player;
use super::Cell;
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Maximum number of moves in a game.
pub const MAX_MOVES: usize = 9;

/// Ordered log of moves, newest first.
///
/// The only way to grow the log is [`TurnHistory::append`], which assigns the
/// mark itself. That keeps three properties true by construction: no two
/// moves share a cell, there are at most nine moves, and marks alternate
/// X, O, X, ... from the oldest move on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TurnHistory {
    moves: VecDeque<Move>,
}

impl TurnHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a mark for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::BoardFull`] once nine moves exist and
    /// [`MoveError::CellOccupied`] if `cell` already holds a mark.
    #[instrument(skip(self), fields(len = self.moves.len()))]
    pub fn append(&mut self, cell: Cell) -> Result<Move, MoveError> {
        if self.moves.len() >= MAX_MOVES {
            return Err(MoveError::BoardFull);
        }
        if self.contains(cell) {
            return Err(MoveError::CellOccupied(cell));
        }

        let mv = Move::new(cell, derive_active_player(self));
        self.moves.push_front(mv);
        debug!(%mv, "Move recorded");
        Ok(mv)
    }

    /// Forgets every move.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Number of moves made.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if no move has been made.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Most recent move, if any.
    pub fn latest(&self) -> Option<&Move> {
        self.moves.front()
    }

    /// Iterates newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Move> + ExactSizeIterator {
        self.moves.iter()
    }

    /// Returns true if any move landed on `cell`.
    pub fn contains(&self, cell: Cell) -> bool {
        self.moves.iter().any(|m| m.cell == cell)
    }
}
