//! Candidate cell generation.

use super::{Board, Cell};
use tracing::instrument;

/// Empty cells in row-major order, skipping `excluding`.
///
/// `excluding` lets a caller hide a move it has staged but not yet placed,
/// so the bot never picks the human's pending cell.
#[instrument(skip(board))]
pub fn available_cells(board: &Board, excluding: Option<Cell>) -> Vec<Cell> {
    Cell::ALL
        .iter()
        .copied()
        .filter(|&cell| Some(cell) != excluding && board.is_empty(cell))
        .collect()
}
