//! Heuristic bot opponent.
//!
//! The bot looks exactly one ply ahead:
//!
//! 1. **Win now**: a cell where its own mark completes a line.
//! 2. **Block**: failing that, a cell where the human's mark would complete a line.
//! 3. **Difficulty gate**: a uniform roll above the difficulty's win bias
//!    throws the found cell away.
//! 4. **Random**: otherwise any free cell, uniformly.
//!
//! Both scans keep the *last* matching cell in row-major order.

use super::moves::available_cells;
use super::rules::line_winner;
use super::{Board, Cell, Difficulty, Move, Symbol};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use tracing::{debug, instrument};

/// Which tier of the policy produced a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum DecisionKind {
    /// Completes the bot's own line.
    Win,
    /// Stops the human completing a line.
    Block,
    /// Uniform pick among free cells.
    Random,
}

/// A chosen cell and why it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BotDecision {
    /// Cell the bot will play.
    pub cell: Cell,
    /// Policy tier that picked it.
    pub kind: DecisionKind,
}

/// Decision engine for the computer player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BotEngine {
    difficulty: Difficulty,
}

impl BotEngine {
    /// Creates an engine at the given difficulty.
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changes the difficulty for subsequent decisions.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Picks the bot's reply to `pending`, the human move just made.
    ///
    /// `pending` is staged onto a scratch copy of `board` (a no-op if the
    /// board already shows it) and its cell is excluded from the candidates.
    /// The bot plays the opponent of `pending.symbol`.
    ///
    /// Returns `None` only when no free cell remains.
    #[instrument(skip(self, board, rng), fields(difficulty = %self.difficulty, pending = %pending))]
    pub fn decide<R: Rng>(&self, board: &Board, pending: Move, rng: &mut R) -> Option<BotDecision> {
        let staged = board.with(pending.cell, pending.symbol);
        let candidates = available_cells(&staged, Some(pending.cell));
        if candidates.is_empty() {
            debug!("No candidate cells");
            return None;
        }

        let bot = pending.symbol.opponent();
        let found = completing_cell(&staged, &candidates, bot)
            .map(|cell| BotDecision {
                cell,
                kind: DecisionKind::Win,
            })
            .or_else(|| {
                completing_cell(&staged, &candidates, pending.symbol).map(|cell| BotDecision {
                    cell,
                    kind: DecisionKind::Block,
                })
            });

        let roll: f64 = rng.random();
        match found {
            Some(decision) if roll <= self.difficulty.win_bias() => {
                debug!(cell = %decision.cell, kind = %decision.kind, roll, "Taking found cell");
                return Some(decision);
            }
            Some(decision) => {
                debug!(cell = %decision.cell, kind = %decision.kind, roll, "Difficulty gate discarded cell");
            }
            None => {}
        }

        let decision = candidates.choose(rng).map(|&cell| BotDecision {
            cell,
            kind: DecisionKind::Random,
        });
        debug!(?decision, "Random fallback");
        decision
    }
}

/// Last candidate at which `symbol` would complete a line.
fn completing_cell(board: &Board, candidates: &[Cell], symbol: Symbol) -> Option<Cell> {
    candidates
        .iter()
        .copied()
        .filter(|&cell| simulate(board, cell, symbol) == Some(symbol))
        .last()
}

/// Winner of the board after `symbol` plays `cell`, evaluated on a copy.
fn simulate(board: &Board, cell: Cell, symbol: Symbol) -> Option<Symbol> {
    line_winner(&board.with(cell, symbol))
}
