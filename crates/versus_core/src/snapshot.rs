//! Read-only view handed to the rendering layer after every change.

use super::derive::{derive_active_player, derive_board, derive_outcome};
use super::history::TurnHistory;
use super::players::PlayerRegistry;
use super::rules::winning_line;
use super::{Board, Cell, Difficulty, Outcome, Symbol};
use serde::Serialize;

/// One line of the move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[display("{symbol} selected {row},{col}")]
pub struct LogEntry {
    /// Mark placed.
    pub symbol: Symbol,
    /// Row of the move.
    pub row: usize,
    /// Column of the move.
    pub col: usize,
}

/// Everything a UI needs to draw the game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Current board.
    pub board: Board,
    /// Whose turn it is.
    pub active_player: Symbol,
    /// Winning mark, if any.
    pub winner: Option<Symbol>,
    /// The completed line, for highlighting.
    pub winning_line: Option<[Cell; 3]>,
    /// Nine moves and no line.
    pub is_draw: bool,
    /// Moves, newest first.
    pub turn_log: Vec<LogEntry>,
    /// The bot has picked a cell and is waiting out its delay.
    pub thinking: bool,
    /// Display names.
    pub players: PlayerRegistry,
    /// Bot difficulty.
    pub difficulty: Difficulty,
}

impl Snapshot {
    /// Builds a snapshot from the history and session settings.
    pub fn derive(
        history: &TurnHistory,
        players: &PlayerRegistry,
        difficulty: Difficulty,
        thinking: bool,
    ) -> Self {
        let board = derive_board(history);
        let outcome = derive_outcome(history);
        Self {
            board,
            active_player: derive_active_player(history),
            winner: outcome.winner(),
            winning_line: winning_line(&board),
            is_draw: outcome.is_draw(),
            turn_log: history
                .iter()
                .map(|mv| LogEntry {
                    symbol: mv.symbol,
                    row: mv.cell.row(),
                    col: mv.cell.col(),
                })
                .collect(),
            thinking,
            players: players.clone(),
            difficulty,
        }
    }

    /// Winner, draw or ongoing.
    pub fn outcome(&self) -> Outcome {
        match (self.winner, self.is_draw) {
            (Some(symbol), _) => Outcome::Winner(symbol),
            (None, true) => Outcome::Draw,
            (None, false) => Outcome::Ongoing,
        }
    }

    /// Returns true once the game has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    /// Game-over banner text, e.g. `"Ada won!"` or `"It's a draw!"`.
    pub fn result_message(&self) -> Option<String> {
        match self.outcome() {
            Outcome::Winner(symbol) => Some(format!("{} won!", self.players.name(symbol))),
            Outcome::Draw => Some("It's a draw!".to_string()),
            Outcome::Ongoing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::derive(
            &TurnHistory::new(),
            &PlayerRegistry::default(),
            Difficulty::Easy,
            false,
        );

        assert_eq!(snapshot.board, Board::new());
        assert_eq!(snapshot.active_player, Symbol::X);
        assert_eq!(snapshot.winner, None);
        assert!(!snapshot.is_draw);
        assert!(snapshot.turn_log.is_empty());
        assert_eq!(snapshot.result_message(), None);
    }

    #[test]
    fn test_log_is_newest_first() {
        let mut history = TurnHistory::new();
        history.append(Cell::new(1, 1).unwrap()).unwrap();
        history.append(Cell::new(0, 2).unwrap()).unwrap();
        let snapshot = Snapshot::derive(&history, &PlayerRegistry::default(), Difficulty::Hard, false);

        let lines: Vec<String> = snapshot.turn_log.iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["O selected 0,2", "X selected 1,1"]);
    }

    #[test]
    fn test_result_message_uses_display_name() {
        let mut history = TurnHistory::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            history.append(Cell::new(row, col).unwrap()).unwrap();
        }
        let mut players = PlayerRegistry::default();
        players.rename(Symbol::X, "Ada");
        let snapshot = Snapshot::derive(&history, &players, Difficulty::Hard, false);

        assert_eq!(snapshot.result_message().as_deref(), Some("Ada won!"));
        assert_eq!(snapshot.winning_line.map(|l| l[2]), Cell::new(0, 2).ok());
    }
}
