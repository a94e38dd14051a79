//! Application state and logic.

use super::input::{digit_cell, move_cursor};
use crate::orchestrator::{Command, GameEvent};
use crossterm::event::KeyCode;
use tracing::debug;
use versus_core::{Cell, Snapshot, Symbol};

/// What keystrokes currently do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Keys drive the board.
    Playing,
    /// Keys edit a player's name.
    Renaming {
        /// Whose name is being edited.
        symbol: Symbol,
        /// Name typed so far.
        buffer: String,
    },
}

/// Main application state.
pub struct App {
    snapshot: Snapshot,
    cursor: Cell,
    mode: Mode,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates the app showing `snapshot`.
    pub fn new(snapshot: Snapshot) -> Self {
        let status_message = turn_message(&snapshot);
        Self {
            snapshot,
            cursor: Cell::ALL[4],
            mode: Mode::Playing,
            status_message,
            should_quit: false,
        }
    }

    /// Latest game snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Current input mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::StateChanged(snapshot) => {
                self.snapshot = snapshot;
                if !self.snapshot.thinking {
                    self.status_message = turn_message(&self.snapshot);
                }
            }
            GameEvent::BotThinking => {
                let name = self.snapshot.players.name(Symbol::BOT);
                self.status_message = format!("{} is thinking...", name);
            }
            GameEvent::GameOver { winner } => {
                self.status_message = match winner {
                    Some(name) => format!("{} won! Press 'r' for a rematch or 'q' to quit.", name),
                    None => "It's a draw! Press 'r' for a rematch or 'q' to quit.".to_string(),
                };
            }
        }
    }

    /// Handles a key press, returning the command to send, if any.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Command> {
        match &mut self.mode {
            Mode::Playing => self.handle_playing_key(key),
            Mode::Renaming { symbol, buffer } => match key {
                KeyCode::Char(c) => {
                    buffer.push(c);
                    None
                }
                KeyCode::Backspace => {
                    buffer.pop();
                    None
                }
                KeyCode::Enter => {
                    let command = Command::RenamePlayer {
                        symbol: *symbol,
                        name: std::mem::take(buffer),
                    };
                    self.mode = Mode::Playing;
                    Some(command)
                }
                KeyCode::Esc => {
                    self.mode = Mode::Playing;
                    None
                }
                _ => None,
            },
        }
    }

    fn handle_playing_key(&mut self, key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('r') => Some(Command::Restart),
            KeyCode::Char('d') => Some(Command::SetDifficulty(self.snapshot.difficulty.cycle())),
            KeyCode::Char('n') => {
                self.start_rename(Symbol::HUMAN);
                None
            }
            KeyCode::Char('b') => {
                self.start_rename(Symbol::BOT);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(select(self.cursor)),
            KeyCode::Char(c) => {
                let cell = digit_cell(c)?;
                self.cursor = cell;
                Some(select(cell))
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
                None
            }
            _ => None,
        }
    }

    fn start_rename(&mut self, symbol: Symbol) {
        self.mode = Mode::Renaming {
            symbol,
            buffer: self.snapshot.players.name(symbol).to_string(),
        };
    }
}

fn select(cell: Cell) -> Command {
    Command::SelectCell {
        row: cell.row(),
        col: cell.col(),
    }
}

fn turn_message(snapshot: &Snapshot) -> String {
    match snapshot.result_message() {
        Some(result) => format!("{} Press 'r' for a rematch or 'q' to quit.", result),
        None => {
            let symbol = snapshot.active_player;
            format!("{}'s turn ({})", snapshot.players.name(symbol), symbol)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use versus_core::{Difficulty, PlayerRegistry, TurnHistory};

    fn app() -> App {
        App::new(Snapshot::derive(
            &TurnHistory::new(),
            &PlayerRegistry::default(),
            Difficulty::Medium,
            false,
        ))
    }

    #[test]
    fn test_starts_on_center_with_turn_message() {
        let app = app();
        assert_eq!(app.cursor(), Cell::ALL[4]);
        assert_eq!(app.status_message(), "Player's turn (X)");
    }

    #[test]
    fn test_enter_selects_cursor() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        assert_eq!(
            app.handle_key(KeyCode::Enter),
            Some(Command::SelectCell { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_space_selects_cursor() {
        let mut app = app();
        assert_eq!(
            app.handle_key(KeyCode::Char(' ')),
            Some(Command::SelectCell { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_digit_selects_and_moves_cursor() {
        let mut app = app();
        assert_eq!(
            app.handle_key(KeyCode::Char('3')),
            Some(Command::SelectCell { row: 0, col: 2 })
        );
        assert_eq!(app.cursor(), Cell::ALL[2]);
    }

    #[test]
    fn test_rename_flow() {
        let mut app = app();
        assert_eq!(app.handle_key(KeyCode::Char('b')), None);
        for _ in 0.."Bot".len() {
            app.handle_key(KeyCode::Backspace);
        }
        for c in "HAL".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        assert_eq!(
            app.handle_key(KeyCode::Enter),
            Some(Command::RenamePlayer {
                symbol: Symbol::O,
                name: "HAL".to_string()
            })
        );
        assert_eq!(app.mode(), &Mode::Playing);
    }

    #[test]
    fn test_rename_keys_do_not_play() {
        let mut app = app();
        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.handle_key(KeyCode::Char('5')), None);
        assert_eq!(app.handle_key(KeyCode::Char('q')), None);
        assert!(!app.should_quit());
        assert_eq!(app.handle_key(KeyCode::Esc), None);
        assert_eq!(app.mode(), &Mode::Playing);
    }

    #[test]
    fn test_difficulty_key_cycles() {
        let mut app = app();
        assert_eq!(
            app.handle_key(KeyCode::Char('d')),
            Some(Command::SetDifficulty(Difficulty::Hard))
        );
    }

    #[test]
    fn test_game_over_message() {
        let mut app = app();
        app.handle_event(GameEvent::GameOver {
            winner: Some("Bot".to_string()),
        });
        assert!(app.status_message().starts_with("Bot won!"));
        app.handle_event(GameEvent::GameOver { winner: None });
        assert!(app.status_message().starts_with("It's a draw!"));
    }
}
