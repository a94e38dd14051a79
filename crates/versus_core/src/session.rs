//! A single human-vs-bot game and its turn state machine.
//!
//! ```text
//! AwaitingHumanMove --select_cell--> BotThinking --complete_bot_move--> AwaitingHumanMove
//!        |                                                   |
//!        +----------- win / full board ---> Terminal <-------+
//! ```
//!
//! The session never sleeps. When the bot has to answer it returns a
//! [`PendingBotMove`] carrying the chosen cell, the delay to wait and the
//! session generation. Whoever drives the session waits out the delay and
//! hands the pending move back through [`GameSession::complete_bot_move`].
//! [`GameSession::restart`] bumps the generation, so replies scheduled for an
//! earlier game are recognised and dropped.

use super::action::{Move, MoveError};
use super::bot::{BotDecision, BotEngine};
use super::derive::{derive_board, derive_outcome};
use super::history::TurnHistory;
use super::players::PlayerRegistry;
use super::snapshot::Snapshot;
use super::{Board, Cell, Difficulty, Outcome, Symbol};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Pause between the human's move and the bot's reply.
pub const DEFAULT_THINKING_DELAY: Duration = Duration::from_millis(500);

/// Per-session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Bot difficulty.
    pub difficulty: Difficulty,
    /// How long the bot appears to think.
    pub thinking_delay: Duration,
    /// Seed for the bot's randomness. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            thinking_delay: DEFAULT_THINKING_DELAY,
            seed: None,
        }
    }
}

/// Turn state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the human to pick a cell.
    AwaitingHumanMove,
    /// The bot has chosen a cell and is waiting out its delay.
    BotThinking,
    /// Someone won, the board is full or the bot could not answer. Only a
    /// restart leaves this state.
    Terminal(Outcome),
}

/// Why a cell selection was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// Row or column outside 0-2.
    #[display("cell is off the board")]
    OutOfBounds,
    /// The bot's reply has not landed yet.
    #[display("bot is thinking")]
    BotThinking,
    /// The game already has a result.
    #[display("game is over")]
    GameOver,
    /// The cell already holds a mark.
    #[display("cell is occupied")]
    CellOccupied,
}

/// A bot reply waiting for its delay to elapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingBotMove {
    /// Session generation the reply was computed for.
    pub generation: u64,
    /// Cell and policy tier.
    pub decision: BotDecision,
    /// How long to wait before committing.
    pub delay: Duration,
}

impl PendingBotMove {
    /// Cell the bot will play.
    pub fn cell(&self) -> Cell {
        self.decision.cell
    }
}

/// Result of a human cell selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// The human's move ended the game.
    Finished {
        /// Move recorded.
        human: Move,
        /// Winner or draw.
        outcome: Outcome,
    },
    /// The human's move was recorded and the bot's reply is pending.
    BotScheduled {
        /// Move recorded.
        human: Move,
        /// Reply to commit after `pending.delay`.
        pending: PendingBotMove,
    },
    /// The human's move was recorded but the bot had no cell to answer with.
    /// The session is terminal until restarted.
    Stalled {
        /// Move recorded.
        human: Move,
    },
}

/// Result of committing a pending bot reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotReply {
    /// The reply was recorded.
    Applied {
        /// Move recorded.
        mv: Move,
        /// Outcome after the move.
        outcome: Outcome,
    },
    /// The reply belongs to an earlier game or no reply was expected.
    Stale,
    /// The history refused the move.
    Rejected(MoveError),
}

/// One game of human (X) against bot (O).
#[derive(Debug, Clone)]
pub struct GameSession {
    history: TurnHistory,
    players: PlayerRegistry,
    engine: BotEngine,
    thinking_delay: Duration,
    phase: Phase,
    generation: u64,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session with an empty board.
    #[instrument(skip(players))]
    pub fn new(config: SessionConfig, players: PlayerRegistry) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!(difficulty = %config.difficulty, "Creating new game session");
        Self {
            history: TurnHistory::new(),
            players,
            engine: BotEngine::new(config.difficulty),
            thinking_delay: config.thinking_delay,
            phase: Phase::AwaitingHumanMove,
            generation: 0,
            rng,
        }
    }

    /// Handles a human click on `(row, col)`.
    ///
    /// The human's move is recorded before the bot's reply is computed. The
    /// reply itself is only computed here, never recorded; see
    /// [`GameSession::complete_bot_move`].
    #[instrument(skip(self), fields(generation = self.generation, phase = ?self.phase))]
    pub fn select_cell(&mut self, row: usize, col: usize) -> SelectOutcome {
        let Ok(cell) = Cell::new(row, col) else {
            return self.ignore(IgnoreReason::OutOfBounds);
        };
        match self.phase {
            Phase::AwaitingHumanMove => {}
            Phase::BotThinking => return self.ignore(IgnoreReason::BotThinking),
            Phase::Terminal(_) => return self.ignore(IgnoreReason::GameOver),
        }

        let human = match self.history.append(cell) {
            Ok(mv) => mv,
            Err(MoveError::CellOccupied(_)) => return self.ignore(IgnoreReason::CellOccupied),
            Err(MoveError::BoardFull) => return self.ignore(IgnoreReason::GameOver),
        };

        let outcome = derive_outcome(&self.history);
        if outcome.is_over() {
            info!(%outcome, "Game over");
            self.phase = Phase::Terminal(outcome);
            return SelectOutcome::Finished { human, outcome };
        }

        let board = derive_board(&self.history);
        match self.engine.decide(&board, human, &mut self.rng) {
            Some(decision) => {
                let pending = PendingBotMove {
                    generation: self.generation,
                    decision,
                    delay: self.thinking_delay,
                };
                debug!(cell = %decision.cell, kind = %decision.kind, "Bot reply scheduled");
                self.phase = Phase::BotThinking;
                SelectOutcome::BotScheduled { human, pending }
            }
            None => self.stall(human),
        }
    }

    /// Records a reply previously returned in [`SelectOutcome::BotScheduled`].
    ///
    /// Replies from an earlier generation, or arriving when no reply is
    /// expected, are dropped.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn complete_bot_move(&mut self, pending: PendingBotMove) -> BotReply {
        if pending.generation != self.generation || self.phase != Phase::BotThinking {
            debug!(
                pending_generation = pending.generation,
                phase = ?self.phase,
                "Discarding stale bot move"
            );
            return BotReply::Stale;
        }

        let mv = match self.history.append(pending.cell()) {
            Ok(mv) => mv,
            Err(e) => {
                warn!(error = %e, "Bot move rejected");
                self.phase = Phase::AwaitingHumanMove;
                return BotReply::Rejected(e);
            }
        };

        let outcome = derive_outcome(&self.history);
        self.phase = if outcome.is_over() {
            info!(%outcome, "Game over");
            Phase::Terminal(outcome)
        } else {
            Phase::AwaitingHumanMove
        };
        BotReply::Applied { mv, outcome }
    }

    /// Clears the board for a rematch. Names and difficulty are kept.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn restart(&mut self) {
        self.history.clear();
        self.generation = self.generation.wrapping_add(1);
        self.phase = Phase::AwaitingHumanMove;
        info!(generation = self.generation, "Game restarted");
    }

    /// Renames a player. Returns true if the name changed.
    #[instrument(skip(self))]
    pub fn rename_player(&mut self, symbol: Symbol, name: &str) -> bool {
        self.players.rename(symbol, name)
    }

    /// Changes the difficulty used from the next bot decision on.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!(from = %self.engine.difficulty(), to = %difficulty, "Difficulty changed");
        self.engine.set_difficulty(difficulty);
    }

    /// Current view for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::derive(
            &self.history,
            &self.players,
            self.engine.difficulty(),
            self.phase == Phase::BotThinking,
        )
    }

    /// Current turn state.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Move log.
    pub fn history(&self) -> &TurnHistory {
        &self.history
    }

    /// Board derived from the history.
    pub fn board(&self) -> Board {
        derive_board(&self.history)
    }

    /// Outcome derived from the history.
    pub fn outcome(&self) -> Outcome {
        derive_outcome(&self.history)
    }

    /// Display names.
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Bot difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.engine.difficulty()
    }

    /// Ends the game when the bot cannot answer, so the human never moves
    /// twice in a row.
    fn stall(&mut self, human: Move) -> SelectOutcome {
        warn!("Bot found no cell on an unfinished board");
        self.phase = Phase::Terminal(self.outcome());
        SelectOutcome::Stalled { human }
    }

    fn ignore(&self, reason: IgnoreReason) -> SelectOutcome {
        debug!(%reason, "Ignoring cell selection");
        SelectOutcome::Ignored(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(
            SessionConfig {
                seed: Some(1),
                ..SessionConfig::default()
            },
            PlayerRegistry::default(),
        )
    }

    #[test]
    fn test_stall_blocks_further_human_moves() {
        let mut session = session();
        let human = session.history.append(Cell::ALL[4]).unwrap();

        assert_eq!(session.stall(human), SelectOutcome::Stalled { human });
        assert!(matches!(session.phase(), Phase::Terminal(_)));

        // Without the terminal phase this click would be recorded as O.
        assert_eq!(
            session.select_cell(0, 0),
            SelectOutcome::Ignored(IgnoreReason::GameOver)
        );
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_restart_leaves_stalled_game() {
        let mut session = session();
        let human = session.history.append(Cell::ALL[4]).unwrap();
        session.stall(human);

        session.restart();
        assert_eq!(session.phase(), Phase::AwaitingHumanMove);
        assert!(matches!(
            session.select_cell(0, 0),
            SelectOutcome::BotScheduled { .. }
        ));
    }
}
