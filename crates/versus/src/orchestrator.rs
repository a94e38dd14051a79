//! Async driver around a [`GameSession`].
//!
//! One task owns the session and is the only place it is mutated. Front ends
//! talk to it through a [`GameHandle`]. The bot's thinking delay is a timer
//! task that just posts the pending reply back onto the same queue, so the
//! session sees the reply as one more message and can drop it if a restart
//! happened in between.

use anyhow::{Result, anyhow};
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};
use versus_core::{
    BotReply, Difficulty, GameSession, PendingBotMove, SelectOutcome, Snapshot, Symbol,
};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Game state updated.
    StateChanged(Snapshot),
    /// Bot has picked a cell and is waiting out its delay.
    BotThinking,
    /// Game ended; carries the winner's display name, `None` for a draw.
    GameOver {
        /// Winner's display name.
        winner: Option<String>,
    },
}

/// Requests a front end can make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The human clicked a cell.
    SelectCell {
        /// Row (0-2).
        row: usize,
        /// Column (0-2).
        col: usize,
    },
    /// Change a display name.
    RenamePlayer {
        /// Whose name.
        symbol: Symbol,
        /// New name.
        name: String,
    },
    /// Clear the board.
    Restart,
    /// Change the bot's difficulty.
    SetDifficulty(Difficulty),
}

#[derive(Debug)]
enum Message {
    Command(Command),
    BotReady(PendingBotMove),
}

/// Cloneable sender for [`Command`]s.
///
/// The orchestrator stops once every handle is dropped and no bot reply is
/// pending.
#[derive(Debug, Clone)]
pub struct GameHandle {
    tx: mpsc::UnboundedSender<Message>,
}

impl GameHandle {
    /// Sends a command to the orchestrator.
    pub fn send(&self, command: Command) -> Result<()> {
        self.tx
            .send(Message::Command(command))
            .map_err(|_| anyhow!("Game orchestrator has stopped"))
    }

    /// The human clicked `(row, col)`.
    pub fn select_cell(&self, row: usize, col: usize) -> Result<()> {
        self.send(Command::SelectCell { row, col })
    }

    /// Renames a player.
    pub fn rename_player(&self, symbol: Symbol, name: impl Into<String>) -> Result<()> {
        self.send(Command::RenamePlayer {
            symbol,
            name: name.into(),
        })
    }

    /// Starts a rematch.
    pub fn restart(&self) -> Result<()> {
        self.send(Command::Restart)
    }

    /// Changes the bot's difficulty.
    pub fn set_difficulty(&self, difficulty: Difficulty) -> Result<()> {
        self.send(Command::SetDifficulty(difficulty))
    }
}

/// Owns the session and paces the bot.
pub struct Orchestrator {
    session: GameSession,
    rx: mpsc::UnboundedReceiver<Message>,
    tx: mpsc::WeakUnboundedSender<Message>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates an orchestrator and the first handle to it.
    pub fn new(
        session: GameSession,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> (Self, GameHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let orchestrator = Self {
            session,
            rx,
            tx: tx.downgrade(),
            event_tx,
        };
        (orchestrator, GameHandle { tx })
    }

    /// Runs the game loop until every handle is dropped.
    ///
    /// Publishes the initial snapshot first.
    ///
    /// # Errors
    ///
    /// Fails if the UI side of the event channel is closed.
    pub async fn run(mut self) -> Result<()> {
        info!("Starting game orchestration");
        self.publish()?;

        while let Some(message) = self.rx.recv().await {
            match message {
                Message::Command(command) => self.handle_command(command)?,
                Message::BotReady(pending) => self.handle_bot_ready(pending)?,
            }
        }

        info!("All game handles dropped, stopping orchestration");
        Ok(())
    }

    #[instrument(skip(self))]
    fn handle_command(&mut self, command: Command) -> Result<()> {
        match command {
            Command::SelectCell { row, col } => match self.session.select_cell(row, col) {
                SelectOutcome::Ignored(reason) => {
                    debug!(%reason, "Selection ignored");
                    Ok(())
                }
                SelectOutcome::Finished { human, outcome } => {
                    info!(%human, %outcome, "Human move ended the game");
                    self.publish()?;
                    self.announce_game_over()
                }
                SelectOutcome::BotScheduled { human, pending } => {
                    debug!(%human, "Human move recorded");
                    self.publish()?;
                    self.event_tx.send(GameEvent::BotThinking)?;
                    self.schedule(pending);
                    Ok(())
                }
                SelectOutcome::Stalled { human } => {
                    warn!(%human, "Bot could not answer, game stalled");
                    self.publish()
                }
            },
            Command::RenamePlayer { symbol, name } => {
                if self.session.rename_player(symbol, &name) {
                    self.publish()?;
                }
                Ok(())
            }
            Command::Restart => {
                self.session.restart();
                self.publish()
            }
            Command::SetDifficulty(difficulty) => {
                self.session.set_difficulty(difficulty);
                self.publish()
            }
        }
    }

    #[instrument(skip(self), fields(cell = %pending.cell()))]
    fn handle_bot_ready(&mut self, pending: PendingBotMove) -> Result<()> {
        match self.session.complete_bot_move(pending) {
            BotReply::Applied { mv, outcome } => {
                debug!(%mv, "Bot move recorded");
                self.publish()?;
                if outcome.is_over() {
                    self.announce_game_over()?;
                }
                Ok(())
            }
            BotReply::Stale => {
                debug!("Dropped stale bot move");
                Ok(())
            }
            BotReply::Rejected(e) => {
                warn!(error = %e, "Bot move rejected");
                self.publish()
            }
        }
    }

    /// Posts `pending` back to this orchestrator after its delay.
    fn schedule(&self, pending: PendingBotMove) {
        let Some(tx) = self.tx.upgrade() else {
            debug!("No handles left, not scheduling bot move");
            return;
        };
        tokio::spawn(async move {
            sleep(pending.delay).await;
            // A closed queue means the orchestrator already stopped.
            let _ = tx.send(Message::BotReady(pending));
        });
    }

    fn publish(&self) -> Result<()> {
        self.event_tx
            .send(GameEvent::StateChanged(self.session.snapshot()))?;
        Ok(())
    }

    fn announce_game_over(&self) -> Result<()> {
        let snapshot = self.session.snapshot();
        let winner = snapshot
            .winner
            .map(|symbol| snapshot.players.name(symbol).to_string());
        info!(?winner, "Game over");
        self.event_tx.send(GameEvent::GameOver { winner })?;
        Ok(())
    }
}
