//! Versus - tic-tac-toe against a heuristic bot
//!
//! Front ends over [`versus_core`]: an async orchestrator that owns the
//! session and paces the bot, a terminal UI, and a headless self-play runner.
//!
//! # Architecture
//!
//! - **Orchestrator**: single task that mutates the game, driven by commands
//! - **Config**: TOML settings with command-line overrides
//! - **TUI**: ratatui front end talking to the orchestrator over channels
//! - **Self-play**: random mover against the bot, no UI
//!
//! # Example
//!
//! ```no_run
//! use tokio::sync::mpsc;
//! use versus::{GameEvent, Orchestrator, VersusConfig};
//! use versus_core::GameSession;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = VersusConfig::default();
//! let session = GameSession::new(config.session_config(), config.players());
//! let (event_tx, mut event_rx) = mpsc::unbounded_channel();
//! let (orchestrator, handle) = Orchestrator::new(session, event_tx);
//! tokio::spawn(orchestrator.run());
//!
//! handle.select_cell(1, 1)?;
//! while let Some(event) = event_rx.recv().await {
//!     if let GameEvent::GameOver { .. } = event {
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod orchestrator;
mod selfplay;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command as CliCommand};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, VersusConfig};

// Crate-level exports - Orchestration
pub use orchestrator::{Command, GameEvent, GameHandle, Orchestrator};

// Crate-level exports - Front ends
pub use selfplay::{SelfPlaySummary, run_selfplay};
pub use tui::run_tui;
