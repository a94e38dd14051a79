//! Versus core - tic-tac-toe against a heuristic bot
//!
//! Pure game logic with no I/O. The only stored state is a [`TurnHistory`];
//! board, turn and outcome are derived from it on demand.
//!
//! # Architecture
//!
//! - **Rules**: line and draw detection over a [`Board`]
//! - **Derive**: board, active player and outcome from the history
//! - **Moves**: free-cell generation
//! - **Bot**: one-ply win/block heuristic gated by [`Difficulty`]
//! - **Session**: the turn state machine a front end drives
//!
//! # Example
//!
//! ```
//! use versus_core::{GameSession, PlayerRegistry, SelectOutcome, SessionConfig};
//!
//! let mut session = GameSession::new(SessionConfig::default(), PlayerRegistry::default());
//! if let SelectOutcome::BotScheduled { pending, .. } = session.select_cell(1, 1) {
//!     // wait `pending.delay`, then:
//!     session.complete_bot_move(pending);
//! }
//! assert_eq!(session.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod bot;
mod derive;
mod difficulty;
mod history;
mod moves;
mod outcome;
mod players;
pub mod rules;
mod session;
mod snapshot;
mod types;

pub use action::{Move, MoveError};
pub use bot::{BotDecision, BotEngine, DecisionKind};
pub use derive::{derive_active_player, derive_board, derive_outcome};
pub use difficulty::Difficulty;
pub use history::{MAX_MOVES, TurnHistory};
pub use moves::available_cells;
pub use outcome::Outcome;
pub use players::{DEFAULT_BOT_NAME, DEFAULT_PLAYER_NAME, PlayerRegistry};
pub use rules::{is_draw, is_full, line_winner, winning_line};
pub use session::{
    BotReply, DEFAULT_THINKING_DELAY, GameSession, IgnoreReason, PendingBotMove, Phase,
    SelectOutcome, SessionConfig,
};
pub use snapshot::{LogEntry, Snapshot};
pub use types::{Board, Cell, CellError, Square, Symbol};
