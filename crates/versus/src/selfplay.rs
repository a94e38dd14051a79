//! Headless games: a uniformly random X against the bot.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};
use versus_core::{
    BotReply, GameSession, Outcome, PlayerRegistry, SelectOutcome, SessionConfig, Symbol,
    available_cells,
};

/// Tally of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
#[display(
    "{games} games: random X won {human_wins}, bot won {bot_wins}, {draws} draws"
)]
pub struct SelfPlaySummary {
    /// Games played.
    pub games: u32,
    /// Games the random mover won.
    pub human_wins: u32,
    /// Games the bot won.
    pub bot_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl SelfPlaySummary {
    fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Winner(Symbol::X) => self.human_wins += 1,
            Outcome::Winner(Symbol::O) => self.bot_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => warn!("Recorded an unfinished game"),
        }
    }
}

/// Plays `games` games through the regular session state machine, committing
/// every bot reply immediately.
#[instrument(skip(config), fields(difficulty = %config.difficulty))]
pub fn run_selfplay(games: u32, config: SessionConfig) -> SelfPlaySummary {
    let mut mover = match config.seed {
        // Offset so the mover and the bot do not share a stream.
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_os_rng(),
    };
    let mut session = GameSession::new(config, PlayerRegistry::default());
    let mut summary = SelfPlaySummary::default();

    for game in 0..games {
        let outcome = play_one(&mut session, &mut mover);
        debug!(game, %outcome, "Game finished");
        summary.record(outcome);
        session.restart();
    }

    info!(%summary, "Self-play finished");
    summary
}

fn play_one<R: Rng>(session: &mut GameSession, mover: &mut R) -> Outcome {
    loop {
        let free = available_cells(&session.board(), None);
        let Some(cell) = free.choose(mover) else {
            return session.outcome();
        };
        match session.select_cell(cell.row(), cell.col()) {
            SelectOutcome::Finished { outcome, .. } => return outcome,
            SelectOutcome::BotScheduled { pending, .. } => {
                match session.complete_bot_move(pending) {
                    BotReply::Applied { outcome, .. } if outcome.is_over() => return outcome,
                    BotReply::Applied { .. } => {}
                    BotReply::Stale | BotReply::Rejected(_) => return session.outcome(),
                }
            }
            SelectOutcome::Stalled { .. } => return session.outcome(),
            SelectOutcome::Ignored(reason) => {
                warn!(%reason, "Self-play move ignored");
                return session.outcome();
            }
        }
    }
}
