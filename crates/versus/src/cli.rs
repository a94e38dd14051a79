//! Command-line interface for versus.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use versus_core::Difficulty;

/// Versus - tic-tac-toe against a heuristic bot
#[derive(Parser, Debug)]
#[command(name = "versus")]
#[command(about = "Play tic-tac-toe against a heuristic bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./versus.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Bot difficulty: easy, medium or hard
    #[arg(short, long, global = true)]
    pub difficulty: Option<Difficulty>,

    /// Bot thinking delay in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Seed for reproducible games
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Pit a random mover against the bot without a UI
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["versus"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.difficulty, None);
    }

    #[test]
    fn test_parses_global_overrides() {
        let cli = Cli::try_parse_from([
            "versus", "selfplay", "--games", "10", "--difficulty", "hard", "--seed", "3",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Command::Selfplay { games: 10 }));
        assert_eq!(cli.difficulty, Some(Difficulty::Hard));
        assert_eq!(cli.seed, Some(3));
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["versus", "--difficulty", "brutal"]).is_err());
    }
}
