//! Versus - play tic-tac-toe against a heuristic bot.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use versus::{Cli, CliCommand, VersusConfig, run_selfplay, run_tui};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = VersusConfig::load(cli.config.as_deref())?;
    config.apply_overrides(cli.difficulty, cli.delay_ms, cli.seed);

    match cli.command.unwrap_or(CliCommand::Play) {
        CliCommand::Play => run_tui(config).await,
        CliCommand::Selfplay { games } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();

            info!(games, difficulty = %config.difficulty(), "Starting self-play");
            let summary = run_selfplay(games, config.session_config());
            println!("{}", summary);
            Ok(())
        }
    }
}
