//! Terminal UI for Versus

mod app;
mod input;
mod ui;

use crate::config::VersusConfig;
use crate::orchestrator::{GameEvent, GameHandle, Orchestrator};
use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};
use versus_core::GameSession;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs a game in the terminal until the user quits.
pub async fn run_tui(config: VersusConfig) -> Result<()> {
    // Log to a file so output does not tear the screen.
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(difficulty = %config.difficulty(), "Starting Versus TUI");

    let session = GameSession::new(config.session_config(), config.players());
    let app = App::new(session.snapshot());

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (orchestrator, handle) = Orchestrator::new(session, event_tx);
    let orchestrator_task = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            error!(error = %e, "Orchestrator error");
        }
    });

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_app(&mut terminal, app, &handle, &mut event_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    drop(handle);
    if let Err(e) = orchestrator_task.await {
        error!(error = %e, "Orchestrator task failed");
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
fn run_app(
    terminal: &mut Tui,
    mut app: App,
    handle: &GameHandle,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()> {
    loop {
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            debug!(code = ?key.code, "Key pressed");
            if let Some(command) = app.handle_key(key.code) {
                handle.send(command)?;
            }
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
