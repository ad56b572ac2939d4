//! Terminal UI for the chess client.

mod app;
mod input;
mod ui;

use crate::adjudicator::HttpAdjudicator;
use crate::orchestrator::{GameEvent, Orchestrator, PlayerCommand};
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Runs the TUI client against the adjudication service at `server_url`.
pub async fn run_tui(server_url: String, log_file: &Path) -> Result<()> {
    // Log to a file so tracing output does not fight the UI for the
    // terminal.
    let log = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log))
        .with_ansi(false)
        .try_init();

    info!(server_url = %server_url, "Starting chess TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Channels between the UI loop and the orchestrator.
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let adjudicator = Arc::new(HttpAdjudicator::new(server_url));
    let orchestrator = Orchestrator::new(adjudicator, cmd_rx, event_tx);

    let orchestrator_handle = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            tracing::error!(error = %e, "Orchestrator error");
        }
    });

    let app = App::new();
    let res = run_app(&mut terminal, app, cmd_tx, &mut event_rx).await;

    orchestrator_handle.abort();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "UI loop error");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Draw, drain orchestrator events, poll keys.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    cmd_tx: mpsc::UnboundedSender<PlayerCommand>,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => {
                        info!("User quit");
                        return Ok(());
                    }
                    KeyCode::Char('r') => {
                        app.note_reset();
                        let _ = cmd_tx.send(PlayerCommand::Reset);
                    }
                    KeyCode::Esc => app.clear_selection(),
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        if let Some(mv) = app.confirm_square() {
                            info!(%mv, "Drop event");
                            let _ = cmd_tx.send(PlayerCommand::Drop(mv));
                        }
                    }
                    code => app.move_cursor(code),
                }
            }
        }
    }
}
