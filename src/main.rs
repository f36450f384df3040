//! Thunder TUI - actor-based collection runner
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use thunder_tui::cli::{Cli, Command};
use thunder_tui::config::Config;
use thunder_tui::constants::{LOG_FILE_NAME, POLL_INTERVAL};
use thunder_tui::messages::ui_events::key_to_ui_event;
use thunder_tui::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use thunder_tui::ui::draw_ui;
use thunder_tui::{AppActor, AppState, NetworkActor};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Command::Help => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::SUCCESS)
        }
        Command::Run { path } => run(&path).await,
    }
}

async fn run(path: &Path) -> anyhow::Result<ExitCode> {
    let config = Config::from_env();

    // Initialize logging to file; the terminal belongs to the TUI
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("cannot create log directory {}", config.log_dir.display()))?;
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(&config.log_dir)
        .with_context(|| format!("cannot open log file in {}", config.log_dir.display()))?;
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(path = %path.display(), "Starting session");
    let state = AppState::load(path);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(state, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    let _ = ui_tx.send(UiEvent::Resize(size.width, size.height));

    // Run UI loop (synchronous with async polling)
    let final_state = run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    if final_state.is_error() {
        tracing::info!("Session ended on load error");
        return Ok(ExitCode::FAILURE);
    }

    tracing::info!("Session ended");
    Ok(ExitCode::SUCCESS)
}

/// Run the synchronous UI rendering loop, returning the last state drawn
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<RenderState> {
    // The app actor's first snapshot arrives before any event is handled
    let mut current_state = render_rx.recv().await.unwrap_or_default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(POLL_INTERVAL)? {
            let ui_event = match event::read()? {
                Event::Key(key) => key_to_ui_event(key, current_state.is_error()),
                Event::Resize(width, height) => Some(UiEvent::Resize(width, height)),
                _ => None,
            };

            if let Some(ui_event) = ui_event {
                let _ = ui_tx.send(ui_event);
                if ui_event == UiEvent::Quit {
                    break;
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(current_state)
}
