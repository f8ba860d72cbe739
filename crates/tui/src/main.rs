//! ISM TUI entry point.
//!
//! Responsibilities:
//! - Parse CLI arguments and initialize file logging.
//! - Load configuration and the persisted view state.
//! - Run the event loop: input stream, UI tick, and side effect dispatch.
//! - Persist the view state and restore the terminal on exit.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ism_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::{Mutex, mpsc::channel};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use ism_tui::action::Action;
use ism_tui::app::App;
use ism_tui::cli::Cli;
use ism_tui::runtime::{
    client::create_client,
    config::{initial_state, load_config, open_config_manager, save_and_quit},
    side_effects::{TaskTracker, handle_side_effects},
    terminal::TerminalGuard,
};
use ism_tui::transforms::TransformPreview;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "ism-tui.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let config = load_config(&cli)?;
    let config_manager = open_config_manager(&cli)?;
    let persisted = initial_state(&cli, &config_manager);
    let config_manager = Arc::new(Mutex::new(config_manager));
    let client = Arc::new(create_client(&config)?);

    let preview = cli
        .preview_index
        .as_ref()
        .map(|index| TransformPreview::new(index.clone(), cli.preview_filter.clone(), &[]));
    let mut app = App::new(&persisted, config.page_size, preview, cli.profile.clone());

    let task_tracker = TaskTracker::new();
    let terminal_guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    let tx_input = tx.clone();
    task_tracker.spawn(async move {
        let mut reader = EventStream::new();
        while let Some(event) = reader.next().await {
            let action = match event {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Action::Input(key),
                Ok(Event::Resize(width, height)) => Action::Resize(width, height),
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "terminal event stream failed");
                    break;
                }
            };
            if tx_input.send(action).await.is_err() {
                break;
            }
        }
    });

    app.mount(Instant::now());
    tracing::info!("ism-tui started");

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    'event_loop: loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::debug!(action = action.type_name(), "handling action");
                app.update(action);
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }

        for effect in app.drain_effects() {
            if matches!(effect, Action::Quit) {
                if let Err(e) = save_and_quit(&app, &config_manager).await {
                    tracing::error!(error = %e, "failed to save state");
                }
                break 'event_loop;
            }
            handle_side_effects(effect, client.clone(), tx.clone(), task_tracker.clone()).await;
        }
    }

    // The input reader only ends with the terminal; don't wait on it.
    task_tracker.close();
    drop(terminal_guard);
    terminal.show_cursor()?;
    tracing::info!("ism-tui exited");

    Ok(())
}
