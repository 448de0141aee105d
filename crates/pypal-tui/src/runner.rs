//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: Main entry point with loaded settings
//! - `run_loop`: Main event loop processing terminal and channel events

use tokio::sync::mpsc;

use pypal_app::config::Settings;
use pypal_app::message::Message;
use pypal_app::state::AppState;
use pypal_app::{signals, update};
use pypal_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    // Create initial state with settings
    let mut state = AppState::with_settings(settings);
    info!(
        "PythonPal starting (tutor: {}, playground: {})",
        state.active_tutor().name,
        state.playground_open
    );

    // Unified message channel (signal handler, future background work)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx);

    // Run the main loop
    let result = run_loop(&mut term, &mut state, msg_rx);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (from signal handler, etc.)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}

/// Apply a message and any follow-up messages it produces
fn process_message(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next.take() {
        next = update(state, msg).message;
    }
}
