//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use ploader_api::ApiClient;
use ploader_app::config::Settings;
use ploader_app::message::Message;
use ploader_app::process::process_message;
use ploader_app::signals;
use ploader_app::state::AppState;
use ploader_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the TUI against the backend at `settings.api.base_url`
pub async fn run(settings: Settings) -> Result<()> {
    let api = ApiClient::new(&settings.api.base_url, settings.api.timeout())
        .map_err(|e| Error::client_init(e.to_string()))?;
    info!("Using backend at {}", api.base_url());
    let api = Arc::new(api);

    // Install panic hook for terminal restoration
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    let mut state = AppState::with_settings(settings);

    // Unified message channel for background tasks and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, api);

    let restored = terminal::restore();
    if let Err(e) = &restored {
        error!("{}", e);
    }
    result.and(restored)
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    api: Arc<ApiClient>,
) -> Result<()> {
    while !state.should_quit() {
        // Process task results and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &api);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &api);
        }
    }

    info!("Leaving event loop");
    Ok(())
}
