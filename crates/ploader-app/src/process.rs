//! Message processing
//!
//! Runs a message through the TEA update loop, following up chained messages
//! and dispatching the actions each step returns.

use std::sync::Arc;

use ploader_api::ApiClient;
use tokio::sync::mpsc;
use tracing::trace;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &Arc<ApiClient>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            trace!("Dispatching {}", action_name(&action));
            handle_action(action, msg_tx.clone(), api.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

fn action_name(action: &handler::UpdateAction) -> &'static str {
    match action {
        handler::UpdateAction::LoadImage { .. } => "LoadImage",
        handler::UpdateAction::Analyze { .. } => "Analyze",
        handler::UpdateAction::Upload { .. } => "Upload",
        handler::UpdateAction::FetchClientStatus { .. } => "FetchClientStatus",
        handler::UpdateAction::OpenUrl { .. } => "OpenUrl",
    }
}
