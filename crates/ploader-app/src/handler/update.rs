//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use crate::message::Message;
use crate::state::{AppState, HomeFocus, Page};

use super::{home, keys::handle_key, navigation, preview, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Paste(text) => handle_paste(state, text),

        Message::Tick => {
            if state.is_loading() {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::NavigateHome => navigation::handle_navigate_home(state),
        Message::NavigateSettings => navigation::handle_navigate_settings(state),
        Message::ClientStatusLoaded {
            request_id,
            statuses,
        } => navigation::handle_client_status_loaded(state, request_id, statuses),
        Message::ClientStatusFailed { request_id, error } => {
            navigation::handle_client_status_failed(state, request_id, error)
        }

        // ─────────────────────────────────────────────────────────
        // Home
        // ─────────────────────────────────────────────────────────
        Message::HomeFocusNext => home::handle_focus(state, true),
        Message::HomeFocusPrev => home::handle_focus(state, false),
        Message::HomeSelect(action) => home::handle_select(state, action),
        Message::HomePromptChanged { text } => home::handle_prompt_changed(state, text),
        Message::HomeImagePathChanged { text } => home::handle_image_path_changed(state, text),
        Message::HomeImageSubmitPath => home::handle_image_submit_path(state),
        Message::HomeImageDropped { path } => home::handle_image_dropped(state, path),
        Message::HomeImageRemoved => home::handle_image_removed(state),
        Message::ImageLoaded { request_id, image } => {
            home::handle_image_loaded(state, request_id, image)
        }
        Message::ImageLoadFailed { request_id, error } => {
            home::handle_image_load_failed(state, request_id, error)
        }
        Message::AnalyzeRequested => home::handle_analyze_requested(state),
        Message::AnalyzeSucceeded {
            request_id,
            response,
        } => home::handle_analyze_succeeded(state, request_id, response),
        Message::AnalyzeFailed { request_id, error } => {
            home::handle_analyze_failed(state, request_id, error)
        }

        Message::DismissError => {
            match &mut state.page {
                Page::Home(home) => home.error = None,
                Page::Preview(preview) => preview.error = None,
                Page::Settings(_) | Page::Success(_) => {}
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Preview
        // ─────────────────────────────────────────────────────────
        Message::PreviewFocusNext => preview::handle_focus(state, true),
        Message::PreviewFocusPrev => preview::handle_focus(state, false),
        Message::DismissAlert { index } => preview::handle_dismiss_alert(state, index),
        Message::EditProduct(edit) => preview::handle_edit(state, edit),
        Message::PriceInputChanged { text } => preview::handle_price_input(state, text),
        Message::ChooseCategory(choice) => preview::handle_choose_category(state, choice),
        Message::UploadRequested => preview::handle_upload_requested(state),
        Message::UploadCompleted {
            request_id,
            response,
        } => preview::handle_upload_completed(state, request_id, response),
        Message::UploadFailed { request_id, error } => {
            preview::handle_upload_failed(state, request_id, error)
        }
        Message::BackToHome => navigation::handle_navigate_home(state),

        // ─────────────────────────────────────────────────────────
        // Success
        // ─────────────────────────────────────────────────────────
        Message::ResetFlow => navigation::handle_navigate_home(state),
        Message::OpenListing => navigation::handle_open_listing(state),
    }
}

/// Route pasted text: a path dropped onto the home form, or text typed into
/// the focused field.
fn handle_paste(state: &mut AppState, text: String) -> UpdateResult {
    if matches!(state.page, Page::Preview(_)) {
        return preview::handle_paste(state, &text);
    }

    match &state.page {
        Page::Home(home) if home.focus == HomeFocus::Prompt => {
            let mut prompt = home.prompt.clone();
            prompt.push_str(&text);
            UpdateResult::message(Message::HomePromptChanged { text: prompt })
        }
        Page::Home(_) => UpdateResult::message(Message::HomeImageDropped { path: text }),
        _ => {
            debug!("Ignoring paste on {} page", state.page.name());
            UpdateResult::none()
        }
    }
}
