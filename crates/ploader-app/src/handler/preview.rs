//! Edit/upload step handlers

use ploader_api::UploadRequest;
use ploader_core::{ProductEdit, UploadResponse, TITLE_MAX_CHARS};
use tracing::{debug, info, warn};

use crate::message::Message;
use crate::state::{
    parse_price_input, AppState, CategoryChoice, CategoryField, Page,
    PreviewField, PreviewFocus, PreviewState, RequestId, SuccessData,
};

use super::{UpdateAction, UpdateResult};

/// Shown when the backend answers 2xx but does not accept the listing.
pub const UPLOAD_REJECTED: &str = "Caricamento fallito";

fn preview_mut(state: &mut AppState) -> Option<&mut PreviewState> {
    match &mut state.page {
        Page::Preview(preview) => Some(preview),
        _ => None,
    }
}

pub fn handle_focus(state: &mut AppState, forward: bool) -> UpdateResult {
    if let Some(preview) = preview_mut(state) {
        if forward {
            preview.focus_next();
        } else {
            preview.focus_prev();
        }
    }
    UpdateResult::none()
}

/// Remove one alert from the working set. Focus stays on the alert list while
/// alerts remain.
pub fn handle_dismiss_alert(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(preview) = preview_mut(state) else {
        return UpdateResult::none();
    };
    if index >= preview.alerts.len() {
        return UpdateResult::none();
    }

    preview.alerts.remove(index);
    if let PreviewFocus::Alert(focused) = preview.focus {
        preview.focus = match preview.alerts.len() {
            0 => PreviewFocus::Field(PreviewField::Title),
            len => PreviewFocus::Alert(focused.min(len - 1)),
        };
    }
    UpdateResult::none()
}

pub fn handle_edit(state: &mut AppState, edit: ProductEdit) -> UpdateResult {
    let Some(preview) = preview_mut(state) else {
        return UpdateResult::none();
    };

    // Typing past the limit is blocked; shortening an over-long title is not.
    if let ProductEdit::Title(text) = &edit {
        let len = text.chars().count();
        if len > TITLE_MAX_CHARS && len >= preview.product.title_len() {
            return UpdateResult::none();
        }
    }

    preview.product.apply(edit);
    UpdateResult::none()
}

pub fn handle_price_input(state: &mut AppState, text: String) -> UpdateResult {
    if let Some(preview) = preview_mut(state) {
        preview.product.price = parse_price_input(&text);
        preview.price_input = text;
    }
    UpdateResult::none()
}

pub fn handle_choose_category(state: &mut AppState, choice: CategoryChoice) -> UpdateResult {
    if let Some(preview) = preview_mut(state) {
        if let CategoryField::Choice { selected } = &mut preview.category {
            *selected = choice;
        }
    }
    UpdateResult::none()
}

/// Append pasted text to the focused text field.
pub fn handle_paste(state: &mut AppState, text: &str) -> UpdateResult {
    let Some(preview) = preview_mut(state) else {
        return UpdateResult::none();
    };
    let Some(current) = preview.focused_text() else {
        return UpdateResult::none();
    };
    let mut updated = current.to_string();
    updated.push_str(text);
    match edit_message(preview.focus, updated) {
        Some(msg) => UpdateResult::message(msg),
        None => UpdateResult::none(),
    }
}

/// The message that stores `text` into the element at `focus`.
pub fn edit_message(focus: PreviewFocus, text: String) -> Option<Message> {
    let edit = match focus {
        PreviewFocus::Field(PreviewField::Title) => ProductEdit::Title(text),
        PreviewFocus::Field(PreviewField::Brand) => ProductEdit::Brand(text),
        PreviewFocus::Field(PreviewField::Ean) => ProductEdit::Ean(text),
        PreviewFocus::Field(PreviewField::Price) => {
            return Some(Message::PriceInputChanged { text })
        }
        PreviewFocus::Field(PreviewField::Category) => ProductEdit::CategorySuggested(text),
        PreviewFocus::Field(PreviewField::Description) => ProductEdit::Description(text),
        PreviewFocus::Bullet(index) => ProductEdit::BulletPoint { index, text },
        PreviewFocus::Alert(_) | PreviewFocus::Submit => return None,
    };
    Some(Message::EditProduct(edit))
}

pub fn handle_upload_requested(state: &mut AppState) -> UpdateResult {
    let request_id = state.next_request_id();
    let Some(preview) = preview_mut(state) else {
        return UpdateResult::none();
    };
    if preview.pending.is_some() {
        debug!("Upload already in flight, ignoring submit");
        return UpdateResult::none();
    }

    let request = UploadRequest {
        product: preview.product.clone(),
        category: preview.resolved_category().to_string(),
        client: preview.client.clone(),
        marketplace: preview.marketplace,
        image: preview.image.clone(),
    };
    preview.pending = Some(request_id);
    preview.error = None;

    UpdateResult::action(UpdateAction::Upload {
        request_id,
        request: Box::new(request),
    })
}

pub fn handle_upload_completed(
    state: &mut AppState,
    request_id: RequestId,
    response: UploadResponse,
) -> UpdateResult {
    let Some(preview) = preview_mut(state) else {
        debug!("Discarding upload result {} outside preview", request_id);
        return UpdateResult::none();
    };
    if preview.pending != Some(request_id) {
        debug!("Discarding stale upload result {}", request_id);
        return UpdateResult::none();
    }
    preview.pending = None;

    let Some(item_id) = response.accepted_item_id() else {
        warn!("Upload {} not accepted by the backend", request_id);
        preview.error = Some(UPLOAD_REJECTED.to_string());
        return UpdateResult::none();
    };

    info!(
        item_id,
        marketplace = preview.marketplace.domain,
        "Upload accepted"
    );
    let success = SuccessData {
        marketplace_item_id: item_id.to_string(),
        client: preview.client.clone(),
        marketplace: preview.marketplace,
        title: preview.original.product.title.clone(),
        price: preview.original.product.price,
    };
    state.page = Page::Success(success);
    UpdateResult::none()
}

pub fn handle_upload_failed(
    state: &mut AppState,
    request_id: RequestId,
    error: String,
) -> UpdateResult {
    match preview_mut(state) {
        Some(preview) if preview.pending == Some(request_id) => {
            warn!("Upload failed: {}", error);
            preview.pending = None;
            preview.error = Some(error);
        }
        _ => debug!("Discarding stale upload failure {}", request_id),
    }
    UpdateResult::none()
}
