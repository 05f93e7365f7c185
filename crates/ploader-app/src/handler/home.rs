//! Analyze step handlers

use std::path::PathBuf;

use ploader_api::AnalyzeRequest;
use ploader_core::{declared_mime_type, is_image_mime, AnalyzeResponse, CapturedImage};
use tracing::{debug, info, warn};

use crate::select::SelectAction;
use crate::state::{
    AppState, HomeFocus, HomeState, Page, PendingAnalyze, PreviewState, RequestId,
};

use super::{UpdateAction, UpdateResult};

fn home_mut(state: &mut AppState) -> Option<&mut HomeState> {
    match &mut state.page {
        Page::Home(home) => Some(home),
        _ => None,
    }
}

pub fn handle_focus(state: &mut AppState, forward: bool) -> UpdateResult {
    if let Some(home) = home_mut(state) {
        home.close_selects();
        home.focus = if forward {
            home.focus.next()
        } else {
            home.focus.prev()
        };
    }
    UpdateResult::none()
}

pub fn handle_select(state: &mut AppState, action: SelectAction) -> UpdateResult {
    let Some(home) = home_mut(state) else {
        return UpdateResult::none();
    };
    let changed = match home.focus {
        HomeFocus::Client => home.client.apply(action),
        HomeFocus::Marketplace => home.marketplace.apply(action),
        _ => false,
    };
    if changed {
        debug!(
            client = home.selected_client(),
            marketplace = home.selected_marketplace().country,
            "Selection changed"
        );
    }
    UpdateResult::none()
}

pub fn handle_prompt_changed(state: &mut AppState, text: String) -> UpdateResult {
    if let Some(home) = home_mut(state) {
        home.prompt = text;
        home.error = None;
    }
    UpdateResult::none()
}

pub fn handle_image_path_changed(state: &mut AppState, text: String) -> UpdateResult {
    if let Some(home) = home_mut(state) {
        home.image_path = text;
    }
    UpdateResult::none()
}

pub fn handle_image_dropped(state: &mut AppState, path: String) -> UpdateResult {
    if let Some(home) = home_mut(state) {
        home.image_path = path;
        return handle_image_submit_path(state);
    }
    UpdateResult::none()
}

/// Accept the typed path when its declared type is an image.
///
/// Non-image files are ignored without surfacing an error and are never read.
pub fn handle_image_submit_path(state: &mut AppState) -> UpdateResult {
    let request_id = state.next_request_id();
    let Some(home) = home_mut(state) else {
        return UpdateResult::none();
    };

    let path = normalize_dropped_path(&home.image_path);
    if path.as_os_str().is_empty() {
        return UpdateResult::none();
    }

    let mime = declared_mime_type(&path);
    if !is_image_mime(mime) {
        debug!("Ignoring {:?}: declared type {} is not an image", path, mime);
        return UpdateResult::none();
    }

    home.image_request = Some(request_id);
    UpdateResult::action(UpdateAction::LoadImage {
        request_id,
        path,
        mime,
    })
}

pub fn handle_image_removed(state: &mut AppState) -> UpdateResult {
    if let Some(home) = home_mut(state) {
        home.image = None;
        home.image_path.clear();
        home.image_request = None;
        home.error = None;
    }
    UpdateResult::none()
}

pub fn handle_image_loaded(
    state: &mut AppState,
    request_id: RequestId,
    image: CapturedImage,
) -> UpdateResult {
    match home_mut(state) {
        Some(home) if home.image_request == Some(request_id) => {
            info!("Image {} accepted ({})", image.file_name, image.size_label());
            home.image_request = None;
            home.image = Some(image);
            home.error = None;
        }
        _ => debug!("Discarding stale image load {}", request_id),
    }
    UpdateResult::none()
}

pub fn handle_image_load_failed(
    state: &mut AppState,
    request_id: RequestId,
    error: String,
) -> UpdateResult {
    warn!("{}", error);
    if let Some(home) = home_mut(state) {
        if home.image_request == Some(request_id) {
            home.image_request = None;
        }
    }
    UpdateResult::none()
}

pub fn handle_analyze_requested(state: &mut AppState) -> UpdateResult {
    let request_id = state.next_request_id();
    let Some(home) = home_mut(state) else {
        return UpdateResult::none();
    };

    if home.pending.is_some() {
        debug!("Analyze already in flight, ignoring submit");
        return UpdateResult::none();
    }
    if !home.can_submit() {
        return UpdateResult::none();
    }
    let Some(image) = home.image.clone() else {
        return UpdateResult::none();
    };

    home.close_selects();
    home.error = None;

    let request = AnalyzeRequest {
        prompt: home.prompt.clone(),
        marketplace: home.selected_marketplace(),
        client: home.selected_client().to_string(),
        image,
    };
    home.pending = Some(PendingAnalyze {
        request_id,
        client: request.client.clone(),
        marketplace: request.marketplace,
        image: request.image.clone(),
    });
    UpdateResult::action(UpdateAction::Analyze {
        request_id,
        request: Box::new(request),
    })
}

pub fn handle_analyze_succeeded(
    state: &mut AppState,
    request_id: RequestId,
    response: AnalyzeResponse,
) -> UpdateResult {
    let Page::Home(home) = &mut state.page else {
        debug!("Discarding analyze result {} outside home", request_id);
        return UpdateResult::none();
    };
    let Some(sent) = home.pending.take_if(|p| p.request_id == request_id) else {
        debug!("Discarding stale analyze result {}", request_id);
        return UpdateResult::none();
    };

    info!(
        alerts = response.alerts.len(),
        marketplace = sent.marketplace.domain,
        "Analysis complete, opening preview"
    );
    let preview = PreviewState::new(response, sent.client, sent.marketplace, sent.image);
    state.page = Page::Preview(Box::new(preview));
    UpdateResult::none()
}

pub fn handle_analyze_failed(
    state: &mut AppState,
    request_id: RequestId,
    error: String,
) -> UpdateResult {
    match home_mut(state) {
        Some(home)
            if home
                .pending
                .as_ref()
                .is_some_and(|p| p.request_id == request_id) =>
        {
            warn!("Analyze failed: {}", error);
            home.pending = None;
            home.error = Some(error);
        }
        _ => debug!("Discarding stale analyze failure {}", request_id),
    }
    UpdateResult::none()
}

/// Strip the quoting and `file://` prefix terminals add to dropped paths.
fn normalize_dropped_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(trimmed);
    let path = unquoted.strip_prefix("file://").unwrap_or(unquoted);
    PathBuf::from(path.replace("\\ ", " "))
}
