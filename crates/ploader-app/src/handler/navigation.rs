//! Page transitions and the settings (client status) page

use ploader_core::{client_statuses_all_disconnected, ClientStatus};
use tracing::{debug, info, warn};

use crate::state::{AppState, HomeState, Page, Parked, RequestId, SettingsState};

use super::{UpdateAction, UpdateResult};

/// Warning shown when the status endpoint cannot be reached.
pub const STATUS_UNAVAILABLE: &str = "Impossibile recuperare lo stato dei clienti";

/// Return to the home form.
///
/// Preview and success bundles are discarded. Coming back from settings
/// restores a parked home form with its in-flight markers cleared, since their
/// completions were dropped while the form was parked.
pub fn handle_navigate_home(state: &mut AppState) -> UpdateResult {
    let previous = std::mem::take(&mut state.page);
    let home = match previous {
        Page::Home(home) => home,
        Page::Settings(SettingsState {
            parked: Some(Parked::Home(mut home)),
            ..
        }) => {
            home.pending = None;
            home.image_request = None;
            home
        }
        other => {
            debug!("Leaving {} page, starting a fresh form", other.name());
            HomeState::default()
        }
    };
    state.page = Page::Home(home);
    UpdateResult::none()
}

/// Show the settings page and fetch the client statuses once.
pub fn handle_navigate_settings(state: &mut AppState) -> UpdateResult {
    let parked = match std::mem::take(&mut state.page) {
        Page::Home(mut home) => {
            home.close_selects();
            Parked::Home(home)
        }
        Page::Preview(preview) => Parked::Preview(preview),
        Page::Success(success) => Parked::Success(success),
        settings @ Page::Settings(_) => {
            state.page = settings;
            return UpdateResult::none();
        }
    };

    let request_id = state.next_request_id();

    state.page = Page::Settings(SettingsState {
        statuses: None,
        warning: None,
        pending: Some(request_id),
        parked: Some(parked),
    });
    UpdateResult::action(UpdateAction::FetchClientStatus { request_id })
}

pub fn handle_client_status_loaded(
    state: &mut AppState,
    request_id: RequestId,
    statuses: Vec<ClientStatus>,
) -> UpdateResult {
    match &mut state.page {
        Page::Settings(settings) if settings.pending == Some(request_id) => {
            info!("Loaded status for {} clients", statuses.len());
            settings.pending = None;
            settings.statuses = Some(statuses);
            settings.warning = None;
        }
        _ => debug!("Discarding stale client status {}", request_id),
    }
    UpdateResult::none()
}

pub fn handle_client_status_failed(
    state: &mut AppState,
    request_id: RequestId,
    error: String,
) -> UpdateResult {
    match &mut state.page {
        Page::Settings(settings) if settings.pending == Some(request_id) => {
            warn!("Failed to fetch client status: {}", error);
            settings.pending = None;
            settings.statuses = Some(client_statuses_all_disconnected());
            settings.warning = Some(STATUS_UNAVAILABLE.to_string());
        }
        _ => debug!("Discarding stale client status failure {}", request_id),
    }
    UpdateResult::none()
}

pub fn handle_open_listing(state: &mut AppState) -> UpdateResult {
    match &state.page {
        Page::Success(success) => UpdateResult::action(UpdateAction::OpenUrl {
            url: success.listing_url(),
        }),
        _ => UpdateResult::none(),
    }
}
