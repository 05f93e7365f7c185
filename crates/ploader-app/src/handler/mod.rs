//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per page
//! - `home`: Analyze step handlers
//! - `preview`: Edit/upload step handlers
//! - `navigation`: Page transitions and the settings page

pub(crate) mod home;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod preview;
pub(crate) mod update;


use std::path::PathBuf;

use ploader_api::{AnalyzeRequest, UploadRequest};

use crate::message::Message;
use crate::state::RequestId;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Read an image file and encode its preview
    LoadImage {
        request_id: RequestId,
        path: PathBuf,
        mime: &'static str,
    },

    /// POST the analyze form
    Analyze {
        request_id: RequestId,
        request: Box<AnalyzeRequest>,
    },

    /// POST the edited product
    Upload {
        request_id: RequestId,
        request: Box<UploadRequest>,
    },

    /// GET the client authorization statuses
    FetchClientStatus { request_id: RequestId },

    /// Open a URL in the system browser.
    ///
    /// Fire-and-forget OS call; failures are logged.
    OpenUrl { url: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
