//! Message types for the application (TEA pattern)

use ploader_core::{AnalyzeResponse, CapturedImage, ClientStatus, ProductEdit, UploadResponse};

use crate::input_key::InputKey;
use crate::select::SelectAction;
use crate::state::{CategoryChoice, RequestId};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste from terminal (a dropped file path or plain text)
    Paste(String),

    /// Tick event for spinner animation
    Tick,

    /// Quit immediately
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    NavigateHome,
    NavigateSettings,

    // ─────────────────────────────────────────────────────────
    // Home (analyze step)
    // ─────────────────────────────────────────────────────────
    HomeFocusNext,
    HomeFocusPrev,
    /// Navigate the focused client/marketplace select
    HomeSelect(SelectAction),
    HomePromptChanged {
        text: String,
    },
    HomeImagePathChanged {
        text: String,
    },
    /// Load the path typed into the image field
    HomeImageSubmitPath,
    /// A path was dropped (pasted) onto the form
    HomeImageDropped {
        path: String,
    },
    HomeImageRemoved,
    /// Image file read and encoded
    ImageLoaded {
        request_id: RequestId,
        image: CapturedImage,
    },
    ImageLoadFailed {
        request_id: RequestId,
        error: String,
    },
    AnalyzeRequested,
    AnalyzeSucceeded {
        request_id: RequestId,
        response: AnalyzeResponse,
    },
    AnalyzeFailed {
        request_id: RequestId,
        error: String,
    },
    /// Dismiss the inline error of the current step
    DismissError,

    // ─────────────────────────────────────────────────────────
    // Preview (edit step)
    // ─────────────────────────────────────────────────────────
    PreviewFocusNext,
    PreviewFocusPrev,
    DismissAlert {
        index: usize,
    },
    EditProduct(ProductEdit),
    PriceInputChanged {
        text: String,
    },
    ChooseCategory(CategoryChoice),
    UploadRequested,
    UploadCompleted {
        request_id: RequestId,
        response: UploadResponse,
    },
    UploadFailed {
        request_id: RequestId,
        error: String,
    },
    BackToHome,

    // ─────────────────────────────────────────────────────────
    // Success
    // ─────────────────────────────────────────────────────────
    ResetFlow,
    /// Open the listing link in the system browser
    OpenListing,

    // ─────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────
    ClientStatusLoaded {
        request_id: RequestId,
        statuses: Vec<ClientStatus>,
    },
    ClientStatusFailed {
        request_id: RequestId,
        error: String,
    },
}
