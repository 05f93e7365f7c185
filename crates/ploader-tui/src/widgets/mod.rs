//! Widget components for the TUI

pub mod alert_banner;
pub mod header;
pub mod home;
pub mod image_upload;
pub mod key_hints;
pub mod preview;
pub mod select;
pub mod settings_view;
pub mod spinner;
pub mod success;
pub mod text_input;

pub use alert_banner::AlertBanner;
pub use header::{MainHeader, NavTarget};
pub use home::HomeView;
pub use image_upload::ImageUpload;
pub use key_hints::KeyHints;
pub use preview::PreviewView;
pub use select::{SelectField, SelectPopup};
pub use settings_view::SettingsView;
pub use spinner::Spinner;
pub use success::SuccessView;
pub use text_input::TextInput;
