//! Configuration types for Product Loader

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Backend URL used when neither the config file nor the CLI sets one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL the `/api/...` paths are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds; 0 disables the timeout
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: 0,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Render flag glyphs next to marketplaces
    #[serde(default = "default_true")]
    pub show_flags: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_flags: true }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "http://localhost:8080");
        assert_eq!(settings.api.timeout(), None);
        assert!(settings.ui.show_flags);
    }

    #[test]
    fn test_partial_tables_keep_defaults() {
        let settings: Settings = toml::from_str("[api]\ntimeout_secs = 30\n").unwrap();
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.api.timeout(), Some(Duration::from_secs(30)));
        assert!(settings.ui.show_flags);
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let settings = Settings {
            api: ApiSettings {
                base_url: "https://loader.example.com".to_string(),
                timeout_secs: 5,
            },
            ui: UiSettings { show_flags: false },
        };
        let text = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
