//! Settings file loading and initialization

use std::path::{Path, PathBuf};

use ploader_core::prelude::*;

use super::types::Settings;

const APP_DIR: &str = "product-loader";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# Product Loader Configuration

[api]
base_url = "http://localhost:8080"   # backend serving /api/analyze, /api/upload, /api/clienti/status
timeout_secs = 0                     # 0 = no timeout

[ui]
show_flags = true                    # flag glyphs next to marketplaces
"#;

/// `<config_dir>/product-loader/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `explicit` or the default location.
///
/// Returns default settings if no file exists or it can't be parsed.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    match explicit.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config directory available, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from a specific file.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the default config file at `config_path`, creating parent dirs.
///
/// An existing file is left untouched. Returns `true` when a file was written.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        info!("Config file already exists at {:?}", config_path);
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}
