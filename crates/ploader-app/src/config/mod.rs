//! Configuration file parsing for Product Loader
//!
//! Supports `<config_dir>/product-loader/config.toml` (or an explicit path
//! given on the command line) with `[api]` and `[ui]` tables.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, load_settings_from};
pub use types::*;
