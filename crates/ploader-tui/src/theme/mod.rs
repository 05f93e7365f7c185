//! Centralized theme for the Product Loader TUI.
//!
//! - `palette` holds raw color constants
//! - `styles` holds semantic style builder functions

pub mod palette;
pub mod styles;
