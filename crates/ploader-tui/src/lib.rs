//! ploader-tui - Terminal UI for Product Loader
//!
//! This crate provides the ratatui-based terminal interface: it owns the
//! terminal, polls crossterm events into [`ploader_app::Message`]s, runs them
//! through the TEA loop and renders [`ploader_app::AppState`] each frame.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
