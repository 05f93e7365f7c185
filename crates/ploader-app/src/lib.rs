//! ploader-app - Application state and orchestration for Product Loader
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! listing wizard: a single [`AppState`] model, the [`Message`] enum, the pure
//! [`handler::update`] function and the action dispatcher that runs backend
//! calls on tokio tasks. It also owns configuration loading and OS signals.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod select;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Page, RequestId};
