//! teslagrid-app - Application state and orchestration for TeslaGrid
//!
//! This crate implements the TEA (The Elm Architecture) pattern: key input
//! becomes a [`Message`], [`handler::update`] applies it to [`AppState`],
//! and [`view_model::ScreenModel`] projects the state for rendering.
//! Navigation, configuration loading and signal handling live here too.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod process;
pub mod signals;
pub mod state;
pub mod view_model;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use navigation::Route;
pub use state::{AppState, ViewMode};
pub use view_model::ScreenModel;
