//! Message processing shared by the TUI and headless runners
//!
//! Drives the TEA update loop until no follow-up message remains and
//! performs the side effects the handlers request.

use teslagrid_core::prelude::*;

use crate::config;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(state, action);
        }

        msg = result.message;
    }
}

/// Execute an action requested by the update function
fn handle_action(state: &AppState, action: UpdateAction) {
    match action {
        UpdateAction::PersistSettings(settings) => {
            let Some(path) = state.config_path.as_deref() else {
                return;
            };
            // A failed save keeps the in-memory choice for this run
            if let Err(e) = config::save_settings(path, &settings) {
                warn!("Failed to persist settings: {}", e);
            }
        }
    }
}
