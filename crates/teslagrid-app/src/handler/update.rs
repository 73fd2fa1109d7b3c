//! Main update function - handles state transitions (TEA pattern)

use teslagrid_core::fixtures::{FORECAST, STATIONS, WORK_ORDERS};
use tracing::{debug, info};

use crate::message::Message;
use crate::navigation::{Route, NAV_ENTRIES};
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(path) => {
            state.navigate(&path);
            debug!("Navigated to {} ({:?})", state.path, state.route());
            UpdateResult::none()
        }

        Message::NavigateNext => {
            let count = NAV_ENTRIES.len();
            let next = match state.active_nav() {
                Some(i) => (i + 1) % count,
                None => 0,
            };
            UpdateResult::message(Message::Navigate(NAV_ENTRIES[next].path.to_string()))
        }

        Message::NavigatePrevious => {
            let count = NAV_ENTRIES.len();
            let prev = match state.active_nav() {
                Some(i) => (i + count - 1) % count,
                None => count - 1,
            };
            UpdateResult::message(Message::Navigate(NAV_ENTRIES[prev].path.to_string()))
        }

        // ─────────────────────────────────────────────────────────
        // Network health
        // ─────────────────────────────────────────────────────────
        Message::ToggleViewMode => {
            state.network.view_mode = state.network.view_mode.toggled();
            debug!("Network view mode: {:?}", state.network.view_mode);
            UpdateResult::none()
        }

        Message::SetViewMode(mode) => {
            state.network.view_mode = mode;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            match state.route() {
                Route::Network => {
                    state.network.selected = step_down(state.network.selected, STATIONS.len())
                }
                Route::WorkOrders => {
                    state.queue.selected = step_down(state.queue.selected, WORK_ORDERS.len())
                }
                _ => {}
            }
            UpdateResult::none()
        }

        Message::SelectPrevious => {
            match state.route() {
                Route::Network => state.network.selected = state.network.selected.saturating_sub(1),
                Route::WorkOrders => state.queue.selected = state.queue.selected.saturating_sub(1),
                _ => {}
            }
            UpdateResult::none()
        }

        Message::AssignSelected => {
            if state.route() == Route::WorkOrders {
                if let Some(order) = WORK_ORDERS.get(state.queue.selected) {
                    match order.technician {
                        Some(tech) => debug!("{} is already assigned to {}", order.id, tech),
                        None => info!(
                            "Assign requested for {}; assignment is not available in demo mode",
                            order.id
                        ),
                    }
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Forecast
        // ─────────────────────────────────────────────────────────
        Message::HoverNext => {
            state.forecast.hover_next(FORECAST.len());
            UpdateResult::none()
        }

        Message::HoverPrevious => {
            state.forecast.hover_previous(FORECAST.len());
            UpdateResult::none()
        }

        Message::ClearHover => {
            state.forecast.clear();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Settings
        // ─────────────────────────────────────────────────────────
        Message::ToggleIcons => {
            state.settings.ui.icons = state.settings.ui.icons.toggled();
            info!("Icon mode set to {}", state.settings.ui.icons);
            if state.config_path.is_some() {
                UpdateResult::action(UpdateAction::PersistSettings(state.settings.clone()))
            } else {
                UpdateResult::none()
            }
        }
    }
}

/// Move a selection down by one, clamped to the last item
fn step_down(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1).min(len - 1)
    }
}
