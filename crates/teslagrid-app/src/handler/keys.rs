//! Key event handlers for each route

use crate::input_key::InputKey;
use crate::message::Message;
use crate::navigation::{Route, DASHBOARD_PATH, LANDING_PATH, NAV_ENTRIES};
use crate::state::{AppState, ViewMode};

/// Convert key events to messages based on the current route
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(key) {
        return Some(msg);
    }

    match state.route() {
        Route::Landing => handle_key_landing(key),
        Route::Network => handle_key_network(key),
        Route::WorkOrders => handle_key_work_orders(key),
        Route::Forecast => handle_key_forecast(state, key),
        Route::NotFound => handle_key_shell(key),
    }
}

/// Keys that behave the same on every route
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            NAV_ENTRIES
                .get(index)
                .map(|entry| Message::Navigate(entry.path.to_string()))
        }
        InputKey::Tab => Some(Message::NavigateNext),
        InputKey::BackTab => Some(Message::NavigatePrevious),
        InputKey::Char('i') => Some(Message::ToggleIcons),
        _ => None,
    }
}

/// Keys shared by every view inside the dashboard shell
fn handle_key_shell(key: InputKey) -> Option<Message> {
    match key {
        // Both the Esc shortcut and the sidebar "Settings" link lead home
        InputKey::Esc | InputKey::Char('s') => Some(Message::Navigate(LANDING_PATH.to_string())),
        _ => None,
    }
}

fn handle_key_landing(key: InputKey) -> Option<Message> {
    match key {
        // "Launch Live Demo"
        InputKey::Enter => Some(Message::Navigate(DASHBOARD_PATH.to_string())),
        _ => None,
    }
}

fn handle_key_network(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('v') => Some(Message::ToggleViewMode),
        InputKey::Char('l') => Some(Message::SetViewMode(ViewMode::List)),
        InputKey::Char('m') => Some(Message::SetViewMode(ViewMode::Map)),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        _ => handle_key_shell(key),
    }
}

fn handle_key_work_orders(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Char('a') | InputKey::Enter => Some(Message::AssignSelected),
        _ => handle_key_shell(key),
    }
}

fn handle_key_forecast(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left => Some(Message::HoverPrevious),
        InputKey::Right => Some(Message::HoverNext),
        // First Esc dismisses the tooltip, the next one leaves the dashboard
        InputKey::Esc if state.forecast.hovered.is_some() => Some(Message::ClearHover),
        _ => handle_key_shell(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{FORECAST_PATH, NETWORK_PATH, WORK_ORDERS_PATH};

    fn state_at(path: &str) -> AppState {
        let mut state = AppState::new();
        state.navigate(path);
        state
    }

    #[test]
    fn test_number_keys_jump_to_nav_entries() {
        let state = AppState::new();
        assert_eq!(
            handle_key(&state, InputKey::Char('1')),
            Some(Message::Navigate(NETWORK_PATH.to_string()))
        );
        assert_eq!(
            handle_key(&state, InputKey::Char('2')),
            Some(Message::Navigate(WORK_ORDERS_PATH.to_string()))
        );
        assert_eq!(
            handle_key(&state, InputKey::Char('3')),
            Some(Message::Navigate(FORECAST_PATH.to_string()))
        );
        assert_eq!(handle_key(&state, InputKey::Char('4')), None);
    }

    #[test]
    fn test_quit_keys_work_everywhere() {
        for path in ["/", NETWORK_PATH, FORECAST_PATH, "/nowhere"] {
            let state = state_at(path);
            assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
            assert_eq!(
                handle_key(&state, InputKey::CharCtrl('c')),
                Some(Message::Quit)
            );
        }
    }

    #[test]
    fn test_enter_on_landing_launches_demo() {
        let state = AppState::new();
        assert_eq!(
            handle_key(&state, InputKey::Enter),
            Some(Message::Navigate("/dashboard".to_string()))
        );
    }

    #[test]
    fn test_esc_on_landing_does_nothing() {
        let state = AppState::new();
        assert_eq!(handle_key(&state, InputKey::Esc), None);
    }

    #[test]
    fn test_network_view_mode_keys() {
        let state = state_at(NETWORK_PATH);
        assert_eq!(
            handle_key(&state, InputKey::Char('v')),
            Some(Message::ToggleViewMode)
        );
        assert_eq!(
            handle_key(&state, InputKey::Char('m')),
            Some(Message::SetViewMode(ViewMode::Map))
        );
        assert_eq!(
            handle_key(&state, InputKey::Char('l')),
            Some(Message::SetViewMode(ViewMode::List))
        );
    }

    #[test]
    fn test_view_mode_keys_ignored_outside_network() {
        let state = state_at(WORK_ORDERS_PATH);
        assert_eq!(handle_key(&state, InputKey::Char('m')), None);
    }

    #[test]
    fn test_work_orders_assign_keys() {
        let state = state_at(WORK_ORDERS_PATH);
        assert_eq!(
            handle_key(&state, InputKey::Char('a')),
            Some(Message::AssignSelected)
        );
        assert_eq!(
            handle_key(&state, InputKey::Enter),
            Some(Message::AssignSelected)
        );
        assert_eq!(
            handle_key(&state, InputKey::Down),
            Some(Message::SelectNext)
        );
    }

    #[test]
    fn test_forecast_esc_clears_hover_first() {
        let mut state = state_at(FORECAST_PATH);
        state.forecast.hovered = Some(3);
        assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::ClearHover));

        state.forecast.hovered = None;
        assert_eq!(
            handle_key(&state, InputKey::Esc),
            Some(Message::Navigate("/".to_string()))
        );
    }

    #[test]
    fn test_forecast_arrow_keys_move_hover() {
        let state = state_at(FORECAST_PATH);
        assert_eq!(
            handle_key(&state, InputKey::Right),
            Some(Message::HoverNext)
        );
        assert_eq!(
            handle_key(&state, InputKey::Left),
            Some(Message::HoverPrevious)
        );
    }

    #[test]
    fn test_settings_link_goes_home_from_not_found() {
        let state = state_at("/case-study");
        assert_eq!(
            handle_key(&state, InputKey::Char('s')),
            Some(Message::Navigate("/".to_string()))
        );
    }

    #[test]
    fn test_tab_cycles_nav() {
        let state = AppState::new();
        assert_eq!(handle_key(&state, InputKey::Tab), Some(Message::NavigateNext));
        assert_eq!(
            handle_key(&state, InputKey::BackTab),
            Some(Message::NavigatePrevious)
        );
    }
}
