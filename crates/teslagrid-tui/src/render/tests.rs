//! Full-screen render tests
//!
//! Each route is drawn through `view` into a `TestBackend` and checked for
//! the content that identifies it.

use super::view;
use crate::test_utils::{state_at, TestTerminal};
use teslagrid_app::config::IconMode;
use teslagrid_app::view_model::MAP_PLACEHOLDER;
use teslagrid_app::{AppState, Message, ViewMode};

const ACTIVE_MARKER: &str = "\u{258e}";

fn render_screen(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

fn active_marker_rows(term: &TestTerminal) -> Vec<u16> {
    (0..term.area().height)
        .filter(|&y| term.line_contains(y, ACTIVE_MARKER))
        .collect()
}

// ===========================================================================
// Landing
// ===========================================================================

#[test]
fn test_landing_renders_without_shell() {
    let term = render_screen(&AppState::new());
    assert!(term.buffer_contains("Launch Live Demo"));
    assert!(!term.buffer_contains("Network Online"));
    assert!(active_marker_rows(&term).is_empty());
}

// ===========================================================================
// Shell
// ===========================================================================

#[test]
fn test_each_route_renders_its_view_inside_the_shell() {
    let cases = [
        ("/dashboard/network", "Network Health", "STATION"),
        ("/dashboard/work-orders", "Work Order Queue", "Impact Score"),
        ("/dashboard/forecast", "Demand Forecast", "Regional Load vs Capacity"),
    ];

    for (path, title, body) in cases {
        let term = render_screen(&state_at(path));
        assert!(term.buffer_contains("Network Online"), "{path}: header");
        assert!(term.buffer_contains("Settings"), "{path}: sidebar");
        assert!(term.buffer_contains(title), "{path}: title");
        assert!(term.buffer_contains(body), "{path}: body");
        assert_eq!(active_marker_rows(&term).len(), 1, "{path}: one active entry");
    }
}

#[test]
fn test_active_entry_follows_route() {
    let term = render_screen(&state_at("/dashboard/work-orders"));
    let rows = active_marker_rows(&term);
    assert_eq!(rows.len(), 1);
    assert!(term.line_contains(rows[0], "Work Orders"));
}

#[test]
fn test_dashboard_root_shows_network_health() {
    let mut state = AppState::new();
    teslagrid_app::process::process_message(&mut state, Message::Navigate("/dashboard".into()));

    let term = render_screen(&state);
    let rows = active_marker_rows(&term);
    assert_eq!(rows.len(), 1);
    assert!(term.line_contains(rows[0], "Network Health"));
    assert!(term.buffer_contains("STATION"));
}

#[test]
fn test_unknown_path_keeps_shell_without_active_entry() {
    let term = render_screen(&state_at("/case-study"));
    assert!(term.buffer_contains("Network Online"));
    assert!(term.buffer_contains("404"));
    assert!(term.buffer_contains("/case-study"));
    assert!(active_marker_rows(&term).is_empty());
}

// ===========================================================================
// Network health
// ===========================================================================

#[test]
fn test_map_mode_replaces_table_with_placeholder() {
    let mut state = state_at("/dashboard/network");
    state.network.view_mode = ViewMode::Map;

    let term = render_screen(&state);
    assert!(term.buffer_contains(MAP_PLACEHOLDER));
    assert!(!term.buffer_contains("STATION"));
    assert!(!term.buffer_contains("Daly City"));
}

#[test]
fn test_list_map_list_round_trip_is_identical() {
    let mut state = state_at("/dashboard/network");
    let before = render_screen(&state).buffer().clone();

    teslagrid_app::process::process_message(&mut state, Message::ToggleViewMode);
    let map = render_screen(&state).buffer().clone();
    assert_ne!(before, map);

    teslagrid_app::process::process_message(&mut state, Message::ToggleViewMode);
    let after = render_screen(&state).buffer().clone();
    assert_eq!(before, after);
}

// ===========================================================================
// Forecast
// ===========================================================================

#[test]
fn test_tooltip_only_while_hovering() {
    let mut state = state_at("/dashboard/forecast");
    let term = render_screen(&state);
    assert!(!term.buffer_contains("Demand: "));

    state.forecast.hovered = Some(4);
    let term = render_screen(&state);
    assert!(term.buffer_contains("Demand: 4600"));
    assert!(term.buffer_contains("Capacity: 5000"));
}

// ===========================================================================
// Settings
// ===========================================================================

#[test]
fn test_icon_mode_changes_sidebar_glyphs() {
    let mut state = state_at("/dashboard/network");
    let unicode = render_screen(&state);
    assert!(unicode.buffer_contains("~ Network Health"));

    state.settings.ui.icons = IconMode::NerdFonts;
    let nerd = render_screen(&state);
    assert!(nerd.buffer_contains("\u{f0f1} Network Health"));
}

#[test]
fn test_compact_terminal_renders_every_route() {
    for path in [
        "/",
        "/dashboard/network",
        "/dashboard/work-orders",
        "/dashboard/forecast",
        "/nowhere",
    ] {
        let state = state_at(path);
        let mut term = TestTerminal::compact();
        term.draw_with(|frame| view(frame, &state));

        let mut tiny = TestTerminal::with_size(12, 5);
        tiny.draw_with(|frame| view(frame, &state));
    }
}
