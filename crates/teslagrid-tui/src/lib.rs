//! teslagrid-tui - Terminal UI for TeslaGrid
//!
//! Renders the landing view and the dashboard shell with ratatui, polls
//! crossterm for input and feeds it through the update loop in
//! `teslagrid-app`.

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
