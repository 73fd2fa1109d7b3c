//! TeslaGrid Library
//!
//! A terminal reliability cockpit for a charging network: the interactive
//! TUI lives in `teslagrid-tui`, this crate adds the headless NDJSON mode
//! and the binary entry point.

pub mod headless;

// Re-export main entry points
pub use headless::run_headless;
pub use teslagrid_tui::run;
