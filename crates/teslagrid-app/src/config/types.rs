//! Configuration types for TeslaGrid
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};

use crate::navigation::LANDING_PATH;
use crate::state::ViewMode;

/// Global application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub network: NetworkSettings,
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use safe Unicode characters (default, works in all
/// terminals) or Nerd Font glyphs (requires a Nerd Font installed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl IconMode {
    pub fn toggled(self) -> Self {
        match self {
            IconMode::Unicode => IconMode::NerdFonts,
            IconMode::NerdFonts => IconMode::Unicode,
        }
    }
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon set used by the sidebar, badges and indicators
    #[serde(default)]
    pub icons: IconMode,

    /// Path opened at startup (e.g. "/" or "/dashboard/forecast")
    #[serde(default = "default_start_path")]
    pub start_path: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            start_path: default_start_path(),
        }
    }
}

fn default_start_path() -> String {
    LANDING_PATH.to_string()
}

/// Network health view settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NetworkSettings {
    /// Rendering mode the network view opens in
    #[serde(default)]
    pub default_view: ViewMode,
}
