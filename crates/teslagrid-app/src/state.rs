//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::navigation::{self, Route};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Rendering mode of the network health view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    List,
    Map,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::List => ViewMode::Map,
            ViewMode::Map => ViewMode::List,
        }
    }
}

/// Network health view state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkViewState {
    pub view_mode: ViewMode,
    /// Highlighted table row
    pub selected: usize,
}

/// Work-order queue view state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueViewState {
    /// Highlighted card
    pub selected: usize,
}

/// Forecast view state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForecastViewState {
    /// Sample under the chart cursor; drives the tooltip
    pub hovered: Option<usize>,
}

impl ForecastViewState {
    /// Move the cursor right, starting at the first sample
    pub fn hover_next(&mut self, sample_count: usize) {
        if sample_count == 0 {
            self.hovered = None;
            return;
        }
        self.hovered = Some(match self.hovered {
            None => 0,
            Some(i) => (i + 1).min(sample_count - 1),
        });
    }

    /// Move the cursor left, starting at the last sample
    pub fn hover_previous(&mut self, sample_count: usize) {
        if sample_count == 0 {
            self.hovered = None;
            return;
        }
        self.hovered = Some(match self.hovered {
            None => sample_count - 1,
            Some(i) => i.saturating_sub(1),
        });
    }

    pub fn clear(&mut self) {
        self.hovered = None;
    }
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,

    /// Current navigation path (always canonical)
    pub path: String,

    pub network: NetworkViewState,
    pub queue: QueueViewState,
    pub forecast: ForecastViewState,

    pub settings: Settings,

    /// Where settings are persisted; `None` disables saving
    pub config_path: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), None)
    }

    pub fn with_settings(settings: Settings, config_path: Option<PathBuf>) -> Self {
        let path = navigation::canonicalize(&settings.ui.start_path);
        let network = NetworkViewState {
            view_mode: settings.network.default_view,
            selected: 0,
        };

        Self {
            phase: AppPhase::Running,
            path,
            network,
            queue: QueueViewState::default(),
            forecast: ForecastViewState::default(),
            settings,
            config_path,
        }
    }

    /// View resolved from the current path
    pub fn route(&self) -> Route {
        Route::from_path(&self.path)
    }

    /// Index of the highlighted sidebar entry
    pub fn active_nav(&self) -> Option<usize> {
        navigation::active_entry(&self.path)
    }

    pub fn navigate(&mut self, path: &str) {
        self.path = navigation::canonicalize(path);
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
