//! Navigation paths and the dashboard's fixed navigation list
//!
//! The shell marks a nav entry active by prefix-matching the current path
//! against [`NAV_ENTRIES`]. Which view fills the content area is resolved
//! separately by [`Route::from_path`], so a path can resolve to a view while
//! no entry is active (and the other way round).

use serde::Serialize;

/// Path of the landing view (outside the dashboard shell)
pub const LANDING_PATH: &str = "/";

/// Dashboard root; redirects to the first nav entry
pub const DASHBOARD_PATH: &str = "/dashboard";

pub const NETWORK_PATH: &str = "/dashboard/network";
pub const WORK_ORDERS_PATH: &str = "/dashboard/work-orders";
pub const FORECAST_PATH: &str = "/dashboard/forecast";

/// Icon slot for a navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Activity,
    Zap,
    BarChart,
}

/// A link in the dashboard sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

/// Sidebar links, in display order
pub const NAV_ENTRIES: [NavEntry; 3] = [
    NavEntry {
        label: "Network Health",
        path: NETWORK_PATH,
        icon: NavIcon::Activity,
    },
    NavEntry {
        label: "Work Orders",
        path: WORK_ORDERS_PATH,
        icon: NavIcon::Zap,
    },
    NavEntry {
        label: "Forecast",
        path: FORECAST_PATH,
        icon: NavIcon::BarChart,
    },
];

/// Index of the first nav entry whose target is a prefix of `path`.
pub fn active_entry(path: &str) -> Option<usize> {
    NAV_ENTRIES
        .iter()
        .position(|entry| path.starts_with(entry.path))
}

/// Normalize a user-supplied path.
///
/// Empty input becomes `/`, a trailing slash is dropped, and the dashboard
/// root redirects to the network view.
pub fn canonicalize(path: &str) -> String {
    let trimmed = path.trim();
    let trimmed = if trimmed.len() > 1 {
        trimmed.trim_end_matches('/')
    } else {
        trimmed
    };

    match trimmed {
        "" | LANDING_PATH => LANDING_PATH.to_string(),
        DASHBOARD_PATH => NETWORK_PATH.to_string(),
        p if p.starts_with('/') => p.to_string(),
        p => format!("/{}", p),
    }
}

/// View that fills the screen for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Landing,
    Network,
    WorkOrders,
    Forecast,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match canonicalize(path).as_str() {
            LANDING_PATH => Route::Landing,
            NETWORK_PATH => Route::Network,
            WORK_ORDERS_PATH => Route::WorkOrders,
            FORECAST_PATH => Route::Forecast,
            _ => Route::NotFound,
        }
    }

    /// Whether the route renders inside the dashboard shell
    pub fn in_shell(&self) -> bool {
        !matches!(self, Route::Landing)
    }
}
