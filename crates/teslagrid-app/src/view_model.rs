//! Render-ready projections of the application state
//!
//! Widgets and headless output both read from these types, so rank numbers,
//! indicator labels and chart points are derived in exactly one place.

use serde::Serialize;
use teslagrid_core::fixtures::{CAPACITY_THRESHOLD, FORECAST, STATIONS, WORK_ORDERS};
use teslagrid_core::{
    format_count, AlertLevel, ForecastSample, Station, StationStatus, Trend, WorkOrder,
};

use crate::navigation::{NavIcon, Route, NAV_ENTRIES};
use crate::state::{AppState, ViewMode};

/// Static text shown in place of the station map
pub const MAP_PLACEHOLDER: &str = "Map view is not available in demo mode.";

/// Y-axis values are rounded up to this step
const Y_AXIS_STEP: u32 = 1000;

// ─────────────────────────────────────────────────────────
// Network health
// ─────────────────────────────────────────────────────────

/// One row of the station table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationRow {
    pub id: &'static str,
    pub name: &'static str,
    pub region: &'static str,
    pub status: StationStatus,
    pub status_label: &'static str,
    pub utilization: u8,
    /// Utilization bar uses the alternate fill
    pub saturated: bool,
    pub trend: Trend,
    pub uptime_text: String,
    pub alert: AlertLevel,
}

impl StationRow {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id,
            name: station.name,
            region: station.region,
            status: station.status,
            status_label: station.status.label(),
            utilization: station.utilization.min(100),
            saturated: station.is_saturated(),
            trend: station.trend,
            uptime_text: format!("{:.1}%", station.uptime),
            alert: station.alert_level(),
        }
    }

    /// Indicator text for the alerts column
    pub fn alert_text(&self) -> String {
        match self.alert {
            AlertLevel::Healthy => "Healthy".to_string(),
            AlertLevel::Critical(n) => format!("{} Critical", n),
        }
    }
}

pub fn station_rows(stations: &[Station]) -> Vec<StationRow> {
    stations.iter().map(StationRow::from_station).collect()
}

// ─────────────────────────────────────────────────────────
// Work orders
// ─────────────────────────────────────────────────────────

/// What the trailing slot of a queue card shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum QueueAction {
    /// Assigned technician pill
    Technician(&'static str),
    /// "Assign" affordance; does nothing when triggered
    Assign,
}

/// One card of the work-order queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueEntry {
    /// 1-based position in the input sequence
    pub rank: usize,
    pub id: &'static str,
    pub station: &'static str,
    pub issue: &'static str,
    pub impact_score: u32,
    pub sla_breach_in: &'static str,
    pub minutes_saved_text: String,
    pub action: QueueAction,
}

impl QueueEntry {
    pub fn from_order(index: usize, order: &WorkOrder) -> Self {
        let action = match order.technician {
            Some(name) => QueueAction::Technician(name),
            None => QueueAction::Assign,
        };

        Self {
            rank: index + 1,
            id: order.id,
            station: order.station,
            issue: order.issue,
            impact_score: order.impact_score,
            sla_breach_in: order.sla_breach_in,
            minutes_saved_text: format_count(order.minutes_saved),
            action,
        }
    }
}

/// Entries in input order; the order is the ranking
pub fn queue_entries(orders: &[WorkOrder]) -> Vec<QueueEntry> {
    orders
        .iter()
        .enumerate()
        .map(|(i, order)| QueueEntry::from_order(i, order))
        .collect()
}

// ─────────────────────────────────────────────────────────
// Forecast
// ─────────────────────────────────────────────────────────

/// One plotted sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: &'static str,
    pub demand: u32,
    pub capacity: u32,
}

/// Tooltip content for the hovered sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub index: usize,
    pub label: &'static str,
    pub demand: u32,
    pub capacity: u32,
}

impl Tooltip {
    pub fn lines(&self) -> [String; 3] {
        [
            self.label.to_string(),
            format!("Demand: {}", self.demand),
            format!("Capacity: {}", self.capacity),
        ]
    }
}

/// Everything needed to draw the demand/capacity area chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartModel {
    /// Exactly one point per input sample
    pub points: Vec<ChartPoint>,
    /// Value of the dashed horizontal reference line
    pub reference_line: u32,
    /// Top of the y axis
    pub y_max: u32,
}

impl ChartModel {
    pub fn from_samples(samples: &[ForecastSample], reference_line: u32) -> Self {
        let points: Vec<ChartPoint> = samples
            .iter()
            .map(|s| ChartPoint {
                label: s.day,
                demand: s.demand,
                capacity: s.capacity,
            })
            .collect();

        let peak = points
            .iter()
            .map(|p| p.demand.max(p.capacity))
            .max()
            .unwrap_or(0)
            .max(reference_line);

        Self {
            points,
            reference_line,
            y_max: round_up(peak, Y_AXIS_STEP),
        }
    }

    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        self.points.get(index).map(|p| Tooltip {
            index,
            label: p.label,
            demand: p.demand,
            capacity: p.capacity,
        })
    }

    /// Evenly spaced y-axis tick values from 0 to `y_max`
    pub fn y_ticks(&self, count: usize) -> Vec<u32> {
        if count < 2 {
            return vec![self.y_max];
        }
        let step = self.y_max as f64 / (count - 1) as f64;
        (0..count).map(|i| (step * i as f64).round() as u32).collect()
    }
}

fn round_up(value: u32, step: u32) -> u32 {
    if value == 0 {
        return step;
    }
    value.div_ceil(step) * step
}

// ─────────────────────────────────────────────────────────
// Screen
// ─────────────────────────────────────────────────────────

/// A sidebar link with its highlight state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
    pub active: bool,
}

/// Content of the shell's main area
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewModel {
    Landing,
    Network {
        view_mode: ViewMode,
        station_count: usize,
        selected: usize,
        /// Present in list mode only
        #[serde(skip_serializing_if = "Option::is_none")]
        rows: Option<Vec<StationRow>>,
        /// Present in map mode only
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<&'static str>,
    },
    WorkOrders {
        selected: usize,
        entries: Vec<QueueEntry>,
    },
    Forecast {
        chart: ChartModel,
        #[serde(skip_serializing_if = "Option::is_none")]
        tooltip: Option<Tooltip>,
    },
    NotFound {
        path: String,
    },
}

/// Complete description of one rendered frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenModel {
    pub path: String,
    pub route: Route,
    pub nav: Vec<NavItem>,
    pub content: ViewModel,
}

impl ScreenModel {
    pub fn from_state(state: &AppState) -> Self {
        let active = state.active_nav();
        let nav = NAV_ENTRIES
            .iter()
            .enumerate()
            .map(|(i, entry)| NavItem {
                label: entry.label,
                path: entry.path,
                icon: entry.icon,
                active: active == Some(i),
            })
            .collect();

        let route = state.route();
        let content = match route {
            Route::Landing => ViewModel::Landing,
            Route::Network => network_view(state),
            Route::WorkOrders => ViewModel::WorkOrders {
                selected: state.queue.selected,
                entries: queue_entries(&WORK_ORDERS),
            },
            Route::Forecast => {
                let chart = ChartModel::from_samples(&FORECAST, CAPACITY_THRESHOLD);
                let tooltip = state.forecast.hovered.and_then(|i| chart.tooltip(i));
                ViewModel::Forecast { chart, tooltip }
            }
            Route::NotFound => ViewModel::NotFound {
                path: state.path.clone(),
            },
        };

        Self {
            path: state.path.clone(),
            route,
            nav,
            content,
        }
    }
}

fn network_view(state: &AppState) -> ViewModel {
    let mode = state.network.view_mode;
    let (rows, placeholder) = match mode {
        ViewMode::List => (Some(station_rows(&STATIONS)), None),
        ViewMode::Map => (None, Some(MAP_PLACEHOLDER)),
    };

    ViewModel::Network {
        view_mode: mode,
        station_count: STATIONS.len(),
        selected: state.network.selected,
        rows,
        placeholder,
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
    fn test_alert_indicator_matches_count() {
        for row in station_rows(&STATIONS) {
            let text = row.alert_text();
            match row.alert {
                AlertLevel::Healthy => {
                    assert_eq!(text, "Healthy");
                    assert!(!text.contains("Critical"));
                }
                AlertLevel::Critical(n) => {
                    assert!(n > 0);
                    assert_eq!(text, format!("{} Critical", n));
                    assert!(!text.contains("Healthy"));
                }
            }
        }
    }

    #[test]
    fn test_every_row_has_a_status_label() {
        for row in station_rows(&STATIONS) {
            assert_eq!(row.status_label, row.status.label());
            assert!(!row.status_label.is_empty());
        }
    }

    #[test]
    fn test_saturation_flag_follows_threshold() {
        for (row, station) in station_rows(&STATIONS).iter().zip(STATIONS.iter()) {
            assert_eq!(row.saturated, station.utilization > 90);
        }
        // Fixtures include both sides of the threshold
        let rows = station_rows(&STATIONS);
        assert!(rows.iter().any(|r| r.saturated));
        assert!(rows.iter().any(|r| !r.saturated));
    }

    #[test]
    fn test_uptime_uses_one_decimal() {
        let rows = station_rows(&STATIONS);
        assert!(rows.iter().all(|r| r.uptime_text.ends_with('%')));
        assert_eq!(rows[0].uptime_text, format!("{:.1}%", STATIONS[0].uptime));
    }

    #[test]
    fn test_queue_preserves_input_order() {
        let entries = queue_entries(&WORK_ORDERS);
        assert_eq!(entries.len(), 4);
        for (i, (entry, order)) in entries.iter().zip(WORK_ORDERS.iter()).enumerate() {
            assert_eq!(entry.rank, i + 1);
            assert_eq!(entry.id, order.id);
        }
        assert_eq!(entries[0].impact_score, 98);
        assert_eq!(entries[0].station, "Daly City - Serramonte");
        assert_eq!(entries[3].rank, 4);
        assert_eq!(entries[3].impact_score, 12);
    }

    #[test]
    fn test_queue_does_not_sort() {
        let mut reversed = WORK_ORDERS.to_vec();
        reversed.reverse();
        let entries = queue_entries(&reversed);
        assert_eq!(entries[0].impact_score, 12);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[3].impact_score, 98);
    }

    #[test]
    fn test_queue_action_reflects_technician() {
        for (entry, order) in queue_entries(&WORK_ORDERS).iter().zip(WORK_ORDERS.iter()) {
            match order.technician {
                Some(name) => assert_eq!(entry.action, QueueAction::Technician(name)),
                None => assert_eq!(entry.action, QueueAction::Assign),
            }
        }
    }

    #[test]
    fn test_chart_has_one_point_per_sample() {
        let chart = ChartModel::from_samples(&FORECAST, CAPACITY_THRESHOLD);
        assert_eq!(chart.points.len(), 8);
        assert_eq!(chart.reference_line, 5000);
        assert_eq!(chart.y_max, 6000);
    }

    #[test]
    fn test_chart_of_empty_samples() {
        let chart = ChartModel::from_samples(&[], 5000);
        assert!(chart.points.is_empty());
        assert_eq!(chart.y_max, 5000);
        assert!(chart.tooltip(0).is_none());
    }

    #[test]
    fn test_tooltip_shows_both_series() {
        let chart = ChartModel::from_samples(&FORECAST, CAPACITY_THRESHOLD);
        let tooltip = chart.tooltip(5).unwrap();
        assert_eq!(tooltip.label, FORECAST[5].day);
        let lines = tooltip.lines();
        assert_eq!(lines[1], format!("Demand: {}", FORECAST[5].demand));
        assert_eq!(lines[2], format!("Capacity: {}", FORECAST[5].capacity));
        assert!(chart.tooltip(8).is_none());
    }

    #[test]
    fn test_y_ticks() {
        let chart = ChartModel::from_samples(&FORECAST, CAPACITY_THRESHOLD);
        assert_eq!(chart.y_ticks(4), vec![0, 2000, 4000, 6000]);
    }

    #[test]
    fn test_screen_marks_active_nav() {
        let screen = ScreenModel::from_state(&state_at(WORK_ORDERS_PATH));
        let active: Vec<bool> = screen.nav.iter().map(|n| n.active).collect();
        assert_eq!(active, vec![false, true, false]);
    }

    #[test]
    fn test_screen_for_unknown_path() {
        let screen = ScreenModel::from_state(&state_at("/nowhere"));
        assert!(screen.nav.iter().all(|n| !n.active));
        assert_eq!(
            screen.content,
            ViewModel::NotFound {
                path: "/nowhere".to_string()
            }
        );
    }

    #[test]
    fn test_network_map_mode_has_placeholder_only() {
        let mut state = state_at(NETWORK_PATH);
        state.network.view_mode = ViewMode::Map;
        match ScreenModel::from_state(&state).content {
            ViewModel::Network {
                rows, placeholder, ..
            } => {
                assert!(rows.is_none());
                assert_eq!(placeholder, Some(MAP_PLACEHOLDER));
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_list_map_list_round_trip_is_identical() {
        let mut state = state_at(NETWORK_PATH);
        let before = ScreenModel::from_state(&state);

        state.network.view_mode = state.network.view_mode.toggled();
        let map = ScreenModel::from_state(&state);
        assert_ne!(before, map);

        state.network.view_mode = state.network.view_mode.toggled();
        assert_eq!(ScreenModel::from_state(&state), before);
    }

    #[test]
    fn test_forecast_tooltip_follows_hover() {
        let mut state = state_at(FORECAST_PATH);
        match ScreenModel::from_state(&state).content {
            ViewModel::Forecast { tooltip, .. } => assert!(tooltip.is_none()),
            other => panic!("unexpected view: {:?}", other),
        }

        state.forecast.hovered = Some(0);
        match ScreenModel::from_state(&state).content {
            ViewModel::Forecast { tooltip, .. } => {
                assert_eq!(tooltip.map(|t| t.label), Some(FORECAST[0].day))
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_screen_serializes_with_view_tag() {
        let screen = ScreenModel::from_state(&state_at(NETWORK_PATH));
        let json = serde_json::to_value(&screen).unwrap();
        assert_eq!(json["route"], "network");
        assert_eq!(json["content"]["view"], "network");
        assert_eq!(json["content"]["view_mode"], "list");
        assert_eq!(json["content"]["rows"].as_array().map(|r| r.len()), Some(6));
    }
}
