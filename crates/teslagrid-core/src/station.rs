//! Charging station health records

use serde::Serialize;

/// Utilization above this percentage is flagged as near-saturation.
pub const SATURATION_THRESHOLD: u8 = 90;

/// Operating status of a station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StationStatus {
    Operational,
    Degraded,
    Offline,
    Congestion,
}

impl StationStatus {
    /// Every status, in badge legend order.
    pub const ALL: [StationStatus; 4] = [
        StationStatus::Operational,
        StationStatus::Degraded,
        StationStatus::Offline,
        StationStatus::Congestion,
    ];

    /// Badge label shown in the status column
    pub fn label(&self) -> &'static str {
        match self {
            StationStatus::Operational => "Operational",
            StationStatus::Degraded => "Degraded",
            StationStatus::Offline => "Offline",
            StationStatus::Congestion => "High Load",
        }
    }
}

/// Utilization trend over the last window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Alert indicator derived from a station's active alert count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "count", rename_all = "snake_case")]
pub enum AlertLevel {
    /// No active alerts
    Healthy,
    /// One or more active alerts
    Critical(u32),
}

impl AlertLevel {
    pub fn is_critical(&self) -> bool {
        matches!(self, AlertLevel::Critical(_))
    }
}

/// A charging site with its (static) health telemetry.
///
/// Status and numeric fields are set independently: an offline station may
/// still carry an uptime value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: &'static str,
    pub name: &'static str,
    pub region: &'static str,
    pub status: StationStatus,
    /// Uptime over the last 24h, 0–100
    pub uptime: f64,
    /// Stall utilization, 0–100
    pub utilization: u8,
    pub trend: Trend,
    pub active_alerts: u32,
}

impl Station {
    pub fn alert_level(&self) -> AlertLevel {
        match self.active_alerts {
            0 => AlertLevel::Healthy,
            n => AlertLevel::Critical(n),
        }
    }

    /// True when utilization is strictly above [`SATURATION_THRESHOLD`]
    pub fn is_saturated(&self) -> bool {
        self.utilization > SATURATION_THRESHOLD
    }
}
