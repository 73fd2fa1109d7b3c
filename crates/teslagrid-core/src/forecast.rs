//! Demand forecast samples

use serde::Serialize;

/// One day of projected demand against fixed capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForecastSample {
    pub day: &'static str,
    pub capacity: u32,
    pub demand: u32,
}

/// Side-panel callout flagging a congestion risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskCallout {
    pub title: &'static str,
    pub detail: &'static str,
    pub action: &'static str,
}

/// An external effect applied to the forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventImpact {
    /// Signed percentage shift in load
    pub delta_percent: i8,
    pub title: &'static str,
    pub caption: &'static str,
}

impl EventImpact {
    /// Badge text such as "-12%" or "+15%"
    pub fn badge(&self) -> String {
        format!("{:+}%", self.delta_percent)
    }

    pub fn reduces_load(&self) -> bool {
        self.delta_percent < 0
    }
}

/// Axis tick label: thousands with a `k` suffix (5000 → "5k", 2500 → "2.5k").
pub fn format_thousands(value: u32) -> String {
    if value % 1000 == 0 {
        format!("{}k", value / 1000)
    } else {
        format!("{}k", value as f64 / 1000.0)
    }
}
