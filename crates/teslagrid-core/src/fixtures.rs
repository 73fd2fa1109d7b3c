//! Literal sample datasets
//!
//! Every view reads its own slice from here. Names and numbers are
//! illustrative only.

use serde::Serialize;

use crate::forecast::{EventImpact, ForecastSample, RiskCallout};
use crate::station::{Station, StationStatus, Trend};
use crate::work_order::{WorkOrder, WorkOrderStatus};

// ─────────────────────────────────────────────────────────────────
// Network health
// ─────────────────────────────────────────────────────────────────

pub const STATIONS: [Station; 6] = [
    Station {
        id: "S001",
        name: "Daly City - Serramonte",
        region: "NorCal",
        status: StationStatus::Congestion,
        uptime: 99.9,
        utilization: 92,
        trend: Trend::Up,
        active_alerts: 1,
    },
    Station {
        id: "S002",
        name: "San Mateo - Bridgepointe",
        region: "NorCal",
        status: StationStatus::Operational,
        uptime: 99.8,
        utilization: 65,
        trend: Trend::Stable,
        active_alerts: 0,
    },
    Station {
        id: "S003",
        name: "Palo Alto - Stanford",
        region: "NorCal",
        status: StationStatus::Degraded,
        uptime: 91.5,
        utilization: 45,
        trend: Trend::Down,
        active_alerts: 2,
    },
    Station {
        id: "S004",
        name: "Mountain View - Showplace",
        region: "NorCal",
        status: StationStatus::Operational,
        uptime: 99.9,
        utilization: 78,
        trend: Trend::Up,
        active_alerts: 0,
    },
    Station {
        id: "S005",
        name: "Santa Clara - Square",
        region: "NorCal",
        status: StationStatus::Offline,
        uptime: 0.0,
        utilization: 0,
        trend: Trend::Stable,
        active_alerts: 3,
    },
    Station {
        id: "S006",
        name: "Fremont - Hub",
        region: "EastBay",
        status: StationStatus::Operational,
        uptime: 99.5,
        utilization: 55,
        trend: Trend::Down,
        active_alerts: 0,
    },
];

/// Fleet-wide uptime shown in the dashboard header
pub const FLEET_UPTIME: f64 = 98.2;

// ─────────────────────────────────────────────────────────────────
// Work orders (pre-ranked by impact score, descending)
// ─────────────────────────────────────────────────────────────────

pub const WORK_ORDERS: [WorkOrder; 4] = [
    WorkOrder {
        id: "WO-2941",
        station: "Daly City - Serramonte",
        issue: "Cabinet 2 Thermal Fault",
        impact_score: 98,
        minutes_saved: 14500,
        sla_breach_in: "4 hours",
        technician: None,
        status: WorkOrderStatus::Pending,
    },
    WorkOrder {
        id: "WO-2911",
        station: "Palo Alto - Stanford",
        issue: "Stall 1A & 1B Ground Fault",
        impact_score: 85,
        minutes_saved: 8200,
        sla_breach_in: "22 hours",
        technician: Some("M. Chen"),
        status: WorkOrderStatus::Assigned,
    },
    WorkOrder {
        id: "WO-2955",
        station: "Fremont - Hub",
        issue: "Display unresponsive",
        impact_score: 45,
        minutes_saved: 2100,
        sla_breach_in: "2 days",
        technician: None,
        status: WorkOrderStatus::Pending,
    },
    WorkOrder {
        id: "WO-2902",
        station: "San Mateo - BP",
        issue: "Cleaning required",
        impact_score: 12,
        minutes_saved: 0,
        sla_breach_in: "4 days",
        technician: None,
        status: WorkOrderStatus::Pending,
    },
];

/// Label of the impact model that produced the scores
pub const IMPACT_MODEL: &str = "Impact Model v4.2 active";

// ─────────────────────────────────────────────────────────────────
// Forecast
// ─────────────────────────────────────────────────────────────────

/// Regional capacity drawn as the chart reference line
pub const CAPACITY_THRESHOLD: u32 = 5000;

pub const FORECAST: [ForecastSample; 8] = [
    ForecastSample {
        day: "Mon",
        capacity: CAPACITY_THRESHOLD,
        demand: 2400,
    },
    ForecastSample {
        day: "Tue",
        capacity: CAPACITY_THRESHOLD,
        demand: 2200,
    },
    ForecastSample {
        day: "Wed",
        capacity: CAPACITY_THRESHOLD,
        demand: 3100,
    },
    ForecastSample {
        day: "Thu",
        capacity: CAPACITY_THRESHOLD,
        demand: 3800,
    },
    ForecastSample {
        day: "Fri",
        capacity: CAPACITY_THRESHOLD,
        demand: 4600,
    },
    ForecastSample {
        day: "Sat",
        capacity: CAPACITY_THRESHOLD,
        demand: 5800,
    },
    ForecastSample {
        day: "Sun",
        capacity: CAPACITY_THRESHOLD,
        demand: 5100,
    },
    ForecastSample {
        day: "Mon",
        capacity: CAPACITY_THRESHOLD,
        demand: 2800,
    },
];

pub const CONGESTION_RISK: RiskCallout = RiskCallout {
    title: "Congestion Risk: Saturday",
    detail: "Predicted demand exceeds comfortable capacity threshold (90%) in 2 zones.",
    action: "View Mitigation Options",
};

pub const EVENT_IMPACTS: [EventImpact; 2] = [
    EventImpact {
        delta_percent: -12,
        title: "Off-Peak Pricing Effect",
        caption: "Projected load shift",
    },
    EventImpact {
        delta_percent: 15,
        title: "Holiday Travel",
        caption: "Historical uplift applied",
    },
];

// ─────────────────────────────────────────────────────────────────
// Landing copy
// ─────────────────────────────────────────────────────────────────

/// A headline figure on the landing view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub sublabel: Option<&'static str>,
}

pub const PRODUCT_TITLE: &str = "TeslaGrid — Supercharger Network & Fleet Reliability";

pub const LANDING_PILLS: [&str; 3] = [
    "Internal PM Case Study",
    "Supercharger & Fleet Reliability",
    "Tesla (hypothetical)",
];

pub const LANDING_INTRO: &str = "TeslaGrid is an internal-facing reliability cockpit designed for \
Tesla's charging and fleet operations teams. It surfaces real-time network health, predicts \
congestion and outages, and ranks work so teams fix what hurts drivers the most.";

pub const LANDING_STATS: [StatCard; 3] = [
    StatCard {
        label: "Primary Problem",
        value: "Unpredictable charging experience",
        sublabel: Some("Outages and congestion erode trust in the Supercharger network."),
    },
    StatCard {
        label: "Who I Designed For",
        value: "Charging & Fleet Ops",
        sublabel: Some("Network ops, maintenance schedulers, and regional leads."),
    },
    StatCard {
        label: "My Role",
        value: "Product Manager",
        sublabel: Some("Discovery → framing → flows → success metrics; built as a live demo."),
    },
];

pub const READING_GUIDE: [&str; 3] = [
    "The reliability problem TeslaGrid is solving.",
    "Who uses it and what the core flows look like in the live demo.",
    "How I approached the work as a product manager.",
];

pub const LANDING_DISCLAIMER: &str = "This app is built as a portfolio artifact. Names and \
numbers are illustrative, but the product thinking and flows reflect how an internal \
reliability tool would be approached.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_sizes() {
        assert_eq!(STATIONS.len(), 6);
        assert_eq!(WORK_ORDERS.len(), 4);
        assert_eq!(FORECAST.len(), 8);
    }

    #[test]
    fn test_station_ids_are_unique() {
        let mut ids: Vec<&str> = STATIONS.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), STATIONS.len());
    }

    #[test]
    fn test_percentages_in_range() {
        for s in &STATIONS {
            assert!((0.0..=100.0).contains(&s.uptime), "{}", s.id);
            assert!(s.utilization <= 100, "{}", s.id);
        }
    }

    #[test]
    fn test_forecast_capacity_is_constant() {
        assert!(FORECAST.iter().all(|s| s.capacity == CAPACITY_THRESHOLD));
    }

    #[test]
    fn test_congestion_callout_names_the_peak_day() {
        let peak = FORECAST.iter().max_by_key(|s| s.demand).unwrap();
        assert_eq!(peak.day, "Sat");
        assert!(peak.demand > CAPACITY_THRESHOLD);
        assert!(CONGESTION_RISK.title.contains("Saturday"));
    }
}
