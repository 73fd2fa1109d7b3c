//! Maintenance work orders

use serde::Serialize;

/// Dispatch status of a work order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    Pending,
    Assigned,
    InProgress,
}

/// A maintenance task tied to a station.
///
/// `impact_score` is supplied with the data. Lists of work orders are
/// expected to arrive already ranked by it; nothing re-sorts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkOrder {
    pub id: &'static str,
    pub station: &'static str,
    pub issue: &'static str,
    pub impact_score: u32,
    pub minutes_saved: u64,
    /// Free-text countdown, e.g. "4 hours"
    pub sla_breach_in: &'static str,
    pub technician: Option<&'static str>,
    pub status: WorkOrderStatus,
}

impl WorkOrder {
    pub fn is_assigned(&self) -> bool {
        self.technician.is_some()
    }
}

/// Format a count with comma thousands separators (e.g. 14500 → "14,500").
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
