//! # teslagrid-core - Core Domain Types
//!
//! Foundation crate for TeslaGrid. Provides the domain records, the literal
//! sample datasets every view renders, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`Station`], [`StationStatus`], [`Trend`], [`AlertLevel`] - Network health records
//! - [`WorkOrder`], [`WorkOrderStatus`] - Pre-ranked maintenance tasks
//! - [`ForecastSample`], [`RiskCallout`], [`EventImpact`] - Forecast chart input
//!
//! ### Sample Data (`fixtures`)
//! - [`fixtures::STATIONS`], [`fixtures::WORK_ORDERS`], [`fixtures::FORECAST`]
//! - [`fixtures::CAPACITY_THRESHOLD`] - Reference line of the forecast chart
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use teslagrid_core::prelude::*;
//! ```

pub mod error;
pub mod fixtures;
pub mod forecast;
pub mod logging;
pub mod station;
pub mod work_order;

/// Prelude for common imports used throughout all TeslaGrid crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use forecast::{format_thousands, EventImpact, ForecastSample, RiskCallout};
pub use station::{AlertLevel, Station, StationStatus, Trend, SATURATION_THRESHOLD};
pub use work_order::{format_count, WorkOrder, WorkOrderStatus};
