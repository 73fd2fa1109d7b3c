//! Custom widget components

mod forecast_chart;
mod forecast_view;
mod header;
mod landing;
pub mod network_health;
mod not_found;
mod sidebar;
mod view_title;
mod work_order_queue;

pub use forecast_chart::ForecastChart;
pub use forecast_view::ForecastView;
pub use header::ShellHeader;
pub use landing::Landing;
pub use network_health::NetworkHealth;
pub use not_found::NotFound;
pub use sidebar::Sidebar;
pub use view_title::{pill, truncate_to_width, ViewTitle};
pub use work_order_queue::WorkOrderQueue;
