//! State Management
//!
//! Dashboard signals and the message banner.

pub mod banner;
pub mod global;

pub use banner::Severity;
pub use global::{provide_dashboard_state, today, use_dashboard_state, DashboardState};
