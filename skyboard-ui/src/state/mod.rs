//! State Management
//!
//! Page-wide dashboard state shared through Leptos context.

pub mod dashboard;

pub use dashboard::{provide_dashboard_state, DashboardState};
