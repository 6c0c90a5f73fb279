//! State Management
//!
//! Dashboard signals shared across components.

pub mod global;

pub use global::{
    create_dashboard_state, provide_dashboard_state, use_dashboard_state, DashboardState,
    GeneratedSeries,
};
