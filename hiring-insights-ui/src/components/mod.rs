//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod legend;
pub mod timeframe_select;
pub mod tooltip;

pub use chart::Chart;
pub use legend::ChartLegend;
pub use timeframe_select::TimeframeSelect;
