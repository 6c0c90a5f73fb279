//! # Hiring Insights
//!
//! Synthetic hiring-funnel dashboard: a bounded random-walk generator for
//! three recruiting rates and the chart configuration used to display them.
//!
//! ## Features
//!
//! - **Series generation**: one point per day for 30, 90, 180 or 365 days,
//!   each metric clamped into its own range
//! - **Chart configuration**: viewport-dependent date ticks, fixed percentage
//!   axis, hover tooltip and legend
//! - **Dashboard state**: timeframe selection with full regeneration
//! - **Export**: CSV/JSON output and SVG snapshots
//!
//! ## Modules
//!
//! - [`series`]: metrics, data points and the random-walk generator
//! - [`timeframe`]: the selectable windows
//! - [`chart`]: axis, tooltip, legend and layout configuration
//! - [`dashboard`]: selected timeframe plus its current sequence
//! - [`export`]: CSV and JSON serialization
//! - [`render`]: SVG rendering with plotters
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use hiring_insights::{DashboardState, Timeframe};
//!
//! let mut state = DashboardState::new(Timeframe::Last30Days);
//! assert_eq!(state.points().len(), 30);
//!
//! state.select_timeframe(Timeframe::Last90Days);
//! state.set_viewport_width(1280.0);
//! assert_eq!(state.points().len(), 90);
//! assert_eq!(state.tick_interval(), 9);
//!
//! if let Some(tooltip) = state.tooltip_at(0) {
//!     println!("{}", tooltip.lines().join("\n"));
//! }
//! ```

pub mod chart;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod logging;
pub mod render;
pub mod series;
pub mod timeframe;

// Re-export top-level types for convenience
pub use series::{DataPoint, Metric, RandomWalk, SeriesGenerator};

pub use timeframe::{Timeframe, TimeframeError};

pub use chart::{ChartSpec, LegendEntry, TickDensity, Tooltip, TooltipEntry};

pub use dashboard::{DashboardState, XTick};

pub use clock::{Clock, FixedClock, SystemClock};

pub use export::{to_csv, to_json, ExportError};

pub use render::{render_svg, write_svg, RenderError, RenderOptions};

pub use config::{Config, ConfigError, DashboardConfig, LogFormat, LoggingConfig, RenderConfig};
