//! Hiring Series
//!
//! - **types**: `Metric` definitions and the daily `DataPoint`
//! - **generator**: bounded random-walk sequence generation
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use hiring_insights::series::SeriesGenerator;
//!
//! let anchor = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
//! let points = SeriesGenerator::seeded(42).generate_at(30, anchor);
//!
//! assert_eq!(points.len(), 30);
//! assert_eq!(points[0].date, "Jun 1");
//! assert_eq!(points[29].date, "Jun 30");
//! ```

pub mod generator;
pub mod types;

pub use generator::{RandomWalk, SeriesGenerator, MAX_PERTURBATION};
pub use types::{date_label, DataPoint, Metric, DATE_LABEL_FORMAT};
