//! Core data types for the hiring-funnel series
//!
//! - `Metric`: the three tracked rates and their generation parameters
//! - `DataPoint`: one day's values plus its display label

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Format used for axis and tooltip date labels ("Jan 5")
pub const DATE_LABEL_FORMAT: &str = "%b %-d";

/// A tracked hiring-funnel rate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    /// Share of applications that reach an interview
    ApplicationToInterview,
    /// Share of offers that are accepted
    OfferAcceptance,
    /// Share of candidates rejected
    Rejection,
}

impl Metric {
    /// All metrics in series/legend order
    pub const ALL: [Metric; 3] = [
        Metric::ApplicationToInterview,
        Metric::OfferAcceptance,
        Metric::Rejection,
    ];

    /// Field name used in serialized data points
    pub fn key(&self) -> &'static str {
        match self {
            Metric::ApplicationToInterview => "applicationToInterviewRate",
            Metric::OfferAcceptance => "offerAcceptanceRate",
            Metric::Rejection => "rejectionRate",
        }
    }

    /// Name shown in the legend and tooltip
    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::ApplicationToInterview => "Application to Interview Rate",
            Metric::OfferAcceptance => "Offer Acceptance Rate",
            Metric::Rejection => "Rejection Rate",
        }
    }

    /// Line and legend swatch color
    pub fn color(&self) -> &'static str {
        match self {
            Metric::ApplicationToInterview => "#22c55e",
            Metric::OfferAcceptance => "#a855f7",
            Metric::Rejection => "#f97316",
        }
    }

    /// Clamp range for the running value
    pub fn bounds(&self) -> RangeInclusive<f64> {
        match self {
            Metric::ApplicationToInterview => 40.0..=90.0,
            Metric::OfferAcceptance => 50.0..=95.0,
            Metric::Rejection => 5.0..=40.0,
        }
    }

    /// Range the initial running value is drawn from
    pub fn seed_range(&self) -> RangeInclusive<f64> {
        match self {
            Metric::ApplicationToInterview => 45.0..=55.0,
            Metric::OfferAcceptance => 55.0..=65.0,
            Metric::Rejection => 25.0..=30.0,
        }
    }

    /// Range the per-day growth increment is drawn from
    pub fn growth_range(&self) -> RangeInclusive<f64> {
        match self {
            Metric::ApplicationToInterview => 0.1..=0.3,
            Metric::OfferAcceptance => 0.15..=0.35,
            Metric::Rejection => 0.05..=0.15,
        }
    }

    /// Multiplier applied to the shared daily perturbation
    pub fn perturbation_scale(&self) -> f64 {
        match self {
            Metric::Rejection => 0.5,
            _ => 1.0,
        }
    }

    /// Clamp a running value into this metric's range
    pub fn clamp(&self, value: f64) -> f64 {
        let bounds = self.bounds();
        value.clamp(*bounds.start(), *bounds.end())
    }

    /// Index of this metric inside `Metric::ALL`
    pub fn index(&self) -> usize {
        match self {
            Metric::ApplicationToInterview => 0,
            Metric::OfferAcceptance => 1,
            Metric::Rejection => 2,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One day of synthetic hiring metrics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    /// Short display label ("Jun 1")
    pub date: String,
    /// Calendar day this point represents
    pub day: NaiveDate,
    /// Percentage in [40, 90]
    pub application_to_interview_rate: u8,
    /// Percentage in [50, 95]
    pub offer_acceptance_rate: u8,
    /// Percentage in [5, 40]
    pub rejection_rate: u8,
}

impl DataPoint {
    /// Build a point for `day` from the three rounded rates, in `Metric::ALL` order
    pub fn new(day: NaiveDate, rates: [u8; 3]) -> Self {
        Self {
            date: date_label(day),
            day,
            application_to_interview_rate: rates[0],
            offer_acceptance_rate: rates[1],
            rejection_rate: rates[2],
        }
    }

    /// Value of a single metric
    pub fn value(&self, metric: Metric) -> u8 {
        match metric {
            Metric::ApplicationToInterview => self.application_to_interview_rate,
            Metric::OfferAcceptance => self.offer_acceptance_rate,
            Metric::Rejection => self.rejection_rate,
        }
    }
}

/// Render a calendar day as the short dashboard label
pub fn date_label(day: NaiveDate) -> String {
    day.format(DATE_LABEL_FORMAT).to_string()
}
