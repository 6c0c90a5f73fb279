//! Timeframe Selection
//!
//! The closed set of windows a user can pick on the dashboard. Every
//! generation request is driven by one of these values, which is what keeps
//! the generator free of runtime error paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A selectable window length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Timeframe {
    /// 30 days
    #[default]
    Last30Days,
    /// 90 days
    Last90Days,
    /// 180 days
    Last6Months,
    /// 365 days
    LastYear,
}

/// Errors raised when a window length outside the enumerated set is requested
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeframeError {
    /// Value is not one of 30, 90, 180 or 365
    #[error("Unsupported timeframe: {0} (expected one of 30, 90, 180, 365)")]
    Unsupported(String),
}

impl Timeframe {
    /// All timeframes in selector order
    pub fn all() -> &'static [Timeframe] {
        &[
            Timeframe::Last30Days,
            Timeframe::Last90Days,
            Timeframe::Last6Months,
            Timeframe::LastYear,
        ]
    }

    /// Number of daily points in this window
    pub fn days(&self) -> usize {
        match self {
            Timeframe::Last30Days => 30,
            Timeframe::Last90Days => 90,
            Timeframe::Last6Months => 180,
            Timeframe::LastYear => 365,
        }
    }

    /// Human-readable label shown in the selector
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Last30Days => "Last 30 days",
            Timeframe::Last90Days => "Last 90 days",
            Timeframe::Last6Months => "Last 6 months",
            Timeframe::LastYear => "Last year",
        }
    }

    /// Option value used by `<select>` elements and the CLI
    pub fn value(&self) -> &'static str {
        match self {
            Timeframe::Last30Days => "30",
            Timeframe::Last90Days => "90",
            Timeframe::Last6Months => "180",
            Timeframe::LastYear => "365",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<u32> for Timeframe {
    type Error = TimeframeError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            30 => Ok(Timeframe::Last30Days),
            90 => Ok(Timeframe::Last90Days),
            180 => Ok(Timeframe::Last6Months),
            365 => Ok(Timeframe::LastYear),
            other => Err(TimeframeError::Unsupported(other.to_string())),
        }
    }
}

impl From<Timeframe> for u32 {
    fn from(timeframe: Timeframe) -> Self {
        timeframe.days() as u32
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let days = s
            .strip_suffix('d')
            .unwrap_or(s)
            .parse::<u32>()
            .map_err(|_| TimeframeError::Unsupported(s.to_string()))?;
        Timeframe::try_from(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_and_days() {
        let expected = [
            (30, "Last 30 days"),
            (90, "Last 90 days"),
            (180, "Last 6 months"),
            (365, "Last year"),
        ];

        for (tf, (days, label)) in Timeframe::all().iter().zip(expected) {
            assert_eq!(tf.days(), days);
            assert_eq!(tf.label(), label);
            assert_eq!(tf.value(), days.to_string());
        }
    }

    #[test]
    fn test_default_is_thirty_days() {
        assert_eq!(Timeframe::default(), Timeframe::Last30Days);
    }

    #[test]
    fn test_parse() {
        assert_eq!("90".parse::<Timeframe>(), Ok(Timeframe::Last90Days));
        assert_eq!("180d".parse::<Timeframe>(), Ok(Timeframe::Last6Months));
        assert_eq!(" 365 ".parse::<Timeframe>(), Ok(Timeframe::LastYear));

        let err = "7".parse::<Timeframe>().unwrap_err();
        assert_eq!(err, TimeframeError::Unsupported("7".to_string()));
        assert!("soon".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_serde_as_day_count() {
        let json = serde_json::to_string(&Timeframe::Last6Months).unwrap();
        assert_eq!(json, "180");

        let restored: Timeframe = serde_json::from_str("365").unwrap();
        assert_eq!(restored, Timeframe::LastYear);

        assert!(serde_json::from_str::<Timeframe>("45").is_err());
    }
}
