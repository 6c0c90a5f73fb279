//! Hover tooltip content

use serde::Serialize;
use std::fmt;

use crate::series::{DataPoint, Metric};

use super::axis::format_percent;

/// One metric line inside the tooltip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipEntry {
    pub metric: Metric,
    pub name: &'static str,
    pub value: u8,
    pub color: &'static str,
}

impl fmt::Display for TooltipEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, format_percent(self.value))
    }
}

/// Tooltip for the hovered day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    /// Date label of the hovered day
    pub label: String,
    /// One entry per metric, in series order
    pub entries: Vec<TooltipEntry>,
}

impl Tooltip {
    /// Build the tooltip for a single data point
    pub fn for_point(point: &DataPoint) -> Self {
        let entries = Metric::ALL
            .iter()
            .map(|&metric| TooltipEntry {
                metric,
                name: metric.display_name(),
                value: point.value(metric),
                color: metric.color(),
            })
            .collect();

        Self {
            label: point.date.clone(),
            entries,
        }
    }

    /// Tooltip for `index` within `points`, if it exists
    pub fn at(points: &[DataPoint], index: usize) -> Option<Self> {
        points.get(index).map(Self::for_point)
    }

    /// Text lines: the date label followed by one line per metric
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(self.label.clone())
            .chain(self.entries.iter().map(ToString::to_string))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point() -> DataPoint {
        DataPoint::new(NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(), [48, 61, 27])
    }

    #[test]
    fn test_tooltip_lines() {
        let tooltip = Tooltip::for_point(&point());

        assert_eq!(
            tooltip.lines(),
            vec![
                "Jun 12".to_string(),
                "Application to Interview Rate: 48%".to_string(),
                "Offer Acceptance Rate: 61%".to_string(),
                "Rejection Rate: 27%".to_string(),
            ]
        );
    }

    #[test]
    fn test_entry_colors_follow_series() {
        let tooltip = Tooltip::for_point(&point());
        let colors: Vec<_> = tooltip.entries.iter().map(|e| e.color).collect();
        assert_eq!(colors, vec!["#22c55e", "#a855f7", "#f97316"]);
    }

    #[test]
    fn test_out_of_range_index() {
        let points = vec![point()];
        assert!(Tooltip::at(&points, 0).is_some());
        assert!(Tooltip::at(&points, 1).is_none());
        assert!(Tooltip::at(&[], 0).is_none());
    }
}
