//! Axis configuration
//!
//! The horizontal axis is categorical (one category per day) with a label
//! density that depends on the viewport width. The vertical axis is a fixed
//! percentage domain.

use serde::{Deserialize, Serialize};

/// Viewports narrower than this use the denser tick divisor
pub const NARROW_VIEWPORT_WIDTH: f64 = 640.0;

/// Tick interval used before the viewport width is known
pub const FALLBACK_TICK_INTERVAL: usize = 5;

/// Divisor of the sequence length on narrow viewports
pub const NARROW_DIVISOR: usize = 5;

/// Divisor of the sequence length on wide viewports
pub const WIDE_DIVISOR: usize = 10;

/// Lower bound of the value axis
pub const Y_MIN: f64 = 0.0;

/// Upper bound of the value axis
pub const Y_MAX: f64 = 100.0;

/// Number of evenly spaced value gridlines, both ends included
pub const Y_TICK_COUNT: usize = 9;

/// Horizontal label density rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickDensity {
    /// Width below which the viewport counts as narrow
    pub narrow_viewport_width: f64,
    /// Interval used while the width is unknown
    pub fallback_interval: usize,
}

impl Default for TickDensity {
    fn default() -> Self {
        Self {
            narrow_viewport_width: NARROW_VIEWPORT_WIDTH,
            fallback_interval: FALLBACK_TICK_INTERVAL,
        }
    }
}

impl TickDensity {
    /// Whether a surface of `width` counts as narrow
    pub fn is_narrow(&self, width: f64) -> bool {
        width < self.narrow_viewport_width
    }

    /// Number of categories skipped between labelled ticks
    ///
    /// `None` means the rendering surface has not been measured yet.
    pub fn interval(&self, len: usize, viewport_width: Option<f64>) -> usize {
        match viewport_width {
            None => self.fallback_interval,
            Some(width) if self.is_narrow(width) => len / NARROW_DIVISOR,
            Some(_) => len / WIDE_DIVISOR,
        }
    }
}

/// Indices of the labelled categories for a given interval
///
/// An interval of `k` labels every `(k + 1)`-th category, starting at the first.
pub fn x_tick_indices(len: usize, interval: usize) -> Vec<usize> {
    (0..len).step_by(interval + 1).collect()
}

/// Value-axis gridline positions: 0, 13, 25, 38, 50, 63, 75, 88, 100
pub fn y_ticks() -> Vec<u32> {
    let steps = (Y_TICK_COUNT - 1) as f64;
    (0..Y_TICK_COUNT)
        .map(|i| (Y_MIN + (Y_MAX - Y_MIN) * i as f64 / steps).round() as u32)
        .collect()
}

/// Append the percent suffix used by axis labels and tooltips
pub fn format_percent(value: impl std::fmt::Display) -> String {
    format!("{}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_before_measurement() {
        let density = TickDensity::default();
        for len in [30, 90, 180, 365] {
            assert_eq!(density.interval(len, None), 5);
        }
    }

    #[test]
    fn test_narrow_and_wide_intervals() {
        let density = TickDensity::default();

        assert_eq!(density.interval(30, Some(375.0)), 6);
        assert_eq!(density.interval(90, Some(639.9)), 18);
        assert_eq!(density.interval(365, Some(320.0)), 73);

        assert_eq!(density.interval(30, Some(640.0)), 3);
        assert_eq!(density.interval(180, Some(1280.0)), 18);
        assert_eq!(density.interval(365, Some(1920.0)), 36);
    }

    #[test]
    fn test_custom_threshold() {
        let density = TickDensity {
            narrow_viewport_width: 1000.0,
            fallback_interval: 2,
        };
        assert!(density.is_narrow(800.0));
        assert_eq!(density.interval(90, Some(800.0)), 18);
        assert_eq!(density.interval(90, None), 2);
    }

    #[test]
    fn test_x_tick_indices() {
        assert_eq!(x_tick_indices(10, 3), vec![0, 4, 8]);
        assert_eq!(x_tick_indices(5, 0), vec![0, 1, 2, 3, 4]);
        assert!(x_tick_indices(0, 5).is_empty());
    }

    #[test]
    fn test_y_ticks() {
        assert_eq!(y_ticks(), vec![0, 13, 25, 38, 50, 63, 75, 88, 100]);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(38), "38%");
        let labels: Vec<String> = y_ticks().into_iter().map(format_percent).collect();
        assert_eq!(labels.first().map(String::as_str), Some("0%"));
        assert_eq!(labels.last().map(String::as_str), Some("100%"));
    }
}
