//! Chart Configuration
//!
//! Renderer-independent description of the hiring-insights line chart:
//! layout, styling, axis rules, tooltip and legend content. The canvas front
//! end and the SVG renderer both draw from a `ChartSpec`.

pub mod axis;
pub mod legend;
pub mod tooltip;

pub use axis::{
    format_percent, x_tick_indices, y_ticks, TickDensity, FALLBACK_TICK_INTERVAL,
    NARROW_VIEWPORT_WIDTH, Y_MAX, Y_MIN,
};
pub use legend::{legend_entries, LegendEntry};
pub use tooltip::{Tooltip, TooltipEntry};

use serde::Serialize;

use crate::series::Metric;

/// Space reserved around the plot, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// A line drawn for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSeries {
    pub metric: Metric,
    pub name: &'static str,
    pub color: &'static str,
    pub stroke_width: f64,
    pub show_dots: bool,
}

/// Pixel rectangle the series are drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Layout and styling of the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub margins: Margins,
    /// Height reserved below the plot for date labels
    pub x_axis_height: f64,
    /// Width reserved left of the plot for percentage labels
    pub y_axis_width: f64,
    /// Gap between a date label and the plot
    pub tick_margin: f64,
    pub tick_font_size: f64,
    pub tick_color: &'static str,
    /// Color of the horizontal gridlines (no vertical gridlines are drawn)
    pub grid_color: &'static str,
    /// Dash pattern of the gridlines
    pub grid_dash: [f64; 2],
    /// Draw the axis lines along the plot edges
    pub show_axis_line: bool,
    /// Draw a tick mark next to each axis label
    pub show_tick_line: bool,
    pub series: Vec<LineSeries>,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            margins: Margins {
                top: 20.0,
                right: 20.0,
                bottom: 0.0,
                left: 10.0,
            },
            x_axis_height: 40.0,
            y_axis_width: 40.0,
            tick_margin: 5.0,
            tick_font_size: 12.0,
            tick_color: "#666666",
            grid_color: "#f0f0f0",
            grid_dash: [3.0, 3.0],
            show_axis_line: false,
            show_tick_line: false,
            series: Metric::ALL
                .iter()
                .map(|&metric| LineSeries {
                    metric,
                    name: metric.display_name(),
                    color: metric.color(),
                    stroke_width: 2.0,
                    show_dots: false,
                })
                .collect(),
        }
    }
}

impl ChartSpec {
    /// Plot rectangle inside a `width` x `height` surface
    pub fn plot_area(&self, width: f64, height: f64) -> PlotArea {
        let left = self.margins.left + self.y_axis_width;
        let top = self.margins.top;
        let right = (width - self.margins.right).max(left);
        let bottom = (height - self.margins.bottom - self.x_axis_height).max(top);
        PlotArea {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal pixel position of category `index` out of `len`
    ///
    /// Categories are spread edge to edge; a single category sits in the middle.
    pub fn x_position(&self, index: usize, len: usize, area: &PlotArea) -> f64 {
        if len <= 1 {
            return area.left + area.width() / 2.0;
        }
        area.left + area.width() * index as f64 / (len - 1) as f64
    }

    /// Vertical pixel position of a percentage value
    pub fn y_position(&self, value: f64, area: &PlotArea) -> f64 {
        let clamped = value.clamp(Y_MIN, Y_MAX);
        area.bottom - (clamped - Y_MIN) / (Y_MAX - Y_MIN) * area.height()
    }

    /// Category nearest to horizontal pixel `x`, if `x` is over the plot
    pub fn index_at(&self, x: f64, len: usize, area: &PlotArea) -> Option<usize> {
        if len == 0 || x < area.left || x > area.right {
            return None;
        }
        if len == 1 || area.width() <= 0.0 {
            return Some(0);
        }
        let fraction = (x - area.left) / area.width();
        let index = (fraction * (len - 1) as f64).round() as usize;
        Some(index.min(len - 1))
    }
}
