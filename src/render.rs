//! SVG Rendering
//!
//! Draws the dashboard chart into an SVG document with plotters. Layout comes
//! from the state's `ChartSpec`, so the snapshot matches the interactive
//! chart: dashed horizontal gridlines at the value ticks, date labels at the
//! state's tick interval, one line per metric and a legend row underneath.
//! Axis and tick lines are drawn only when the `ChartSpec` enables them.

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use rand::Rng;
use std::path::Path;
use thiserror::Error;

use crate::chart::{format_percent, ChartSpec, PlotArea};
use crate::clock::Clock;
use crate::dashboard::DashboardState;
use crate::timeframe::Timeframe;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Draw(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

/// Size and framing of a rendered snapshot
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Caption drawn above the chart
    pub title: Option<String>,
    /// Height of the caption band
    pub title_height: u32,
    /// Height of the legend band below the chart
    pub legend_height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 400,
            title: Some("Hiring Insights".to_string()),
            title_height: 40,
            legend_height: 32,
        }
    }
}

impl RenderOptions {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

/// Render the current state of the dashboard as an SVG document
pub fn render_svg<R: Rng, C: Clock>(
    state: &DashboardState<R, C>,
    options: &RenderOptions,
) -> RenderResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (options.width, options.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let title_height = if options.title.is_some() { options.title_height } else { 0 };
        let (header, rest) = root.split_vertically(title_height as i32);
        let chart_height = options.height.saturating_sub(title_height + options.legend_height);
        let (plot, footer) = rest.split_vertically(chart_height as i32);

        if let Some(title) = &options.title {
            let style = ("sans-serif", 18.0)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Left, VPos::Center));
            header
                .draw_text(title, &style, (16, title_height as i32 / 2))
                .map_err(draw_err)?;
        }

        draw_plot(state, &plot, options.width as f64, chart_height as f64)?;
        draw_legend(state.chart(), &footer, options.width as f64)?;

        root.present().map_err(draw_err)?;
    }

    tracing::debug!(
        timeframe = state.timeframe().days(),
        width = options.width,
        height = options.height,
        bytes = svg.len(),
        "rendered svg"
    );
    Ok(svg)
}

fn draw_plot<R: Rng, C: Clock, DB: DrawingBackend>(
    state: &DashboardState<R, C>,
    area: &DrawingArea<DB, plotters::coord::Shift>,
    width: f64,
    height: f64,
) -> RenderResult<()> {
    let spec = state.chart();
    let plot = spec.plot_area(width, height);
    let points = state.points();
    let tick_color = hex_color(spec.tick_color);

    // Gridlines and value labels
    let grid = hex_color(spec.grid_color).stroke_width(1);
    let y_label_style = ("sans-serif", spec.tick_font_size)
        .into_font()
        .color(&tick_color)
        .pos(Pos::new(HPos::Right, VPos::Center));
    for tick in state.y_ticks() {
        let y = spec.y_position(tick as f64, &plot);
        draw_dashed_hline(area, &plot, y, spec.grid_dash, grid)?;
        area.draw_text(
            &format_percent(tick),
            &y_label_style,
            (px(plot.left - spec.tick_margin), px(y)),
        )
        .map_err(draw_err)?;
    }

    // Axis lines are off by default; axes are labels only
    let axis = tick_color.stroke_width(1);
    if spec.show_axis_line {
        area.draw(&PathElement::new(
            vec![(px(plot.left), px(plot.bottom)), (px(plot.right), px(plot.bottom))],
            axis,
        ))
        .map_err(draw_err)?;
        area.draw(&PathElement::new(
            vec![(px(plot.left), px(plot.top)), (px(plot.left), px(plot.bottom))],
            axis,
        ))
        .map_err(draw_err)?;
    }

    // Date labels
    let x_label_style = ("sans-serif", spec.tick_font_size)
        .into_font()
        .color(&tick_color)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for tick in state.x_ticks() {
        let x = spec.x_position(tick.index, points.len(), &plot);
        if spec.show_tick_line {
            area.draw(&PathElement::new(
                vec![(px(x), px(plot.bottom)), (px(x), px(plot.bottom + spec.tick_margin))],
                axis,
            ))
            .map_err(draw_err)?;
        }
        area.draw_text(
            &tick.label,
            &x_label_style,
            (px(x), px(plot.bottom + spec.tick_margin)),
        )
        .map_err(draw_err)?;
    }

    // Series
    for series in &spec.series {
        let style = hex_color(series.color).stroke_width(series.stroke_width as u32);
        let path: Vec<(i32, i32)> = points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                (
                    px(spec.x_position(i, points.len(), &plot)),
                    px(spec.y_position(point.value(series.metric) as f64, &plot)),
                )
            })
            .collect();
        area.draw(&PathElement::new(path.clone(), style))
            .map_err(draw_err)?;

        if series.show_dots {
            for &(x, y) in &path {
                area.draw(&Circle::new((x, y), 3, hex_color(series.color).filled()))
                    .map_err(draw_err)?;
            }
        }
    }

    Ok(())
}

fn draw_dashed_hline<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    plot: &PlotArea,
    y: f64,
    dash: [f64; 2],
    style: ShapeStyle,
) -> RenderResult<()> {
    let [on, off] = dash;
    let mut x = plot.left;
    while x < plot.right {
        let end = (x + on).min(plot.right);
        area.draw(&PathElement::new(vec![(px(x), px(y)), (px(end), px(y))], style))
            .map_err(draw_err)?;
        x = end + off;
    }
    Ok(())
}

fn draw_legend<DB: DrawingBackend>(
    spec: &ChartSpec,
    area: &DrawingArea<DB, plotters::coord::Shift>,
    width: f64,
) -> RenderResult<()> {
    const SWATCH: i32 = 14;
    const GAP: i32 = 24;
    const CHAR_WIDTH: f64 = 6.5;

    let (_, band_height) = area.dim_in_pixel();
    let y = band_height as i32 / 2;
    let style = ("sans-serif", spec.tick_font_size)
        .into_font()
        .color(&hex_color("#333333"))
        .pos(Pos::new(HPos::Left, VPos::Center));

    // Approximate widths keep the row centred without font metrics
    let widths: Vec<i32> = spec
        .series
        .iter()
        .map(|s| SWATCH + 6 + (s.name.len() as f64 * CHAR_WIDTH) as i32)
        .collect();
    let total: i32 = widths.iter().sum::<i32>() + GAP * (widths.len() as i32 - 1).max(0);
    let mut x = ((width as i32 - total) / 2).max(0);

    for (series, item_width) in spec.series.iter().zip(widths) {
        let color = hex_color(series.color);
        area.draw(&PathElement::new(
            vec![(x, y), (x + SWATCH, y)],
            color.stroke_width(series.stroke_width as u32),
        ))
        .map_err(draw_err)?;
        area.draw_text(series.name, &style, (x + SWATCH + 6, y))
            .map_err(draw_err)?;
        x += item_width + GAP;
    }

    Ok(())
}

/// Write an SVG document, creating parent directories as needed
pub fn write_svg(path: &Path, svg: &str) -> RenderResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, svg)?;
    tracing::info!("Wrote {} ({} bytes)", path.display(), svg.len());
    Ok(())
}

/// File name used for a timeframe's snapshot
pub fn snapshot_file_name(timeframe: Timeframe) -> String {
    format!("hiring-insights-{}d.svg", timeframe.days())
}

fn px(v: f64) -> i32 {
    v.round() as i32
}

/// Parse `#rgb` or `#rrggbb`; anything else renders black
fn hex_color(hex: &str) -> RGBColor {
    let digits = hex.trim_start_matches('#');
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => digits.to_string(),
    };
    if expanded.len() != 6 || !expanded.is_ascii() {
        return BLACK;
    }
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).unwrap_or(0);
    RGBColor(channel(0), channel(2), channel(4))
}
