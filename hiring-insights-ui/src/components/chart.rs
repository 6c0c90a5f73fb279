//! Chart Component
//!
//! Hiring-metrics line chart using HTML5 Canvas. Layout and styling come from
//! `ChartSpec`, the same configuration the SVG snapshots use.

use hiring_insights::chart::{format_percent, x_tick_indices, y_ticks, ChartSpec, PlotArea};
use hiring_insights::DataPoint;
use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::components::tooltip::ChartTooltip;
use crate::state::use_dashboard_state;

/// Drawing-buffer size of the canvas; CSS scales it to the container
const CANVAS_WIDTH: u32 = 960;
const CANVAS_HEIGHT: u32 = 360;

const CURSOR_COLOR: &str = "#cccccc";
const ACTIVE_DOT_RADIUS: f64 = 4.0;

/// Hiring-metrics chart component
#[component]
pub fn Chart() -> impl IntoView {
    let state = use_dashboard_state();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let spec = store_value(ChartSpec::default());

    // Redraw when the series, tick density or hover changes
    create_effect(move |_| {
        let interval = state.tick_interval.get();
        let hovered = state.hovered.get();
        state.series.with(|series| {
            if let Some(canvas) = canvas_ref.get() {
                spec.with_value(|spec| draw_chart(&canvas, spec, &series.points, interval, hovered));
            }
        });
    });

    let on_mouse_move = move |ev: MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let x = canvas_x(ev.offset_x() as f64, canvas.client_width() as f64, canvas.width() as f64);
        let len = state.series.with_untracked(|s| s.points.len());
        let index = spec.with_value(|spec| {
            let area = spec.plot_area(canvas.width() as f64, canvas.height() as f64);
            spec.index_at(x, len, &area)
        });
        if state.hovered.get_untracked() != index {
            state.hovered.set(index);
        }
    };

    let on_mouse_leave = move |_: MouseEvent| state.hovered.set(None);

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH
                height=CANVAS_HEIGHT
                class="w-full h-72 md:h-96"
                on:mousemove=on_mouse_move
                on:mouseleave=on_mouse_leave
            />

            <ChartTooltip />
        </div>
    }
}

/// Map a CSS-pixel offset to drawing-buffer pixels
fn canvas_x(offset_x: f64, client_width: f64, canvas_width: f64) -> f64 {
    if client_width <= 0.0 {
        return offset_x;
    }
    offset_x * canvas_width / client_width
}

/// Draw the chart on canvas
fn draw_chart(
    canvas: &HtmlCanvasElement,
    spec: &ChartSpec,
    points: &[DataPoint],
    tick_interval: usize,
    hovered: Option<usize>,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let area = spec.plot_area(width, height);
    let font = format!("{}px sans-serif", spec.tick_font_size);

    // Clear canvas
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Horizontal grid lines and value labels
    let dash = js_sys::Array::of2(&spec.grid_dash[0].into(), &spec.grid_dash[1].into());
    ctx.set_font(&font);
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    for tick in y_ticks() {
        let y = spec.y_position(tick as f64, &area);

        ctx.set_stroke_style(&spec.grid_color.into());
        ctx.set_line_width(1.0);
        let _ = ctx.set_line_dash(&dash);
        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(area.right, y);
        ctx.stroke();

        ctx.set_fill_style(&spec.tick_color.into());
        let _ = ctx.fill_text(&format_percent(tick), area.left - spec.tick_margin, y);
    }
    let _ = ctx.set_line_dash(&js_sys::Array::new());

    // Axis lines are off by default; axes are labels only
    ctx.set_stroke_style(&spec.tick_color.into());
    ctx.set_line_width(1.0);
    if spec.show_axis_line {
        ctx.begin_path();
        ctx.move_to(area.left, area.top);
        ctx.line_to(area.left, area.bottom);
        ctx.line_to(area.right, area.bottom);
        ctx.stroke();
    }

    // Date labels
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    ctx.set_fill_style(&spec.tick_color.into());
    for index in x_tick_indices(points.len(), tick_interval) {
        let x = spec.x_position(index, points.len(), &area);
        if spec.show_tick_line {
            ctx.begin_path();
            ctx.move_to(x, area.bottom);
            ctx.line_to(x, area.bottom + spec.tick_margin);
            ctx.stroke();
        }
        let _ = ctx.fill_text(&points[index].date, x, area.bottom + spec.tick_margin);
    }

    // Hover cursor
    if let Some(index) = hovered.filter(|&i| i < points.len()) {
        let x = spec.x_position(index, points.len(), &area);
        ctx.set_stroke_style(&CURSOR_COLOR.into());
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(x, area.top);
        ctx.line_to(x, area.bottom);
        ctx.stroke();
    }

    // Series
    for series in &spec.series {
        if points.is_empty() {
            break;
        }
        ctx.set_stroke_style(&series.color.into());
        ctx.set_line_width(series.stroke_width);
        ctx.begin_path();

        for (i, point) in points.iter().enumerate() {
            let (x, y) = point_position(spec, &area, points.len(), i, point.value(series.metric));
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();

        // Active dot on the hovered day
        if let Some(index) = hovered.filter(|&i| i < points.len()) {
            let (x, y) = point_position(spec, &area, points.len(), index, points[index].value(series.metric));
            fill_circle(&ctx, x, y, ACTIVE_DOT_RADIUS, series.color);
        }
    }
}

fn point_position(spec: &ChartSpec, area: &PlotArea, len: usize, index: usize, value: u8) -> (f64, f64) {
    (
        spec.x_position(index, len, area),
        spec.y_position(value as f64, area),
    )
}

fn fill_circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, color: &str) {
    ctx.set_fill_style(&JsValue::from_str(color));
    ctx.begin_path();
    let _ = ctx.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
    ctx.fill();
}
