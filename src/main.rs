//! Hiring Insights snapshot renderer
//!
//! Renders the dashboard chart for every timeframe into the configured
//! output directory.

use anyhow::Context;
use hiring_insights::render::snapshot_file_name;
use hiring_insights::{render_svg, write_svg, Config, DashboardState, RenderOptions, Timeframe};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    hiring_insights::logging::init(&config.logging);

    tracing::info!("Hiring Insights v{}", env!("CARGO_PKG_VERSION"));

    let output_dir = PathBuf::from(&config.render.output_dir);
    tracing::info!("Output directory: {:?}", output_dir);

    let options = RenderOptions::with_size(config.render.width, config.render.height);
    let mut state = DashboardState::from_config(&config.dashboard);
    state.set_viewport_width(config.render.width as f64);

    for &timeframe in Timeframe::all() {
        state.select_timeframe(timeframe);

        let svg = render_svg(&state, &options)
            .with_context(|| format!("rendering {}", timeframe))?;
        let path = output_dir.join(snapshot_file_name(timeframe));
        write_svg(&path, &svg).with_context(|| format!("writing {:?}", path))?;

        tracing::info!(
            "{}: {} points, tick interval {}",
            timeframe,
            state.points().len(),
            state.tick_interval()
        );
    }

    tracing::info!("Rendered {} snapshots", Timeframe::all().len());
    Ok(())
}
