//! Hiring Insights CLI
//!
//! Command-line interface for the hiring dashboard:
//! - Generate series
//! - Inspect chart configuration
//! - Render SVG snapshots
//! - Write a default config file

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use std::path::PathBuf;

use hiring_insights::render::snapshot_file_name;
use hiring_insights::{
    render_svg, to_csv, to_json, write_svg, Clock, Config, DashboardState, DataPoint, FixedClock,
    Metric, RenderOptions, SeriesGenerator, SystemClock, Timeframe,
};

#[derive(Parser)]
#[command(name = "hiring-insights")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Synthetic hiring-funnel metrics dashboard")]
#[command(long_about = "Hiring Insights generates synthetic recruiting metrics.\nGenerate series, inspect chart settings, and render snapshots.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a series and print it
    Generate {
        #[command(flatten)]
        series: SeriesArgs,
    },

    /// List the selectable timeframes
    Timeframes,

    /// Show axis ticks, legend and an optional tooltip
    Chart {
        #[command(flatten)]
        series: SeriesArgs,
        /// Width of the rendering surface in pixels (default: unknown)
        #[arg(long)]
        viewport_width: Option<f64>,
        /// Day index to show the tooltip for (table or json output)
        #[arg(long)]
        hover: Option<usize>,
    },

    /// Render the chart to an SVG file
    Render {
        #[command(flatten)]
        series: SeriesArgs,
        /// Width used for tick density (default: the image width)
        #[arg(long)]
        viewport_width: Option<f64>,
        /// Output file (default: <output_dir>/hiring-insights-<days>d.svg)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Image width in pixels
        #[arg(long)]
        width: Option<u32>,
        /// Image height in pixels
        #[arg(long)]
        height: Option<u32>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Options shared by every command that generates a series
#[derive(Args)]
pub struct SeriesArgs {
    /// Window length: 30, 90, 180 or 365 (default: from config)
    #[arg(short, long)]
    timeframe: Option<Timeframe>,
    /// Seed for a reproducible series
    #[arg(long)]
    seed: Option<u64>,
    /// Date of the newest point, YYYY-MM-DD (default: today)
    #[arg(long)]
    anchor: Option<NaiveDate>,
}

impl SeriesArgs {
    fn build_state(&self, config: &Config) -> DashboardState<StdRng, FixedClock> {
        let timeframe = self.timeframe.unwrap_or(config.dashboard.default_timeframe);
        let seed = self.seed.unwrap_or_else(rand::random);
        let anchor = self.anchor.unwrap_or_else(|| SystemClock.today());

        tracing::debug!(seed, %anchor, "building dashboard state");
        DashboardState::with_parts(
            timeframe,
            SeriesGenerator::seeded(seed),
            FixedClock(anchor),
            config.dashboard.tick_density(),
        )
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    hiring_insights::logging::init(&config.logging);

    match cli.command {
        Commands::Generate { series } => {
            let state = series.build_state(&config);
            let points = state.points();

            match cli.format {
                OutputFormat::Json => println!("{}", to_json(points)?),
                OutputFormat::Csv => print!("{}", to_csv(points)?),
                OutputFormat::Table => print_table(points),
            }
        }

        Commands::Timeframes => match cli.format {
            OutputFormat::Json => {
                let list: Vec<_> = Timeframe::all()
                    .iter()
                    .map(|tf| serde_json::json!({ "value": tf.value(), "label": tf.label(), "days": tf.days() }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&list)?);
            }
            OutputFormat::Csv => {
                println!("value,label,days");
                for tf in Timeframe::all() {
                    println!("{},{},{}", tf.value(), tf.label(), tf.days());
                }
            }
            OutputFormat::Table => {
                println!("{:<8} {:<16} {}", "Value", "Label", "Days");
                println!("{}", "-".repeat(32));
                for tf in Timeframe::all() {
                    let marker = if *tf == config.dashboard.default_timeframe { " (default)" } else { "" };
                    println!("{:<8} {:<16} {}{}", tf.value(), tf.label(), tf.days(), marker);
                }
            }
        },

        Commands::Chart {
            series,
            viewport_width,
            hover,
        } => {
            validate_chart_format(cli.format, hover)?;
            let mut state = series.build_state(&config);
            if let Some(width) = viewport_width {
                state.set_viewport_width(width);
            }
            let tooltip = match hover {
                Some(index) => Some(
                    state
                        .tooltip_at(index)
                        .with_context(|| format!("no day at index {} (series has {} points)", index, state.points().len()))?,
                ),
                None => None,
            };

            match cli.format {
                OutputFormat::Json => {
                    let x_ticks: Vec<_> = state
                        .x_ticks()
                        .into_iter()
                        .map(|t| serde_json::json!({ "index": t.index, "label": t.label }))
                        .collect();
                    let summary = serde_json::json!({
                        "timeframe": state.timeframe(),
                        "points": state.points().len(),
                        "viewportWidth": state.viewport_width(),
                        "tickInterval": state.tick_interval(),
                        "xTicks": x_ticks,
                        "yTicks": state.y_ticks(),
                        "legend": state.legend(),
                        "tooltip": tooltip,
                        "chart": state.chart(),
                    });
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                }
                OutputFormat::Csv => {
                    println!("index,label");
                    for tick in state.x_ticks() {
                        println!("{},{}", tick.index, tick.label);
                    }
                }
                OutputFormat::Table => {
                    let width = state
                        .viewport_width()
                        .map(|w| format!("{}px", w))
                        .unwrap_or_else(|| "unknown".to_string());
                    println!("Timeframe:     {}", state.timeframe());
                    println!("Points:        {}", state.points().len());
                    println!("Viewport:      {}", width);
                    println!("Tick interval: {}", state.tick_interval());
                    println!();

                    let labels: Vec<_> = state.x_ticks().into_iter().map(|t| t.label).collect();
                    println!("X ticks: {}", labels.join(", "));
                    let y: Vec<_> = state.y_ticks().into_iter().map(|v| format!("{}%", v)).collect();
                    println!("Y ticks: {}", y.join(", "));
                    println!();

                    println!("Legend:");
                    for entry in state.legend() {
                        println!("  {} {}", entry.color, entry.name);
                    }

                    if let Some(tooltip) = tooltip {
                        println!();
                        println!("Tooltip:");
                        for line in tooltip.lines() {
                            println!("  {}", line);
                        }
                    }
                }
            }
        }

        Commands::Render {
            series,
            viewport_width,
            output,
            width,
            height,
        } => {
            let mut state = series.build_state(&config);
            let options = RenderOptions::with_size(
                width.unwrap_or(config.render.width),
                height.unwrap_or(config.render.height),
            );
            state.set_viewport_width(viewport_width.unwrap_or(options.width as f64));

            let path = output.unwrap_or_else(|| {
                PathBuf::from(&config.render.output_dir).join(snapshot_file_name(state.timeframe()))
            });
            let svg = render_svg(&state, &options)?;
            write_svg(&path, &svg).with_context(|| format!("writing {:?}", path))?;
            println!("Chart written to {:?}", path);
        }

        Commands::Config { output } => {
            let config = hiring_insights::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// CSV chart output is the x-tick table only and has no place for a tooltip
fn validate_chart_format(format: OutputFormat, hover: Option<usize>) -> anyhow::Result<()> {
    if format == OutputFormat::Csv && hover.is_some() {
        anyhow::bail!("--hover is not supported with --format csv; use table or json");
    }
    Ok(())
}

fn print_table(points: &[DataPoint]) {
    if points.is_empty() {
        println!("No data");
        return;
    }

    // Header
    print!("{:<12}", "Date");
    for metric in Metric::ALL {
        print!(" | {:<30}", metric.display_name());
    }
    println!();

    // Separator
    println!("{}", "-".repeat(12 + Metric::ALL.len() * 33));

    // Data rows
    for point in points {
        print!("{:<12}", point.day.format("%Y-%m-%d").to_string());
        for metric in Metric::ALL {
            print!(" | {:<30}", format!("{}%", point.value(metric)));
        }
        println!();
    }
}
