//! Dashboard State
//!
//! Reactive state management using Leptos signals. The selected timeframe is
//! the only input; the series is a memo over it, so every change of selection
//! produces a freshly generated sequence.

use hiring_insights::chart::TickDensity;
use hiring_insights::{DataPoint, SeriesGenerator, Timeframe, Tooltip};
use leptos::*;

/// Sequence generated for one selection
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedSeries {
    pub timeframe: Timeframe,
    /// Increments on every regeneration
    pub generation: u64,
    pub points: Vec<DataPoint>,
}

/// Dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Currently selected window
    pub timeframe: RwSignal<Timeframe>,
    /// Window width; `None` until the page is mounted
    pub viewport_width: RwSignal<Option<f64>>,
    /// Day index under the pointer
    pub hovered: RwSignal<Option<usize>>,
    /// Current sequence
    pub series: Memo<GeneratedSeries>,
    /// Categories skipped between labelled date ticks
    pub tick_interval: Memo<usize>,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() {
    provide_context(create_dashboard_state());
}

/// Create the dashboard signals
pub fn create_dashboard_state() -> DashboardState {
    let timeframe = create_rw_signal(Timeframe::default());
    let viewport_width = create_rw_signal(None);
    let hovered = create_rw_signal(None);
    let generation = store_value(0u64);

    let series = create_memo(move |_| {
        let timeframe = timeframe.get();
        generation.update_value(|n| *n += 1);
        let points = SeriesGenerator::new().generate(timeframe.days());

        debug_log(&format!(
            "regenerated series: {} points (generation {})",
            points.len(),
            generation.get_value()
        ));

        GeneratedSeries {
            timeframe,
            generation: generation.get_value(),
            points,
        }
    });

    let density = TickDensity::default();
    let tick_interval = create_memo(move |_| {
        let len = series.with(|s| s.points.len());
        density.interval(len, viewport_width.get())
    });

    DashboardState {
        timeframe,
        viewport_width,
        hovered,
        series,
        tick_interval,
    }
}

impl DashboardState {
    /// Change the selected window and drop any stale hover
    pub fn select(&self, timeframe: Timeframe) {
        if self.timeframe.get_untracked() != timeframe {
            self.hovered.set(None);
            self.timeframe.set(timeframe);
        }
    }

    /// Tooltip for the hovered day, if any
    pub fn tooltip(&self) -> Option<Tooltip> {
        let index = self.hovered.get()?;
        self.series.with(|s| Tooltip::at(&s.points, index))
    }
}

/// Look up the dashboard state from context
pub fn use_dashboard_state() -> DashboardState {
    use_context::<DashboardState>().expect("DashboardState not found")
}

#[cfg(target_arch = "wasm32")]
fn debug_log(message: &str) {
    web_sys::console::debug_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn debug_log(_message: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_series() {
        let runtime = create_runtime();
        let state = create_dashboard_state();

        let series = state.series.get_untracked();
        assert_eq!(series.timeframe, Timeframe::Last30Days);
        assert_eq!(series.points.len(), 30);
        assert_eq!(series.generation, 1);
        assert_eq!(state.tick_interval.get_untracked(), 5);

        runtime.dispose();
    }

    #[test]
    fn test_select_regenerates() {
        let runtime = create_runtime();
        let state = create_dashboard_state();
        state.hovered.set(Some(12));

        state.select(Timeframe::LastYear);

        let series = state.series.get_untracked();
        assert_eq!(series.points.len(), 365);
        assert_eq!(series.generation, 2);
        assert_eq!(state.hovered.get_untracked(), None);

        state.viewport_width.set(Some(375.0));
        assert_eq!(state.tick_interval.get_untracked(), 73);
        state.viewport_width.set(Some(1440.0));
        assert_eq!(state.tick_interval.get_untracked(), 36);

        runtime.dispose();
    }

    #[test]
    fn test_tooltip_follows_hover() {
        let runtime = create_runtime();
        let state = create_dashboard_state();

        assert!(state.tooltip().is_none());
        state.hovered.set(Some(29));
        let tooltip = state.tooltip().unwrap();
        assert_eq!(tooltip.entries.len(), 3);
        state.hovered.set(Some(30));
        assert!(state.tooltip().is_none());

        runtime.dispose();
    }
}
