//! Dashboard State
//!
//! Owns the selected timeframe and the single current sequence. A new
//! selection replaces the sequence wholesale; nothing is cached between
//! selections. Everything the chart needs (tick interval, labels, tooltip,
//! legend) is derived from this state on demand.

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

use crate::chart::{legend_entries, x_tick_indices, y_ticks, ChartSpec, LegendEntry, TickDensity, Tooltip};
use crate::clock::{Clock, SystemClock};
use crate::config::DashboardConfig;
use crate::series::{DataPoint, SeriesGenerator};
use crate::timeframe::Timeframe;

/// Labelled x-axis position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XTick {
    pub index: usize,
    pub label: String,
}

/// Selected timeframe plus the sequence generated for it
pub struct DashboardState<R = ThreadRng, C = SystemClock> {
    timeframe: Timeframe,
    points: Vec<DataPoint>,
    viewport_width: Option<f64>,
    density: TickDensity,
    chart: ChartSpec,
    generator: SeriesGenerator<R>,
    clock: C,
    generation: u64,
}

impl DashboardState<ThreadRng, SystemClock> {
    /// State on the host clock with unseeded randomness
    pub fn new(timeframe: Timeframe) -> Self {
        Self::with_parts(timeframe, SeriesGenerator::new(), SystemClock, TickDensity::default())
    }

    /// State built from the dashboard section of the configuration
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::with_parts(
            config.default_timeframe,
            SeriesGenerator::new(),
            SystemClock,
            config.tick_density(),
        )
    }
}

impl Default for DashboardState<ThreadRng, SystemClock> {
    fn default() -> Self {
        Self::new(Timeframe::default())
    }
}

impl<C: Clock> DashboardState<StdRng, C> {
    /// Reproducible state for a fixed seed and clock
    pub fn seeded(timeframe: Timeframe, seed: u64, clock: C) -> Self {
        Self::with_parts(timeframe, SeriesGenerator::seeded(seed), clock, TickDensity::default())
    }
}

impl<R: Rng, C: Clock> DashboardState<R, C> {
    /// Assemble a state and generate its first sequence
    pub fn with_parts(
        timeframe: Timeframe,
        generator: SeriesGenerator<R>,
        clock: C,
        density: TickDensity,
    ) -> Self {
        let mut state = Self {
            timeframe,
            points: Vec::new(),
            viewport_width: None,
            density,
            chart: ChartSpec::default(),
            generator,
            clock,
            generation: 0,
        };
        state.regenerate();
        state
    }

    /// Currently selected timeframe
    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Current sequence, oldest first
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn chart(&self) -> &ChartSpec {
        &self.chart
    }

    /// Replace the chart layout and styling
    pub fn set_chart(&mut self, chart: ChartSpec) {
        self.chart = chart;
    }

    /// Number of sequences generated so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Last measured surface width, if any
    pub fn viewport_width(&self) -> Option<f64> {
        self.viewport_width
    }

    /// Select a timeframe
    ///
    /// Returns `true` when the selection changed and a new sequence was
    /// generated. Re-selecting the current value keeps the sequence.
    pub fn select_timeframe(&mut self, timeframe: Timeframe) -> bool {
        if timeframe == self.timeframe {
            return false;
        }
        self.timeframe = timeframe;
        self.regenerate();
        true
    }

    /// Discard the current sequence and generate a fresh one
    pub fn refresh(&mut self) {
        self.regenerate();
    }

    /// Record the measured width of the rendering surface
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = Some(width);
    }

    /// Categories skipped between labelled x ticks
    pub fn tick_interval(&self) -> usize {
        self.density.interval(self.points.len(), self.viewport_width)
    }

    /// Labelled x-axis positions for the current sequence
    pub fn x_ticks(&self) -> Vec<XTick> {
        x_tick_indices(self.points.len(), self.tick_interval())
            .into_iter()
            .map(|index| XTick {
                index,
                label: self.points[index].date.clone(),
            })
            .collect()
    }

    /// Value-axis gridlines
    pub fn y_ticks(&self) -> Vec<u32> {
        y_ticks()
    }

    /// Tooltip for the hovered day, if the index is inside the sequence
    pub fn tooltip_at(&self, index: usize) -> Option<Tooltip> {
        Tooltip::at(&self.points, index)
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        legend_entries()
    }

    fn regenerate(&mut self) {
        self.points = self.generator.generate_with(self.timeframe.days(), &self.clock);
        self.generation += 1;

        tracing::debug!(
            timeframe = self.timeframe.days(),
            points = self.points.len(),
            generation = self.generation,
            "regenerated series"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
    }

    fn state(timeframe: Timeframe) -> DashboardState<StdRng, FixedClock> {
        DashboardState::seeded(timeframe, 42, clock())
    }

    #[test]
    fn test_initial_generation() {
        let state = state(Timeframe::Last30Days);

        assert_eq!(state.points().len(), 30);
        assert_eq!(state.generation(), 1);
        assert_eq!(state.points()[0].date, "Jun 1");
        assert_eq!(state.points()[29].date, "Jun 30");
    }

    #[test]
    fn test_select_regenerates_with_new_length() {
        let mut state = state(Timeframe::Last30Days);

        for tf in [Timeframe::Last90Days, Timeframe::LastYear, Timeframe::Last6Months] {
            let before = state.generation();
            assert!(state.select_timeframe(tf));
            assert_eq!(state.timeframe(), tf);
            assert_eq!(state.points().len(), tf.days());
            assert_eq!(state.generation(), before + 1);
            assert_eq!(state.points().last().unwrap().day, clock().0);
        }
    }

    #[test]
    fn test_select_completes_regeneration_before_returning() {
        let mut state = state(Timeframe::Last30Days);

        state.select_timeframe(Timeframe::LastYear);
        let ticks = state.x_ticks();

        assert_eq!(state.generation(), 2);
        assert_eq!(state.points().len(), 365);
        assert_eq!(ticks.last().unwrap().index, 360);
        assert!(state.tooltip_at(364).is_some());
    }

    #[test]
    fn test_switching_back_does_not_reuse() {
        let mut state = state(Timeframe::Last30Days);
        let first = state.points().to_vec();

        state.select_timeframe(Timeframe::Last90Days);
        state.select_timeframe(Timeframe::Last30Days);

        assert_eq!(state.generation(), 3);
        assert_eq!(state.points().len(), 30);
        assert_ne!(state.points(), first.as_slice());
    }

    #[test]
    fn test_reselect_is_noop_and_refresh_forces() {
        let mut state = state(Timeframe::Last90Days);
        let before = state.points().to_vec();

        assert!(!state.select_timeframe(Timeframe::Last90Days));
        assert_eq!(state.generation(), 1);
        assert_eq!(state.points(), before.as_slice());

        state.refresh();
        assert_eq!(state.generation(), 2);
        assert_eq!(state.points().len(), 90);
    }

    #[test]
    fn test_tick_interval_follows_viewport() {
        let mut state = state(Timeframe::Last90Days);
        assert_eq!(state.viewport_width(), None);
        assert_eq!(state.tick_interval(), 5);

        state.set_viewport_width(375.0);
        assert_eq!(state.tick_interval(), 18);

        state.set_viewport_width(1280.0);
        assert_eq!(state.tick_interval(), 9);

        state.select_timeframe(Timeframe::LastYear);
        assert_eq!(state.tick_interval(), 36);
    }

    #[test]
    fn test_x_ticks_carry_labels() {
        let mut state = state(Timeframe::Last30Days);
        state.set_viewport_width(1024.0);

        let ticks = state.x_ticks();
        let indices: Vec<_> = ticks.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 4, 8, 12, 16, 20, 24, 28]);
        assert_eq!(ticks[0].label, "Jun 1");
        assert_eq!(ticks[1].label, "Jun 5");
    }

    #[test]
    fn test_tooltip_and_legend() {
        let state = state(Timeframe::Last30Days);

        let tooltip = state.tooltip_at(29).unwrap();
        assert_eq!(tooltip.label, "Jun 30");
        assert_eq!(tooltip.entries.len(), 3);
        assert!(state.tooltip_at(30).is_none());

        assert_eq!(state.legend().len(), 3);
        assert_eq!(state.y_ticks(), vec![0, 13, 25, 38, 50, 63, 75, 88, 100]);
    }

    #[test]
    fn test_from_config() {
        let config = DashboardConfig {
            default_timeframe: Timeframe::Last6Months,
            narrow_viewport_width: 1000.0,
            fallback_tick_interval: 2,
        };
        let mut state = DashboardState::from_config(&config);

        assert_eq!(state.points().len(), 180);
        assert_eq!(state.tick_interval(), 2);
        state.set_viewport_width(900.0);
        assert_eq!(state.tick_interval(), 36);
    }
}
