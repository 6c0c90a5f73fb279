//! Random-walk series generator
//!
//! Produces one `DataPoint` per day for a requested window. Each metric starts
//! from a random level, drifts by a per-metric growth rate and a shared daily
//! perturbation, and is clamped into its range.
//!
//! The random source is a type parameter: `SeriesGenerator::new()` uses the
//! thread-local generator, `SeriesGenerator::seeded(n)` is reproducible.

use chrono::{Duration, NaiveDate};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::clock::{Clock, SystemClock};
use crate::timeframe::Timeframe;

use super::types::{DataPoint, Metric};

/// Bound of the shared daily perturbation, applied as [-MAX, MAX]
pub const MAX_PERTURBATION: f64 = 2.0;

/// Running values and growth rates of the three metrics
///
/// Arrays are indexed by `Metric::index()`.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomWalk {
    levels: [f64; 3],
    growth: [f64; 3],
}

impl RandomWalk {
    /// Draw initial levels, then growth rates, from each metric's ranges
    pub fn seed<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut levels = [0.0; 3];
        let mut growth = [0.0; 3];

        for metric in Metric::ALL {
            levels[metric.index()] = rng.gen_range(metric.seed_range());
        }
        for metric in Metric::ALL {
            growth[metric.index()] = rng.gen_range(metric.growth_range());
        }

        Self { levels, growth }
    }

    /// Current running values
    pub fn levels(&self) -> [f64; 3] {
        self.levels
    }

    /// Per-day growth increments
    pub fn growth(&self) -> [f64; 3] {
        self.growth
    }

    /// Advance one day and return the new (clamped, unrounded) levels
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> [f64; 3] {
        let perturbation = rng.gen_range(-MAX_PERTURBATION..=MAX_PERTURBATION);

        for metric in Metric::ALL {
            let i = metric.index();
            let next = self.levels[i] + self.growth[i] + perturbation * metric.perturbation_scale();
            self.levels[i] = metric.clamp(next);
        }

        self.levels
    }

    /// Levels rounded to whole percentages
    pub fn rounded(&self) -> [u8; 3] {
        self.levels.map(|v| v.round() as u8)
    }
}

/// Generator of daily hiring-metric sequences
#[derive(Debug, Clone)]
pub struct SeriesGenerator<R = ThreadRng> {
    rng: R,
}

impl SeriesGenerator<ThreadRng> {
    /// Generator backed by the thread-local random source
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for SeriesGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesGenerator<StdRng> {
    /// Reproducible generator for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SeriesGenerator<R> {
    /// Generator drawing from the given random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate `days` points ending on the host's current date
    pub fn generate(&mut self, days: usize) -> Vec<DataPoint> {
        self.generate_with(days, &SystemClock)
    }

    /// Generate `days` points ending on the clock's current date
    ///
    /// The clock is read exactly once.
    pub fn generate_with<C: Clock + ?Sized>(&mut self, days: usize, clock: &C) -> Vec<DataPoint> {
        let anchor = clock.today();
        self.generate_at(days, anchor)
    }

    /// Generate the full sequence for a timeframe anchored on `anchor`
    pub fn generate_timeframe(&mut self, timeframe: Timeframe, anchor: NaiveDate) -> Vec<DataPoint> {
        self.generate_at(timeframe.days(), anchor)
    }

    /// Generate `days` points, oldest first, the last one dated `anchor`
    pub fn generate_at(&mut self, days: usize, anchor: NaiveDate) -> Vec<DataPoint> {
        let mut walk = RandomWalk::seed(&mut self.rng);
        let mut points = Vec::with_capacity(days);

        for offset in (0..days).rev() {
            let day = anchor - Duration::days(offset as i64);
            walk.step(&mut self.rng);
            points.push(DataPoint::new(day, walk.rounded()));
        }

        tracing::trace!(days, %anchor, "generated series");
        points
    }
}


#[cfg(test)]
mod property_based_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_every_point_in_range(seed in any::<u64>(), tf_index in 0usize..4) {
            let tf = Timeframe::all()[tf_index];
            let anchor = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
            let points = SeriesGenerator::seeded(seed).generate_timeframe(tf, anchor);

            prop_assert_eq!(points.len(), tf.days());
            prop_assert_eq!(points.last().unwrap().day, anchor);
            for point in &points {
                prop_assert!((40..=90).contains(&point.application_to_interview_rate));
                prop_assert!((50..=95).contains(&point.offer_acceptance_rate));
                prop_assert!((5..=40).contains(&point.rejection_rate));
            }
        }
    }
}
