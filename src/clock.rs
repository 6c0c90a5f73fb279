//! Host clock access
//!
//! The generator anchors its newest point on "today". Reading the date goes
//! through this trait so callers can pin it.

use chrono::NaiveDate;

/// Source of the anchor date for a generation call
pub trait Clock {
    /// Current calendar date
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date of the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock that always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
