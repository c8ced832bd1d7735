//! Source of the current date.

use chrono::{NaiveDate, Utc};

/// Supplies "today" for urgency classification.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the host clock as a UTC+0 civil date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date. Backs `--today` and the tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
