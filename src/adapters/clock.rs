//! Implements ClockPort. System local date, or a fixed date from config/tests.

use crate::ports::ClockPort;
use chrono::{Local, NaiveDate};

pub struct SystemClock;

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always the same day. Used by `ADVENT_TODAY` and tests.
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl ClockPort for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
