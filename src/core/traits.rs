//! Core traits
//!
//! Accounts date their movements with "today". The [`Clock`] trait lets the
//! binary use the system calendar while tests and replays pin a fixed date.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date
pub trait Clock {
    /// The date new movements are recorded on
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system calendar
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        FixedClock(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(FixedClock::new(date).today(), date);
    }
}
