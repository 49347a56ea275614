use chrono::{DateTime, Datelike, Duration, Utc};
use std::sync::RwLock;

use crate::errors::{Result, ValidationError};

/// Source of "now" for anything that compares against wall-clock time.
///
/// The rate cache and the budget service take a clock so that freshness
/// windows and "current month" can be driven from tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.now.write() {
            *now += by;
        }
    }

    pub fn set(&self, to: DateTime<Utc>) {
        if let Ok(mut now) = self.now.write() {
            *now = to;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        match self.now.read() {
            Ok(now) => *now,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// Returns the (year, month) of `instant`.
pub fn year_month_of(instant: DateTime<Utc>) -> (i32, u32) {
    (instant.year(), instant.month())
}

/// Parses a `YYYY-MM` month key.
pub fn parse_year_month(value: &str) -> Result<(i32, u32)> {
    let invalid = || {
        ValidationError::InvalidInput(format!(
            "Month must be formatted as YYYY-MM, got '{}'",
            value
        ))
    };

    let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 || month.len() != 2 {
        return Err(invalid().into());
    }

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid().into());
    }

    Ok((year, month))
}
