//! Calendar-month reporting periods.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::WorkflowError;

const MIN_YEAR: i32 = 1970;
const MAX_YEAR: i32 = 9999;

/// One calendar month, identified by its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReportPeriod {
    first_day: NaiveDate,
}

impl ReportPeriod {
    /// Validates a (month, year) pair from request parameters.
    pub fn new(month: u32, year: i32) -> Result<Self, WorkflowError> {
        if !(1..=12).contains(&month) {
            return Err(WorkflowError::validation(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(WorkflowError::validation(format!(
                "year must be between {} and {}, got {}",
                MIN_YEAR, MAX_YEAR, year
            )));
        }

        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| WorkflowError::validation(format!("invalid period {}-{}", year, month)))
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// Inclusive lower bound.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Exclusive upper bound (first day of the following month).
    pub fn end_exclusive(&self) -> Result<NaiveDate, WorkflowError> {
        self.first_day
            .checked_add_months(Months::new(1))
            .ok_or_else(|| WorkflowError::validation("period end is out of range"))
    }

    pub fn previous(&self) -> Result<Self, WorkflowError> {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(|first_day| Self { first_day })
            .ok_or_else(|| WorkflowError::validation("period start is out of range"))
    }

    /// The `count` months ending with this one, oldest first.
    pub fn trailing(&self, count: usize) -> Result<Vec<Self>, WorkflowError> {
        let mut periods = Vec::with_capacity(count);
        let mut current = *self;
        for index in 0..count {
            periods.push(current);
            if index + 1 < count {
                current = current.previous()?;
            }
        }
        periods.reverse();
        Ok(periods)
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
