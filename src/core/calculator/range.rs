//! Calendar ranges used for payroll summaries.

use crate::errors::{AppError, AppResult};
use crate::utils::date::{first_of_month, last_of_month, period_bounds};
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Inclusive pair of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered, both ends included.
    pub fn days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

/// Monday to Sunday of the week containing `today`.
pub fn week_range(today: NaiveDate) -> DateRange {
    let back = today.weekday().num_days_from_monday() as u64;
    let monday = today.checked_sub_days(Days::new(back)).unwrap_or(today);
    let sunday = monday.checked_add_days(Days::new(6)).unwrap_or(monday);
    DateRange::new(monday, sunday)
}

/// First to last day of the month containing `today`.
pub fn month_range(today: NaiveDate) -> DateRange {
    DateRange::new(first_of_month(today), last_of_month(today))
}

/// First to last day of the month before the one containing `today`.
pub fn last_month_range(today: NaiveDate) -> DateRange {
    let prev_end = first_of_month(today).pred_opt().unwrap_or(today);
    DateRange::new(first_of_month(prev_end), prev_end)
}

/// Named or literal range selected on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeSpec {
    Week,
    Month,
    LastMonth,
    Custom(DateRange),
}

impl RangeSpec {
    /// Accepts `week`, `month`, `last-month`, a period (`YYYY-MM-DD`,
    /// `YYYY-MM`, `YYYY`) or `FROM:TO` where each side is a period.
    pub fn parse(s: &str) -> AppResult<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "week" | "this-week" => return Ok(RangeSpec::Week),
            "month" | "this-month" => return Ok(RangeSpec::Month),
            "last-month" | "lastmonth" => return Ok(RangeSpec::LastMonth),
            _ => {}
        }

        if let Some((from, to)) = s.split_once(':') {
            let (start, _) = period_bounds(from).map_err(AppError::InvalidRange)?;
            let (_, end) = period_bounds(to).map_err(AppError::InvalidRange)?;
            if end < start {
                return Err(AppError::InvalidRange(format!(
                    "'{}' ends before it starts",
                    s
                )));
            }
            return Ok(RangeSpec::Custom(DateRange::new(start, end)));
        }

        let (start, end) = period_bounds(s).map_err(AppError::InvalidRange)?;
        Ok(RangeSpec::Custom(DateRange::new(start, end)))
    }

    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        match self {
            RangeSpec::Week => week_range(today),
            RangeSpec::Month => month_range(today),
            RangeSpec::LastMonth => last_month_range(today),
            RangeSpec::Custom(r) => *r,
        }
    }

    pub fn label(&self) -> String {
        match self {
            RangeSpec::Week => "This week".to_string(),
            RangeSpec::Month => "This month".to_string(),
            RangeSpec::LastMonth => "Last month".to_string(),
            RangeSpec::Custom(r) => r.to_string(),
        }
    }
}
