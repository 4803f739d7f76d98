//! Range totals and wage summation.

use crate::core::calculator::hours::calc_hours_at;
use crate::core::calculator::range::{DateRange, last_month_range, month_range, week_range};
use crate::core::time_source::Clock;
use crate::core::timesheet::TimeSheet;
use crate::models::time_entry::TimeEntry;
use crate::models::wage_summary::{WageRow, WageSummary};
use crate::store::KeyValueStore;
use chrono::NaiveDateTime;

/// Sum of hours over the employee's closed entries dated inside `range`.
/// Open entries contribute nothing until they are closed.
pub fn total_hours(
    entries: &[TimeEntry],
    employee_id: &str,
    range: &DateRange,
    now: NaiveDateTime,
) -> f64 {
    entries
        .iter()
        .filter(|e| e.employee_id == employee_id && !e.is_open() && range.contains(e.date))
        .map(|e| calc_hours_at(e, now))
        .sum()
}

impl<S: KeyValueStore, C: Clock> TimeSheet<S, C> {
    pub fn total_hours_for_employee(&self, employee_id: &str, range: &DateRange) -> f64 {
        total_hours(&self.entries(), employee_id, range, self.now())
    }

    /// Hours and wage per employee over `range`, with grand totals.
    pub fn wage_summary(&self, range: &DateRange) -> WageSummary {
        let entries = self.entries();
        let now = self.now();

        let rows = self
            .employees()
            .iter()
            .map(|emp| WageRow::new(emp, total_hours(&entries, &emp.id, range, now)))
            .collect();

        WageSummary::from_rows(*range, rows)
    }

    pub fn week_range(&self) -> DateRange {
        week_range(self.today())
    }

    pub fn month_range(&self) -> DateRange {
        month_range(self.today())
    }

    pub fn last_month_range(&self) -> DateRange {
        last_month_range(self.today())
    }
}
