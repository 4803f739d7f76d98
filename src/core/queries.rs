//! Read-only lookups over the stored collections.

use crate::core::calculator::hours::calc_hours_at;
use crate::core::calculator::range::DateRange;
use crate::core::time_source::Clock;
use crate::core::timesheet::TimeSheet;
use crate::models::employee::Employee;
use crate::models::status::EmployeeStatus;
use crate::models::time_entry::TimeEntry;
use crate::store::KeyValueStore;

impl<S: KeyValueStore, C: Clock> TimeSheet<S, C> {
    /// Entries of the employee whose logical date is today, in stored order.
    pub fn today_entries(&self, employee_id: &str) -> Vec<TimeEntry> {
        let today = self.today();
        self.entries()
            .into_iter()
            .filter(|e| e.employee_id == employee_id && e.date == today)
            .collect()
    }

    /// Entries of every employee with a date inside `range` (inclusive).
    pub fn entries_in_range(&self, range: &DateRange) -> Vec<TimeEntry> {
        self.entries()
            .into_iter()
            .filter(|e| range.contains(e.date))
            .collect()
    }

    /// First employee whose PIN equals `pin`.
    pub fn find_by_pin(&self, pin: &str) -> Option<Employee> {
        self.employees()
            .into_iter()
            .find(|e| e.pin.as_deref() == Some(pin))
    }

    /// The employee's open entry, whatever its date.
    pub fn find_open_entry(&self, employee_id: &str) -> Option<TimeEntry> {
        self.entries()
            .into_iter()
            .find(|e| e.employee_id == employee_id && e.is_open())
    }

    /// Hours of `entry` evaluated at the current moment.
    pub fn calc_hours(&self, entry: &TimeEntry) -> f64 {
        calc_hours_at(entry, self.now())
    }

    pub fn employee_status(&self, employee_id: &str) -> EmployeeStatus {
        let entries = self.today_entries(employee_id);
        match entries.last() {
            None => EmployeeStatus::Idle,
            Some(last) if last.is_open() => EmployeeStatus::Working(last.clone()),
            Some(_) => EmployeeStatus::Done,
        }
    }

    /// Today's hours for the employee, the running shift included.
    pub fn today_total(&self, employee_id: &str) -> f64 {
        let now = self.now();
        self.today_entries(employee_id)
            .iter()
            .map(|e| calc_hours_at(e, now))
            .sum()
    }
}
