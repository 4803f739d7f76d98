//! Clock transitions and manual corrections of time entries.

use crate::core::time_source::Clock;
use crate::core::timesheet::TimeSheet;
use crate::models::ids::{ENTRY_PREFIX, next_id};
use crate::models::time_entry::{EntryUpdate, TimeEntry};
use crate::store::KeyValueStore;
use crate::utils::time::truncate_to_minute;
use chrono::NaiveTime;
use tracing::debug;

/// Result of a PIN pad press.
#[derive(Debug, Clone, PartialEq)]
pub enum PunchOutcome {
    ClockedIn { name: String, entry: TimeEntry },
    ClockedOut { name: String, entry: TimeEntry },
    /// The employee's open shift could not be closed or a new one opened.
    Rejected { name: String },
    UnknownPin,
}

impl<S: KeyValueStore, C: Clock> TimeSheet<S, C> {
    /// Open a shift for the employee, dated and timed from now.
    ///
    /// Returns `None` without touching storage when the employee already has
    /// an open entry, on any date.
    pub fn clock_in(&self, employee_id: &str) -> Option<TimeEntry> {
        let mut list = self.storage.load_entries();

        if list
            .iter()
            .any(|e| e.employee_id == employee_id && e.is_open())
        {
            debug!(employee_id, "clock_in refused: open entry exists");
            return None;
        }

        let now = self.now();
        let id = next_id(ENTRY_PREFIX, now, |c| list.iter().any(|e| e.id == c));
        let entry = TimeEntry::open(id, employee_id, now);

        list.push(entry.clone());
        self.storage.save_entries(&list);

        debug!(employee_id, entry = %entry.id, "clocked in");
        Some(entry)
    }

    /// Set the entry's clock-out to the current time-of-day.
    ///
    /// Unknown ids are a no-op. An already closed entry gets its clock-out
    /// overwritten.
    pub fn clock_out(&self, entry_id: &str) -> Option<TimeEntry> {
        let now = truncate_to_minute(self.now().time());
        self.set_clock_out(entry_id, Some(now))
    }

    /// Overwrite clock-in and/or clock-out. Ordering is not checked: an
    /// earlier clock-out is stored as-is and reads as a midnight wrap.
    ///
    /// Returns `None` without saving when the id is unknown, or when the
    /// update reopens an entry while the employee has another open one.
    pub fn update_entry(&self, entry_id: &str, update: EntryUpdate) -> Option<TimeEntry> {
        let mut list = self.storage.load_entries();
        let idx = list.iter().position(|e| e.id == entry_id)?;

        if update.clock_out == Some(None) {
            let owner = &list[idx].employee_id;
            if list
                .iter()
                .any(|e| e.id != entry_id && &e.employee_id == owner && e.is_open())
            {
                debug!(entry = entry_id, "reopen refused: employee has an open entry");
                return None;
            }
        }

        list[idx].apply(&update);
        let updated = list[idx].clone();

        self.storage.save_entries(&list);
        debug!(entry = entry_id, "entry updated");
        Some(updated)
    }

    fn set_clock_out(&self, entry_id: &str, time: Option<NaiveTime>) -> Option<TimeEntry> {
        self.update_entry(
            entry_id,
            EntryUpdate {
                clock_in: None,
                clock_out: Some(time),
            },
        )
    }

    /// PIN pad toggle: close the employee's open shift, or open a new one.
    pub fn punch(&self, pin: &str) -> PunchOutcome {
        let Some(emp) = self.find_by_pin(pin) else {
            return PunchOutcome::UnknownPin;
        };

        let result = match self.find_open_entry(&emp.id) {
            Some(open) => self.clock_out(&open.id).map(|entry| PunchOutcome::ClockedOut {
                name: emp.name.clone(),
                entry,
            }),
            None => self.clock_in(&emp.id).map(|entry| PunchOutcome::ClockedIn {
                name: emp.name.clone(),
                entry,
            }),
        };

        result.unwrap_or(PunchOutcome::Rejected { name: emp.name })
    }
}
