use crate::core::time_source::{Clock, SystemClock};
use crate::models::employee::Employee;
use crate::models::time_entry::TimeEntry;
use crate::store::{ClockStorage, KeyValueStore};
use chrono::{NaiveDate, NaiveDateTime};

/// The time-entry engine.
///
/// Holds no cached state: every read goes back to storage and every derived
/// value (status, hours, wages) is recomputed on demand.
pub struct TimeSheet<S, C = SystemClock> {
    pub(crate) storage: ClockStorage<S>,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> TimeSheet<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            storage: ClockStorage::new(store),
            clock,
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.now().date()
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.storage.load_employees()
    }

    pub fn entries(&self) -> Vec<TimeEntry> {
        self.storage.load_entries()
    }

    pub fn employee(&self, id: &str) -> Option<Employee> {
        self.employees().into_iter().find(|e| e.id == id)
    }

    pub fn entry(&self, id: &str) -> Option<TimeEntry> {
        self.entries().into_iter().find(|e| e.id == id)
    }
}
