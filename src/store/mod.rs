//! Storage port for the two record collections.
//!
//! The engine talks to a [`KeyValueStore`] through [`ClockStorage`], which
//! gives every collection a "load whole list / save whole list" contract.
//! Loads never fail (missing, unreadable or corrupted data reads as an empty
//! collection) and saves never fail (errors are logged and dropped).
//!
//! Every mutation is load-modify-save on the full collection. Two writers
//! racing on the same collection can lose updates; last save wins.

pub mod memory;

use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::models::time_entry::TimeEntry;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub use memory::MemoryStore;

/// Minimal string key-value backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Employees,
    Entries,
}

impl Collection {
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Employees => "rtimeclock-employees",
            Collection::Entries => "rtimeclock-entries",
        }
    }
}

pub struct ClockStorage<S> {
    backend: S,
}

impl<S: KeyValueStore> ClockStorage<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read a full collection. Any failure yields an empty list.
    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        let raw = match self.backend.get(collection.key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(
                    key = collection.key(),
                    error = %e,
                    "storage read failed, using empty collection"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    key = collection.key(),
                    error = %e,
                    "stored collection is not valid, using empty collection"
                );
                Vec::new()
            }
        }
    }

    /// Replace a full collection. Failures are logged and dropped.
    pub fn save<T: Serialize>(&self, collection: Collection, records: &[T]) {
        let json = match serde_json::to_string(records) {
            Ok(json) => json,
            Err(e) => {
                warn!(
                    key = collection.key(),
                    error = %e,
                    "could not serialize collection, write dropped"
                );
                return;
            }
        };

        match self.backend.set(collection.key(), &json) {
            Ok(()) => debug!(key = collection.key(), records = records.len(), "collection saved"),
            Err(e) => {
                warn!(
                    key = collection.key(),
                    error = %e,
                    "storage write failed, write dropped"
                )
            }
        }
    }

    pub fn load_employees(&self) -> Vec<Employee> {
        self.load(Collection::Employees)
    }

    pub fn save_employees(&self, list: &[Employee]) {
        self.save(Collection::Employees, list);
    }

    pub fn load_entries(&self) -> Vec<TimeEntry> {
        self.load(Collection::Entries)
    }

    pub fn save_entries(&self, list: &[TimeEntry]) {
        self.save(Collection::Entries, list);
    }
}
