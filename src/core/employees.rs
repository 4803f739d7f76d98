//! Employee commands: add, update, cascade delete.

use crate::core::time_source::Clock;
use crate::core::timesheet::TimeSheet;
use crate::models::employee::{Employee, EmployeeUpdate};
use crate::models::ids::{EMPLOYEE_PREFIX, next_id};
use crate::store::KeyValueStore;
use tracing::debug;

impl<S: KeyValueStore, C: Clock> TimeSheet<S, C> {
    /// Create an employee. Returns `None` (and stores nothing) when the
    /// trimmed name is empty or the rate is not a positive finite number.
    pub fn add_employee(&self, name: &str, hourly_rate: f64) -> Option<Employee> {
        self.add_employee_with_pin(name, hourly_rate, None)
    }

    pub fn add_employee_with_pin(
        &self,
        name: &str,
        hourly_rate: f64,
        pin: Option<String>,
    ) -> Option<Employee> {
        let name = name.trim();
        if name.is_empty() || !hourly_rate.is_finite() || hourly_rate <= 0.0 {
            debug!(name, hourly_rate, "add_employee rejected");
            return None;
        }

        let mut list = self.storage.load_employees();
        let id = next_id(EMPLOYEE_PREFIX, self.now(), |c| {
            list.iter().any(|e| e.id == c)
        });

        let mut emp = Employee::new(id, name, hourly_rate);
        emp.pin = pin;
        list.push(emp.clone());
        self.storage.save_employees(&list);

        debug!(id = %emp.id, "employee added");
        Some(emp)
    }

    /// Merge `update` into the matching employee. No-op when the id is unknown.
    ///
    /// A rate that is not a positive finite number is dropped from the
    /// update; the other fields still merge. An empty or blank name is
    /// dropped the same way.
    pub fn update_employee(&self, id: &str, mut update: EmployeeUpdate) -> Option<Employee> {
        if update
            .hourly_rate
            .is_some_and(|r| !r.is_finite() || r <= 0.0)
        {
            debug!(id, rate = ?update.hourly_rate, "update_employee: invalid rate ignored");
            update.hourly_rate = None;
        }
        if let Some(name) = update.name.take() {
            let name = name.trim();
            if !name.is_empty() {
                update.name = Some(name.to_string());
            }
        }

        let mut list = self.storage.load_employees();
        let emp = list.iter_mut().find(|e| e.id == id)?;
        emp.apply(&update);
        let updated = emp.clone();

        self.storage.save_employees(&list);
        Some(updated)
    }

    /// Remove the employee and every time entry that references it.
    /// Returns whether an employee record was removed.
    pub fn delete_employee(&self, id: &str) -> bool {
        let mut employees = self.storage.load_employees();
        let before = employees.len();
        employees.retain(|e| e.id != id);
        let removed = employees.len() != before;
        self.storage.save_employees(&employees);

        let mut entries = self.storage.load_entries();
        let entries_before = entries.len();
        entries.retain(|e| e.employee_id != id);
        self.storage.save_entries(&entries);

        debug!(
            id,
            removed,
            entries_removed = entries_before - entries.len(),
            "employee deleted"
        );
        removed
    }
}
