use super::employee::Employee;
use crate::core::calculator::range::DateRange;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct WageRow {
    pub employee_id: String,
    pub name: String,
    pub hours: f64,
    pub hourly_rate: f64,
    pub wage: f64,
}

impl WageRow {
    pub fn new(employee: &Employee, hours: f64) -> Self {
        Self {
            employee_id: employee.id.clone(),
            name: employee.name.clone(),
            hours,
            hourly_rate: employee.hourly_rate,
            wage: hours * employee.hourly_rate,
        }
    }
}

/// Payroll view over a date range: one row per employee plus grand totals.
#[derive(Debug, Clone, Serialize)]
pub struct WageSummary {
    pub range: DateRange,
    pub rows: Vec<WageRow>,
    pub total_hours: f64,
    pub total_wage: f64,
}

impl WageSummary {
    pub fn from_rows(range: DateRange, rows: Vec<WageRow>) -> Self {
        let total_hours = rows.iter().map(|r| r.hours).sum();
        let total_wage = rows.iter().map(|r| r.wage).sum();
        Self {
            range,
            rows,
            total_hours,
            total_wage,
        }
    }

    pub fn has_data(&self) -> bool {
        self.rows.iter().any(|r| r.hours > 0.0)
    }
}
