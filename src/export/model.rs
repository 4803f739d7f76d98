use crate::models::employee::Employee;
use crate::models::time_entry::TimeEntry;
use crate::models::wage_summary::WageRow;
use serde::Serialize;

/// Flat wage row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct WageExport {
    pub employee_id: String,
    pub name: String,
    pub hours: f64,
    pub hourly_rate: f64,
    pub wage: f64,
}

impl From<&WageRow> for WageExport {
    fn from(r: &WageRow) -> Self {
        Self {
            employee_id: r.employee_id.clone(),
            name: r.name.clone(),
            hours: round2(r.hours),
            hourly_rate: r.hourly_rate,
            wage: round2(r.wage),
        }
    }
}

/// Flat time entry row, with the owner's name and computed hours.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: String,
    pub employee_id: String,
    pub employee: String,
    pub date: String,
    pub clock_in: String,
    pub clock_out: Option<String>,
    pub hours: f64,
}

impl EntryExport {
    pub fn new(entry: &TimeEntry, employee: Option<&Employee>, hours: f64) -> Self {
        Self {
            id: entry.id.clone(),
            employee_id: entry.employee_id.clone(),
            employee: employee.map(|e| e.name.clone()).unwrap_or_default(),
            date: entry.date_str(),
            clock_in: entry.clock_in_str(),
            clock_out: entry.clock_out.map(|t| t.format("%H:%M").to_string()),
            hours: round2(hours),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
