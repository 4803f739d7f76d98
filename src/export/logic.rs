use super::csv::write_csv;
use super::fs_utils::ensure_writable;
use super::json::write_json;
use super::model::{EntryExport, WageExport};
use super::{ExportFormat, notify_export_success};
use crate::core::TimeSheet;
use crate::core::calculator::range::DateRange;
use crate::core::time_source::Clock;
use crate::errors::AppResult;
use crate::store::KeyValueStore;
use crate::utils::path::expand_tilde;
use serde::Serialize;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Wage summary over `range`, one row per employee.
    pub fn export_summary<S: KeyValueStore, C: Clock>(
        sheet: &TimeSheet<S, C>,
        format: &ExportFormat,
        file: &str,
        range: &DateRange,
        force: bool,
    ) -> AppResult<()> {
        let rows: Vec<WageExport> = sheet
            .wage_summary(range)
            .rows
            .iter()
            .map(WageExport::from)
            .collect();

        Self::write(format, file, force, "Wages", &rows)
    }

    /// Raw time entries dated inside `range`, sorted by date and clock-in.
    pub fn export_entries<S: KeyValueStore, C: Clock>(
        sheet: &TimeSheet<S, C>,
        format: &ExportFormat,
        file: &str,
        range: &DateRange,
        force: bool,
    ) -> AppResult<()> {
        let employees = sheet.employees();
        let mut entries = sheet.entries_in_range(range);
        entries.sort_by(|a, b| (a.date, a.clock_in).cmp(&(b.date, b.clock_in)));

        let rows: Vec<EntryExport> = entries
            .iter()
            .map(|e| {
                let owner = employees.iter().find(|emp| emp.id == e.employee_id);
                EntryExport::new(e, owner, sheet.calc_hours(e))
            })
            .collect();

        Self::write(format, file, force, "Entries", &rows)
    }

    fn write<T: Serialize>(
        format: &ExportFormat,
        file: &str,
        force: bool,
        label: &str,
        rows: &[T],
    ) -> AppResult<()> {
        let path = expand_tilde(file);
        let path: &Path = path.as_path();
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => write_csv(path, rows)?,
            ExportFormat::Json => write_json(path, rows)?,
        }

        notify_export_success(
            &format!("{} {}", label, format.as_str().to_uppercase()),
            rows.len(),
            path,
        );
        Ok(())
    }
}
