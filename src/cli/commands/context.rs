//! Shared helpers for command handlers: open the timesheet, resolve names,
//! validate user input before it reaches the engine.

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::TimeSheet;
use crate::core::calculator::range::RangeSpec;
use crate::core::time_source::AnyClock;
use crate::db::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::utils::time::parse_datetime;
use regex::Regex;
use std::fs;

pub type Sheet = TimeSheet<SqliteStore, AnyClock>;

pub fn open_sheet(cli: &Cli, cfg: &Config) -> AppResult<Sheet> {
    let now = cli.now.as_deref().map(parse_datetime).transpose()?;
    let db_path = cfg.database_path();
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let store = SqliteStore::open(&db_path.to_string_lossy())?;
    Ok(TimeSheet::new(store, AnyClock::from_override(now)))
}

/// Find an employee by exact id, or by name (case-insensitive, must be unique).
pub fn resolve_employee(sheet: &Sheet, who: &str) -> AppResult<Employee> {
    let employees = sheet.employees();

    if let Some(emp) = employees.iter().find(|e| e.id == who) {
        return Ok(emp.clone());
    }

    let wanted = who.trim().to_lowercase();
    let mut matches = employees
        .into_iter()
        .filter(|e| e.name.to_lowercase() == wanted);

    match (matches.next(), matches.next()) {
        (Some(emp), None) => Ok(emp),
        (Some(_), Some(_)) => Err(AppError::AmbiguousEmployee(who.to_string())),
        _ => Err(AppError::EmployeeNotFound(who.to_string())),
    }
}

/// Range from the command line, or the configured default.
pub fn resolve_range(range: Option<&String>, cfg: &Config) -> AppResult<RangeSpec> {
    match range {
        Some(r) => RangeSpec::parse(r),
        None => RangeSpec::parse(&cfg.default_range),
    }
}

pub fn validate_name(name: &str) -> AppResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidName);
    }
    Ok(name.to_string())
}

pub fn validate_rate(rate: &str) -> AppResult<f64> {
    match rate.trim().parse::<f64>() {
        Ok(r) if r.is_finite() && r > 0.0 => Ok(r),
        _ => Err(AppError::InvalidRate(rate.to_string())),
    }
}

pub fn validate_pin(pin: &str) -> AppResult<String> {
    let re = Regex::new(r"^[0-9]{4,6}$").map_err(|e| AppError::InvalidPin(e.to_string()))?;
    let pin = pin.trim();
    if re.is_match(pin) {
        Ok(pin.to_string())
    } else {
        Err(AppError::InvalidPin(pin.to_string()))
    }
}
