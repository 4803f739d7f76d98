//! Unified application error type.
//! Everything around the time-entry engine (cli, config, db, export) returns
//! AppError. The engine itself encodes expected failures in its return values.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid hourly rate: {0} (must be a positive number)")]
    InvalidRate(String),

    #[error("Invalid employee name: name cannot be empty")]
    InvalidName,

    #[error("Invalid PIN '{0}': use 4 to 6 digits")]
    InvalidPin(String),

    // ---------------------------
    // Lookup / state
    // ---------------------------
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("Employee name '{0}' matches more than one record, use the id")]
    AmbiguousEmployee(String),

    #[error("Time entry not found: {0}")]
    EntryNotFound(String),

    #[error("{0} is already clocked in")]
    AlreadyClockedIn(String),

    #[error("{0} is not clocked in")]
    NotClockedIn(String),

    #[error("No employee matches this PIN")]
    UnknownPin,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
