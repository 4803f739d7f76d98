pub mod calculator;
pub mod employees;
pub mod entries;
pub mod queries;
pub mod report;
pub mod time_source;
pub mod timesheet;

pub use timesheet::TimeSheet;
