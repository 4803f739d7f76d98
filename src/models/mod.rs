pub mod employee;
pub mod ids;
pub mod status;
pub mod time_entry;
pub mod wage_summary;
