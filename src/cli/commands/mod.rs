pub mod clock;
pub mod config;
pub mod context;
pub mod edit;
pub mod employee;
pub mod export;
pub mod init;
pub mod list;
pub mod report;
pub mod summary;
pub mod today;
