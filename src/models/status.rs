use super::time_entry::TimeEntry;

/// Where an employee stands today.
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeStatus {
    /// No entries dated today.
    Idle,
    /// The last entry of today is still open.
    Working(TimeEntry),
    /// Entries today, all closed.
    Done,
}

impl EmployeeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Idle => "not started",
            EmployeeStatus::Working(_) => "working",
            EmployeeStatus::Done => "finished",
        }
    }
}
