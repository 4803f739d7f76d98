//! Record identifiers: `<prefix>-<epoch millis>`, bumped until unique.

use chrono::NaiveDateTime;

pub const EMPLOYEE_PREFIX: &str = "emp";
pub const ENTRY_PREFIX: &str = "t";

pub fn next_id<F>(prefix: &str, now: NaiveDateTime, taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut millis = now.and_utc().timestamp_millis();
    loop {
        let candidate = format!("{}-{}", prefix, millis);
        if !taken(&candidate) {
            return candidate;
        }
        millis += 1;
    }
}
