//! Elapsed hours of a single time entry.

use crate::models::time_entry::TimeEntry;
use crate::utils::time::minute_of_day;
use chrono::{NaiveDate, NaiveDateTime};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Hours worked on `entry` as seen at `now`. Always `>= 0`.
///
/// Closed entries are measured on the clock face: a clock-out earlier than
/// the clock-in wraps over one midnight, so no closed shift exceeds 24h.
/// Open entries run up to `now`, spanning as many days as needed.
pub fn calc_hours_at(entry: &TimeEntry, now: NaiveDateTime) -> f64 {
    let start = minute_of_day(entry.clock_in);

    let minutes = match entry.clock_out {
        Some(out) => {
            let mut diff = minute_of_day(out) - start;
            if diff < 0 {
                diff += MINUTES_PER_DAY;
            }
            diff
        }
        None => open_minutes(entry.date, start, now),
    };

    minutes as f64 / 60.0
}

fn open_minutes(date: NaiveDate, start: i64, now: NaiveDateTime) -> i64 {
    let today = now.date();
    let now_min = minute_of_day(now.time());

    if date == today {
        // clock skew can put clock-in after now
        return (now_min - start).max(0);
    }
    if date > today {
        return 0;
    }

    // rest of the first day + whole days strictly between + today so far
    let full_days = (today.signed_duration_since(date).num_days() - 1).max(0);
    (MINUTES_PER_DAY - start) + full_days * MINUTES_PER_DAY + now_min
}
