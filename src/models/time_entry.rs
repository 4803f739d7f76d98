use crate::utils::time::{hhmm, truncate_to_minute};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub employee_id: String,
    pub date: NaiveDate, // logical day, fixed at clock-in
    #[serde(with = "hhmm")]
    pub clock_in: NaiveTime,
    #[serde(default, with = "hhmm::option")]
    pub clock_out: Option<NaiveTime>, // None = shift in progress
}

impl TimeEntry {
    /// New open entry dated and timed from `now` (minute precision).
    pub fn open(id: String, employee_id: &str, now: NaiveDateTime) -> Self {
        Self {
            id,
            employee_id: employee_id.to_string(),
            date: now.date(),
            clock_in: truncate_to_minute(now.time()),
            clock_out: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    pub fn apply(&mut self, update: &EntryUpdate) {
        if let Some(t) = update.clock_in {
            self.clock_in = t;
        }
        if let Some(out) = update.clock_out {
            self.clock_out = out;
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn clock_in_str(&self) -> String {
        self.clock_in.format("%H:%M").to_string()
    }

    pub fn clock_out_str(&self) -> String {
        self.clock_out
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }
}

/// Manual correction of an entry. No ordering check between the two times.
/// `clock_out: Some(None)` reopens the entry.
#[derive(Debug, Clone, Default)]
pub struct EntryUpdate {
    pub clock_in: Option<NaiveTime>,
    pub clock_out: Option<Option<NaiveTime>>,
}
