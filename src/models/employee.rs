use serde::{Deserialize, Serialize};

/// A staff member as persisted in the employees collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub hourly_rate: f64,
    /// Short numeric code used by the PIN pad. Lookup only, not a secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
}

impl Employee {
    pub fn new(id: String, name: &str, hourly_rate: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            hourly_rate,
            pin: None,
        }
    }

    /// Merge the fields present in `update` into this record.
    pub fn apply(&mut self, update: &EmployeeUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(rate) = update.hourly_rate {
            self.hourly_rate = rate;
        }
        if let Some(pin) = &update.pin {
            self.pin = pin.clone();
        }
    }
}

/// Partial update for an employee. `pin: Some(None)` clears the PIN.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub hourly_rate: Option<f64>,
    pub pin: Option<Option<String>>,
}

impl EmployeeUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.hourly_rate.is_none() && self.pin.is_none()
    }
}
