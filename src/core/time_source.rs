//! Where "now" comes from. The engine never reads the system clock directly.

use chrono::{Local, NaiveDateTime};

/// Device-local wall clock.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one moment.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Either of the above, picked at runtime (the CLI's hidden `--now`).
#[derive(Debug, Clone, Copy)]
pub enum AnyClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl AnyClock {
    pub fn from_override(now: Option<NaiveDateTime>) -> Self {
        match now {
            Some(t) => AnyClock::Fixed(FixedClock(t)),
            None => AnyClock::System(SystemClock),
        }
    }
}

impl Clock for AnyClock {
    fn now(&self) -> NaiveDateTime {
        match self {
            AnyClock::System(c) => c.now(),
            AnyClock::Fixed(c) => c.now(),
        }
    }
}
