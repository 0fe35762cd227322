//! Injected time source.
//!
//! Write paths never read the system clock directly; they take a [`Clock`]
//! so tests can supply fixed timestamps deterministically.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Source of "now" for timestamping writes.
pub trait Clock {
    /// Current local timestamp.
    fn now(&self) -> NaiveDateTime;

    /// Current local date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall-clock time in the local zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant. Intended for tests and for replaying
/// historical writes with their original timestamps.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
