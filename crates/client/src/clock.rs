//! The clock seam.
//!
//! Timestamps go into the signature, so tests need to pin them. Production
//! uses [`SystemClock`] (sender-local wall time, per the wire contract);
//! tests inject [`FixedClock`].

use chrono::{Local, NaiveDateTime};

/// Supplies the current date/time for timestamp formatting.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant. For deterministic signatures in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
