//! Creation timestamps
//!
//! The engine stores whatever string the clock hands it; nothing parses it back.

use chrono::Local;

/// Source of creation timestamps
pub trait Clock {
    fn now(&self) -> String;
}

/// Local wall-clock time in `asctime` layout, e.g. `Mon Oct 19 12:11:05 2026`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    const FORMAT: &'static str = "%a %b %e %H:%M:%S %Y";
}

impl Clock for SystemClock {
    fn now(&self) -> String {
        Local::now().format(Self::FORMAT).to_string()
    }
}

/// Clock that always returns the same timestamp
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}
