//! Time source for backup names and bundle headers

use chrono::{Local, NaiveDateTime};

/// Timestamp format used in backup file and directory names
pub const BACKUP_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Timestamp format used in the bundle header
pub const HEADER_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current local time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// Second-resolution stamp for backup names
    fn backup_stamp(&self) -> String {
        self.now().format(BACKUP_STAMP_FORMAT).to_string()
    }

    /// Human-readable stamp for the bundle header
    fn header_stamp(&self) -> String {
        self.now().format(HEADER_STAMP_FORMAT).to_string()
    }
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given instant
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
