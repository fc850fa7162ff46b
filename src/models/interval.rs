use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A contiguous span of in-radius fixes, as emitted by the cluster detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresenceInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl PresenceInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    /// Duration in fractional minutes, the unit the minimum cluster length uses.
    pub fn duration_minutes(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 60_000.0
    }
}

/// Entry/exit for one day. `date` comes from the rounded entry before any offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub entry: NaiveDateTime,
    pub exit: NaiveDateTime,
}
