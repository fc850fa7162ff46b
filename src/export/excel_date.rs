// src/export/excel_date.rs

use chrono::{NaiveTime, Timelike};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Excel stores clock times as a fraction of a day.
pub(crate) fn time_to_excel_serial(t: NaiveTime) -> f64 {
    f64::from(t.num_seconds_from_midnight()) / SECONDS_PER_DAY
}

/// Durations use the same unit; whole minutes only, matching the text output.
pub(crate) fn duration_to_excel_serial(seconds: i64) -> f64 {
    (seconds.div_euclid(60) * 60) as f64 / SECONDS_PER_DAY
}

pub(crate) const CLOCK_FORMAT: &str = "hh:mm:ss";
/// `[hh]` keeps counting past 24 hours for monthly totals.
pub(crate) const DURATION_FORMAT: &str = "[hh]:mm:ss";
