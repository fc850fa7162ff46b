//! Time utilities: 5-minute rounding, offsets, worked-duration formatting,
//! location-history timestamp parsing.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, TimeDelta, Timelike};

const ROUNDING_STEP_MINUTES: i64 = 5;
const ROUND_UP_THRESHOLD: TimeDelta = TimeDelta::seconds(150);

/// Snap a timestamp to the nearest 5-minute boundary, half up
/// (hh:m2:30 goes up, hh:m2:29.999 goes down).
pub fn round_to_nearest_5_minutes(dt: NaiveDateTime) -> NaiveDateTime {
    let discard = TimeDelta::minutes(i64::from(dt.minute()) % ROUNDING_STEP_MINUTES)
        + TimeDelta::seconds(i64::from(dt.second()))
        + TimeDelta::nanoseconds(i64::from(dt.nanosecond()));

    let floored = dt - discard;
    if discard >= ROUND_UP_THRESHOLD {
        floored + TimeDelta::minutes(ROUNDING_STEP_MINUTES)
    } else {
        floored
    }
}

/// Shift by whole hours; fails instead of leaving chrono's date range.
pub fn apply_offset_hours(dt: NaiveDateTime, offset_hours: i64) -> AppResult<NaiveDateTime> {
    TimeDelta::try_hours(offset_hours)
        .and_then(|delta| dt.checked_add_signed(delta))
        .ok_or_else(|| AppError::InvalidParameter(format!("time offset of {offset_hours} h from {dt}")))
}

/// Format a worked duration as `HH:MM:00`, truncating to whole minutes.
/// Hours are not capped at 24.
pub fn format_worked(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let total_minutes = seconds.abs() / 60;
    format!("{}{:02}:{:02}:00", sign, total_minutes / 60, total_minutes % 60)
}

/// Parse an ISO-8601 `...Z` timestamp with or without fractional seconds.
pub fn parse_iso_utc(ts: &str) -> AppResult<NaiveDateTime> {
    let ts = ts.trim();
    NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.fZ")
        .or_else(|_| NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%SZ"))
        .map_err(|_| AppError::InvalidTime(ts.to_string()))
}

/// Parse the legacy `timestampMs` field (milliseconds since the Unix epoch, as a string).
pub fn parse_epoch_millis(ms: &str) -> AppResult<NaiveDateTime> {
    let millis: i64 = ms
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidTime(ms.to_string()))?;
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| AppError::InvalidTime(ms.to_string()))
}

/// Parse the `Date` + `Time` columns of the points CSV.
pub fn parse_date_and_time(date: &str, time: &str) -> AppResult<NaiveDateTime> {
    let joined = format!("{} {}", date.trim(), time.trim());
    NaiveDateTime::parse_from_str(&joined, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&joined, "%Y-%m-%d %H:%M"))
        .map_err(|_| AppError::InvalidTime(joined))
}

/// Parse an iCalendar `DURATION` value: `P2W`, `P1D`, `PT1H30M`, `-PT15M`, `P1DT2H`.
pub fn parse_ics_duration(value: &str) -> AppResult<TimeDelta> {
    let invalid = || AppError::InvalidTime(format!("duration '{value}'"));

    let v = value.trim();
    let (negative, rest) = match v.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, v.strip_prefix('+').unwrap_or(v)),
    };
    let rest = rest.strip_prefix('P').ok_or_else(invalid)?;

    let mut total = TimeDelta::zero();
    let mut number = String::new();
    let mut in_time = false;
    let mut components = 0;

    for ch in rest.chars() {
        if ch.is_ascii_digit() {
            number.push(ch);
            continue;
        }
        if ch == 'T' {
            if in_time || !number.is_empty() {
                return Err(invalid());
            }
            in_time = true;
            continue;
        }

        let n: i64 = number.parse().map_err(|_| invalid())?;
        let part = match (ch, in_time) {
            ('W', false) => TimeDelta::try_weeks(n),
            ('D', false) => TimeDelta::try_days(n),
            ('H', true) => TimeDelta::try_hours(n),
            ('M', true) => TimeDelta::try_minutes(n),
            ('S', true) => TimeDelta::try_seconds(n),
            _ => None,
        }
        .ok_or_else(invalid)?;

        total = total.checked_add(&part).ok_or_else(invalid)?;
        number.clear();
        components += 1;
    }

    if components == 0 || !number.is_empty() {
        return Err(invalid());
    }
    Ok(if negative { -total } else { total })
}
