//! iCalendar (`.ics`) event source, decoded with the `icalendar` parser.

use crate::errors::{AppError, AppResult};
use crate::models::CalendarEvent;
use crate::sources::Loaded;
use crate::utils::time::parse_ics_duration;
use chrono::{NaiveDateTime, NaiveTime};
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};
use std::fs;
use std::path::Path;

const SOURCE_NAME: &str = "Calendar";

pub fn read_ics(path: &Path) -> AppResult<Loaded<CalendarEvent>> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::source_unavailable(SOURCE_NAME, format!("{}: {e}", path.display())))?;
    parse_ics(&content)
}

/// Decode every VEVENT in an ICS document. Events without a title or a
/// parseable start are skipped; the end comes from `DTEND`, else `DTSTART + DURATION`.
pub fn parse_ics(content: &str) -> AppResult<Loaded<CalendarEvent>> {
    let unfolded = unfold(content);
    let calendar =
        read_calendar(&unfolded).map_err(|e| AppError::source_unavailable(SOURCE_NAME, e))?;

    let mut vevents = Vec::new();
    for c in &calendar.components {
        collect_vevents(c, &mut vevents);
    }

    let mut out = Loaded::new();
    for (i, vevent) in vevents.into_iter().enumerate() {
        match to_calendar_event(vevent) {
            Ok(ev) => out.records.push(ev),
            Err(e) => out.skip(&format!("event #{i}"), e),
        }
    }
    Ok(out)
}

fn collect_vevents<'a, 'b>(component: &'b Component<'a>, acc: &mut Vec<&'b Component<'a>>) {
    if component.name == "VEVENT" {
        acc.push(component);
    }
    for child in &component.components {
        collect_vevents(child, acc);
    }
}

fn to_calendar_event(vevent: &Component<'_>) -> AppResult<CalendarEvent> {
    let title = vevent
        .find_prop("SUMMARY")
        .map(|p| p.val.to_string())
        .ok_or_else(|| AppError::MalformedRecord("missing SUMMARY".into()))?;

    let start = vevent
        .find_prop("DTSTART")
        .and_then(|p| DatePerhapsTime::try_from(p).ok())
        .map(wall_clock)
        .ok_or_else(|| AppError::MalformedRecord(format!("'{title}': missing or invalid DTSTART")))?;

    // DURATION stands in for a missing DTEND
    let end = match vevent
        .find_prop("DTEND")
        .and_then(|p| DatePerhapsTime::try_from(p).ok())
    {
        Some(dpt) => Some(wall_clock(dpt)),
        None => vevent
            .find_prop("DURATION")
            .and_then(|p| parse_ics_duration(p.val.as_ref()).ok())
            .and_then(|d| start.checked_add_signed(d)),
    };

    Ok(CalendarEvent::new(title, start, end))
}

/// The date-time as written in the file: UTC values stay UTC, zoned and
/// floating values keep their local clock, all-day dates start at midnight.
fn wall_clock(dpt: DatePerhapsTime) -> NaiveDateTime {
    match dpt {
        DatePerhapsTime::Date(d) => d.and_time(NaiveTime::MIN),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => dt.naive_utc(),
            CalendarDateTime::Floating(naive) => naive,
            CalendarDateTime::WithTimezone { date_time, .. } => date_time,
        },
    }
}
