//! Turns presence intervals into one row per day and a total.

use crate::core::calendar_index::CalendarIndex;
use crate::errors::AppResult;
use crate::models::{DayRecord, PresenceInterval, ReportRow, SummaryRow};
use crate::utils::time::{apply_offset_hours, round_to_nearest_5_minutes};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Group rounded intervals by the day of their rounded start.
///
/// The first interval of a day fixes `entry`; every later one on the same day
/// replaces `exit`. Gaps between intervals are therefore counted as presence.
pub fn group_by_day(intervals: &[PresenceInterval]) -> BTreeMap<NaiveDate, DayRecord> {
    intervals
        .iter()
        .fold(BTreeMap::new(), |mut days, interval| {
            let entry = round_to_nearest_5_minutes(interval.start);
            let exit = round_to_nearest_5_minutes(interval.end);
            let date = entry.date();

            days.entry(date)
                .and_modify(|rec: &mut DayRecord| rec.exit = exit)
                .or_insert(DayRecord { date, entry, exit });
            days
        })
}

/// Build a report row from a grouped day: shift both ends by the offset,
/// keep the pre-offset date, attach the calendar notes for that date.
pub fn day_to_row(
    record: &DayRecord,
    calendar: &CalendarIndex,
    offset_hours: i64,
) -> AppResult<ReportRow> {
    let entry = apply_offset_hours(record.entry, offset_hours)?;
    let exit = apply_offset_hours(record.exit, offset_hours)?;

    Ok(ReportRow {
        date: record.date,
        events: calendar.descriptions(record.date).to_vec(),
        duration_seconds: (exit - entry).num_seconds(),
        from: entry.time(),
        to: exit.time(),
    })
}

/// Rows sorted by date plus the summary row.
pub fn aggregate(
    intervals: &[PresenceInterval],
    calendar: &CalendarIndex,
    offset_hours: i64,
) -> AppResult<(Vec<ReportRow>, SummaryRow)> {
    let rows = group_by_day(intervals)
        .values()
        .map(|rec| day_to_row(rec, calendar, offset_hours))
        .collect::<AppResult<Vec<ReportRow>>>()?;
    let summary = SummaryRow::from_rows(&rows);
    Ok((rows, summary))
}
