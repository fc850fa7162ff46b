mod common;
use common::{SAMPLE_ICS, date, dt};
use geotimelog::core::CalendarIndex;
use geotimelog::errors::AppError;
use geotimelog::models::CalendarEvent;
use geotimelog::sources::calendar::{parse_ics, read_ics};
use std::fs;

#[test]
fn test_parse_ics_reads_all_events() {
    let loaded = parse_ics(SAMPLE_ICS).expect("parse ics");
    assert_eq!(loaded.skipped, 0);

    let titles: Vec<&str> = loaded.records.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["*Standup", "Lunch", "*Review", "*Planning"]);

    let standup = &loaded.records[0];
    assert_eq!(standup.start, dt("2024-03-11 08:00:00"));
    assert_eq!(standup.end, Some(dt("2024-03-11 09:30:00")));
    assert_eq!(loaded.records[2].end, None);
}

#[test]
fn test_index_keeps_marked_events_of_the_month() {
    let events = parse_ics(SAMPLE_ICS).expect("parse ics").records;
    let index = CalendarIndex::build(&events, 2024, 3, "*");

    assert_eq!(
        index.descriptions(date("2024-03-11")),
        ["*Standup (08:00 - 09:30)".to_string()]
    );
    assert_eq!(
        index.descriptions(date("2024-03-12")),
        ["*Review (14:00 - )".to_string()]
    );
    assert!(index.descriptions(date("2024-02-29")).is_empty());
    assert_eq!(index.len(), 2);
    assert_eq!(
        index.days().copied().collect::<Vec<_>>(),
        vec![date("2024-03-11"), date("2024-03-12")]
    );
}

#[test]
fn test_several_events_on_one_day_are_joined_in_order() {
    let events = vec![
        CalendarEvent::new("*A", dt("2024-03-05 09:00:00"), Some(dt("2024-03-05 09:15:00"))),
        CalendarEvent::new("skip", dt("2024-03-05 10:00:00"), None),
        CalendarEvent::new("*B", dt("2024-03-05 07:00:00"), Some(dt("2024-03-05 07:30:00"))),
    ];
    let index = CalendarIndex::build(&events, 2024, 3, "*");

    assert_eq!(
        index.joined(date("2024-03-05")),
        "*A (09:00 - 09:15)\n*B (07:00 - 07:30)"
    );
    assert_eq!(index.joined(date("2024-03-06")), "");
}

#[test]
fn test_empty_marker_keeps_every_event() {
    let events = parse_ics(SAMPLE_ICS).expect("parse ics").records;
    let index = CalendarIndex::build(&events, 2024, 3, "");

    assert_eq!(index.len(), 3);
    assert_eq!(
        index.joined(date("2024-03-11")),
        "*Standup (08:00 - 09:30)\nLunch (12:00 - 12:45)"
    );
}

#[test]
fn test_event_without_summary_is_skipped() {
    let ics = "BEGIN:VCALENDAR\r
VERSION:2.0\r
BEGIN:VEVENT\r
UID:x\r
DTSTART:20240311T080000Z\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:y\r
DTSTART;VALUE=DATE:20240315\r
SUMMARY:*Holiday\r
END:VEVENT\r
END:VCALENDAR\r
";
    let loaded = parse_ics(ics).expect("parse ics");
    assert_eq!(loaded.skipped, 1);
    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.records[0].start, dt("2024-03-15 00:00:00"));
    assert_eq!(loaded.records[0].describe(), "*Holiday (00:00 - )");
}

#[test]
fn test_missing_calendar_file_is_unavailable() {
    let dir = common::temp_dir("calendar_missing");
    let err = read_ics(&dir.join("nope.ics")).expect_err("missing file");
    assert!(matches!(err, AppError::SourceUnavailable { .. }));
}

#[test]
fn test_read_ics_from_disk() {
    let dir = common::temp_dir("calendar_disk");
    let path = dir.join("calendar_events.ics");
    fs::write(&path, SAMPLE_ICS).expect("write ics");

    let loaded = read_ics(&path).expect("read ics");
    assert_eq!(loaded.records.len(), 4);
}

#[test]
fn test_duration_gives_end_when_dtend_is_missing() {
    let ics = "BEGIN:VCALENDAR\r
VERSION:2.0\r
BEGIN:VEVENT\r
UID:sync-1\r
DTSTART:20240314T100000Z\r
DURATION:PT1H30M\r
SUMMARY:*Sync\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:both-1\r
DTSTART:20240314T120000Z\r
DTEND:20240314T121500Z\r
DURATION:PT3H\r
SUMMARY:*Both\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:broken-1\r
DTSTART:20240314T150000Z\r
DURATION:soon\r
SUMMARY:*Broken\r
END:VEVENT\r
END:VCALENDAR\r
";
    let events = parse_ics(ics).expect("parse ics").records;

    assert_eq!(events[0].end, Some(dt("2024-03-14 11:30:00")));
    assert_eq!(events[0].describe(), "*Sync (10:00 - 11:30)");
    assert_eq!(events[1].end, Some(dt("2024-03-14 12:15:00")));
    assert_eq!(events[2].end, None);
    assert_eq!(events[2].describe(), "*Broken (15:00 - )");

    let index = CalendarIndex::build(&events, 2024, 3, "*");
    assert_eq!(
        index.joined(date("2024-03-14")),
        "*Sync (10:00 - 11:30)\n*Both (12:00 - 12:15)\n*Broken (15:00 - )"
    );
}
