mod common;
use common::dt;
use chrono::{NaiveDateTime, TimeDelta};
use geotimelog::utils::time::{
    apply_offset_hours, format_worked, parse_date_and_time, parse_epoch_millis, parse_ics_duration,
    parse_iso_utc, round_to_nearest_5_minutes,
};

#[test]
fn test_round_half_up_boundary() {
    assert_eq!(
        round_to_nearest_5_minutes(dt("2024-03-11 09:02:30")),
        dt("2024-03-11 09:05:00")
    );
    assert_eq!(
        round_to_nearest_5_minutes(dt("2024-03-11 09:02:29")),
        dt("2024-03-11 09:00:00")
    );
}

#[test]
fn test_round_sub_second_remainder_counts() {
    let just_below = dt("2024-03-11 09:02:29") + TimeDelta::milliseconds(999);
    assert_eq!(round_to_nearest_5_minutes(just_below), dt("2024-03-11 09:00:00"));

    let just_above = dt("2024-03-11 09:02:30") + TimeDelta::milliseconds(1);
    assert_eq!(round_to_nearest_5_minutes(just_above), dt("2024-03-11 09:05:00"));
}

#[test]
fn test_round_crosses_hour_and_day() {
    assert_eq!(
        round_to_nearest_5_minutes(dt("2024-03-11 09:58:00")),
        dt("2024-03-11 10:00:00")
    );
    assert_eq!(
        round_to_nearest_5_minutes(dt("2024-03-11 23:57:45")),
        dt("2024-03-12 00:00:00")
    );
}

#[test]
fn test_round_is_idempotent() {
    let mut t: NaiveDateTime = dt("2024-03-11 00:00:00");
    let end = dt("2024-03-11 01:00:00");
    while t < end {
        let once = round_to_nearest_5_minutes(t);
        assert_eq!(round_to_nearest_5_minutes(once), once, "at {t}");
        t += TimeDelta::seconds(7);
    }
}

#[test]
fn test_on_grid_values_are_unchanged() {
    for s in ["2024-03-11 00:00:00", "2024-03-11 12:35:00", "2024-03-11 23:55:00"] {
        assert_eq!(round_to_nearest_5_minutes(dt(s)), dt(s));
    }
}

#[test]
fn test_offset_and_worked_format() {
    assert_eq!(
        apply_offset_hours(dt("2024-03-11 23:50:00"), 2).expect("in range"),
        dt("2024-03-12 01:50:00")
    );
    assert_eq!(
        apply_offset_hours(dt("2024-03-11 00:10:00"), -1).expect("in range"),
        dt("2024-03-10 23:10:00")
    );
    assert!(apply_offset_hours(dt("2024-03-11 23:50:00"), 10_000_000_000).is_err());
    assert!(apply_offset_hours(dt("2024-03-11 23:50:00"), i64::MIN).is_err());
    assert_eq!(format_worked(0), "00:00:00");
    assert_eq!(format_worked(8 * 3600 + 5 * 60), "08:05:00");
    assert_eq!(format_worked(59), "00:00:00");
    assert_eq!(format_worked(125 * 3600), "125:00:00");
}

#[test]
fn test_timestamp_parsers() {
    assert_eq!(
        parse_iso_utc("2024-03-11T07:58:00Z").expect("plain"),
        dt("2024-03-11 07:58:00")
    );
    assert_eq!(
        parse_iso_utc("2024-03-11T07:58:00.250Z").expect("fractional"),
        dt("2024-03-11 07:58:00") + TimeDelta::milliseconds(250)
    );
    assert!(parse_iso_utc("11/03/2024 07:58").is_err());

    assert_eq!(
        parse_epoch_millis("1710143880000").expect("epoch"),
        dt("2024-03-11 07:58:00")
    );

    assert_eq!(
        parse_date_and_time("2024-03-11", "07:58:00.5").expect("csv time"),
        dt("2024-03-11 07:58:00") + TimeDelta::milliseconds(500)
    );
    assert!(parse_date_and_time("2024-13-11", "07:58:00").is_err());
}

#[test]
fn test_ics_duration_values() {
    let cases = [
        ("PT1H30M", TimeDelta::minutes(90)),
        ("PT45S", TimeDelta::seconds(45)),
        ("P1D", TimeDelta::days(1)),
        ("P1DT2H", TimeDelta::hours(26)),
        ("P2W", TimeDelta::weeks(2)),
        ("+PT5M", TimeDelta::minutes(5)),
        ("-PT15M", TimeDelta::minutes(-15)),
    ];
    for (input, expected) in cases {
        assert_eq!(parse_ics_duration(input).expect(input), expected, "{input}");
    }

    for bad in ["", "P", "PT", "1H", "PT1D", "P1H", "PT1H30", "PTT1H", "P1.5D", "soon"] {
        assert!(parse_ics_duration(bad).is_err(), "{bad}");
    }
}
