#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use geotimelog::models::{Coordinate, LocationPoint};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const CENTER: (f64, f64) = (50.0, 19.0);

pub fn gtl() -> Command {
    cargo_bin_cmd!("geotimelog")
}

/// Create a unique, empty directory inside the system temp dir for one test.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("geotimelog_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Path of a config file that does not exist, so the defaults apply.
pub fn missing_config(dir: &PathBuf) -> String {
    dir.join("none.conf").to_string_lossy().to_string()
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid test datetime")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn center() -> Coordinate {
    Coordinate::new(CENTER.0, CENTER.1).expect("valid center")
}

/// A fix at the reference location.
pub fn inside(ts: &str) -> LocationPoint {
    LocationPoint::new(dt(ts), center(), 10.0)
}

/// A fix roughly 11 km north of the reference location.
pub fn outside(ts: &str) -> LocationPoint {
    LocationPoint::new(
        dt(ts),
        Coordinate::new(CENTER.0 + 0.1, CENTER.1).expect("valid coordinate"),
        10.0,
    )
}

pub fn records_json_entry(ts: &str, lat: f64, lon: f64) -> String {
    format!(
        r#"{{"timestamp": "{}", "latitudeE7": {}, "longitudeE7": {}, "accuracy": 12}}"#,
        ts,
        (lat * 1e7).round() as i64,
        (lon * 1e7).round() as i64
    )
}

pub fn write_records_json(path: &PathBuf, entries: &[String]) {
    let body = format!("{{\"locations\": [\n{}\n]}}", entries.join(",\n"));
    fs::write(path, body).expect("write Records.json");
}

pub const SAMPLE_ICS: &str = "BEGIN:VCALENDAR\r
VERSION:2.0\r
PRODID:-//geotimelog//tests//EN\r
BEGIN:VEVENT\r
UID:standup-1\r
DTSTART:20240311T080000Z\r
DTEND:20240311T093000Z\r
SUMMARY:*Standup\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:lunch-1\r
DTSTART:20240311T120000Z\r
DTEND:20240311T124500Z\r
SUMMARY:Lunch\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:review-1\r
DTSTART:20240312T140000Z\r
SUMMARY:*Review\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:old-1\r
DTSTART:20240229T090000Z\r
DTEND:20240229T100000Z\r
SUMMARY:*Planning\r
END:VEVENT\r
END:VCALENDAR\r
";
