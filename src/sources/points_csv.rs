//! Intermediate points table: `Date,Time,Longitude,Latitude,Accuracy`.

use crate::errors::{AppError, AppResult};
use crate::models::{Coordinate, LocationPoint};
use crate::sources::Loaded;
use crate::utils::time::parse_date_and_time;
use csv::{ReaderBuilder, Writer};
use serde::Deserialize;
use std::io;
use std::path::Path;

const SOURCE_NAME: &str = "Points CSV";

pub const HEADERS: [&str; 5] = ["Date", "Time", "Longitude", "Latitude", "Accuracy"];

#[derive(Deserialize)]
struct PointRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "Longitude")]
    longitude: String,
    #[serde(rename = "Latitude")]
    latitude: String,
    #[serde(rename = "Accuracy")]
    accuracy: String,
}

impl PointRecord {
    fn into_point(self) -> AppResult<LocationPoint> {
        let timestamp = parse_date_and_time(&self.date, &self.time)?;
        let lat = parse_number(&self.latitude, "latitude")?;
        let lon = parse_number(&self.longitude, "longitude")?;
        let accuracy = parse_number(&self.accuracy, "accuracy")?;
        Ok(LocationPoint::new(timestamp, Coordinate::new(lat, lon)?, accuracy))
    }
}

fn parse_number(s: &str, field: &str) -> AppResult<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| AppError::MalformedRecord(format!("{field} '{s}' is not a number")))
}

pub fn read_points_csv(path: &Path) -> AppResult<Loaded<LocationPoint>> {
    let file = std::fs::File::open(path)
        .map_err(|e| AppError::source_unavailable(SOURCE_NAME, format!("{}: {e}", path.display())))?;
    read_points(file)
}

/// Decode points from any reader; rows that fail to parse are skipped.
pub fn read_points<R: io::Read>(reader: R) -> AppResult<Loaded<LocationPoint>> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| AppError::source_unavailable(SOURCE_NAME, e))?
        .clone();
    for h in HEADERS {
        if !headers.iter().any(|c| c.trim() == h) {
            return Err(AppError::source_unavailable(
                SOURCE_NAME,
                format!("missing column '{h}'"),
            ));
        }
    }

    let mut out = Loaded::new();
    for (i, result) in rdr.deserialize::<PointRecord>().enumerate() {
        match result {
            Ok(rec) => match rec.into_point() {
                Ok(p) => out.records.push(p),
                Err(e) => out.skip(&format!("row {}", i + 2), e),
            },
            Err(e) if e.is_io_error() => {
                return Err(AppError::source_unavailable(SOURCE_NAME, e));
            }
            Err(e) => out.skip(&format!("row {}", i + 2), e),
        }
    }
    Ok(out)
}

/// Write points in the intermediate table shape.
pub fn write_points<W: io::Write>(writer: W, points: &[LocationPoint]) -> AppResult<()> {
    let mut wtr = Writer::from_writer(writer);

    wtr.write_record(HEADERS)?;
    for p in points {
        wtr.write_record(&[
            p.timestamp.format("%Y-%m-%d").to_string(),
            p.timestamp.format("%H:%M:%S%.f").to_string(),
            p.longitude().to_string(),
            p.latitude().to_string(),
            p.accuracy.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
