//! Location-history export (`Records.json`):
//! `{"locations": [{"timestamp": "...Z", "latitudeE7": .., "longitudeE7": .., "accuracy": ..}, ..]}`

use crate::errors::{AppError, AppResult};
use crate::models::{Coordinate, LocationPoint};
use crate::sources::Loaded;
use crate::utils::time::{parse_epoch_millis, parse_iso_utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const SOURCE_NAME: &str = "Location history";

#[derive(Deserialize)]
struct RecordsFile {
    locations: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct RawLocation {
    timestamp: Option<String>,
    #[serde(rename = "timestampMs")]
    timestamp_ms: Option<String>,
    #[serde(rename = "latitudeE7")]
    latitude_e7: Option<i64>,
    #[serde(rename = "longitudeE7")]
    longitude_e7: Option<i64>,
    accuracy: Option<f64>,
}

impl RawLocation {
    fn into_point(self) -> AppResult<LocationPoint> {
        let timestamp = match (self.timestamp, self.timestamp_ms) {
            (Some(ts), _) => parse_iso_utc(&ts)?,
            (None, Some(ms)) => parse_epoch_millis(&ms)?,
            (None, None) => return Err(AppError::MalformedRecord("missing timestamp".into())),
        };

        let (lat_e7, lon_e7) = match (self.latitude_e7, self.longitude_e7) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => return Err(AppError::MalformedRecord("missing coordinates".into())),
        };

        let accuracy = self
            .accuracy
            .ok_or_else(|| AppError::MalformedRecord("missing accuracy".into()))?;

        Ok(LocationPoint::new(
            timestamp,
            Coordinate::from_e7(lat_e7, lon_e7)?,
            accuracy,
        ))
    }
}

/// Read and decode a `Records.json` file.
pub fn read_records_json(path: &Path) -> AppResult<Loaded<LocationPoint>> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::source_unavailable(SOURCE_NAME, format!("{}: {e}", path.display())))?;
    parse_records_json(&content)
}

/// Decode the JSON text of a location-history export.
pub fn parse_records_json(content: &str) -> AppResult<Loaded<LocationPoint>> {
    let file: RecordsFile =
        serde_json::from_str(content).map_err(|e| AppError::source_unavailable(SOURCE_NAME, e))?;

    let mut out = Loaded::new();
    for (i, value) in file.locations.into_iter().enumerate() {
        let decoded = serde_json::from_value::<RawLocation>(value)
            .map_err(|e| AppError::MalformedRecord(e.to_string()))
            .and_then(RawLocation::into_point);

        match decoded {
            Ok(p) => out.records.push(p),
            Err(e) => out.skip(&format!("location #{i}"), e),
        }
    }
    Ok(out)
}
