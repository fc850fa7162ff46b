use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting values outside [-90, 90] / [-180, 180]
    /// and non-finite numbers.
    pub fn new(lat: f64, lon: f64) -> AppResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::InvalidCoordinate(format!("latitude {lat}")));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(AppError::InvalidCoordinate(format!("longitude {lon}")));
        }
        Ok(Self { lat, lon })
    }

    /// Convert the `×1e7` integer encoding used by location-history exports.
    pub fn from_e7(lat_e7: i64, lon_e7: i64) -> AppResult<Self> {
        Self::new(lat_e7 as f64 / 10_000_000.0, lon_e7 as f64 / 10_000_000.0)
    }
}

/// One GPS fix. Timestamps are naive UTC wall clock as written by the export.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationPoint {
    pub timestamp: NaiveDateTime,
    pub coord: Coordinate,
    pub accuracy: f64,
}

impl LocationPoint {
    pub fn new(timestamp: NaiveDateTime, coord: Coordinate, accuracy: f64) -> Self {
        Self {
            timestamp,
            coord,
            accuracy,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.coord.lat
    }

    pub fn longitude(&self) -> f64 {
        self.coord.lon
    }

    /// True when the fix was taken in the given calendar month.
    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.timestamp.year() == year && self.timestamp.month() == month
    }
}
