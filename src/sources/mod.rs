//! Readers for the external inputs: location history, points CSV, calendar.
//! Whole-source failures surface as `AppError::SourceUnavailable`; records that
//! fail validation are skipped and counted.

pub mod calendar;
pub mod location_history;
pub mod points_csv;

use crate::errors::AppResult;
use crate::models::LocationPoint;
use crate::ui::messages::detail;
use crate::utils::path::has_extension;
use std::path::Path;

/// Records decoded from a source, plus how many were dropped on the way.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

impl<T> Loaded<T> {
    pub(crate) fn new() -> Self {
        Self {
            records: Vec::new(),
            skipped: 0,
        }
    }

    pub(crate) fn skip(&mut self, what: &str, reason: impl std::fmt::Display) {
        self.skipped += 1;
        detail(format!("skipped {what}: {reason}"));
    }
}

/// Load points from a `.json` location-history export or a points CSV.
pub fn load_points(path: &Path) -> AppResult<Loaded<LocationPoint>> {
    if has_extension(path, "json") {
        location_history::read_records_json(path)
    } else {
        points_csv::read_points_csv(path)
    }
}
