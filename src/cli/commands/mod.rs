pub mod config;
pub mod convert;
pub mod init;
pub mod intervals;
pub mod report;

use crate::cli::parser::FenceArgs;
use crate::config::Config;
use crate::core::ReportParams;
use crate::errors::AppResult;
use crate::models::{CalendarEvent, Coordinate, LocationPoint};
use crate::sources::{self, Loaded, calendar};
use crate::ui::messages::{info, warning};
use crate::utils::date::Period;
use crate::utils::path::expand_tilde;
use std::path::Path;

/// Merge config values with per-run overrides.
pub(crate) fn resolve_params(
    cfg: &Config,
    period: Period,
    fence: &FenceArgs,
    offset: Option<i64>,
) -> AppResult<ReportParams> {
    let center = Coordinate::new(
        fence.lat.unwrap_or(cfg.center_lat),
        fence.lon.unwrap_or(cfg.center_lon),
    )?;

    let params = ReportParams {
        center,
        radius_meters: fence.radius.unwrap_or(cfg.radius_meters),
        year: period.year,
        month: period.month,
        time_offset_hours: offset.unwrap_or(cfg.time_offset_hours),
        min_cluster_minutes: fence.min_cluster.unwrap_or(cfg.min_cluster_minutes),
        event_marker: cfg.event_marker.clone(),
    };
    params.validate()?;
    Ok(params)
}

pub(crate) fn load_points(points: Option<&str>, cfg: &Config) -> AppResult<Vec<LocationPoint>> {
    let path = expand_tilde(points.unwrap_or(&cfg.points_csv));
    info(format!("Reading points from {}", path.display()));
    let loaded = sources::load_points(&path)?;
    Ok(report_skipped(loaded, "location record(s)", &path))
}

pub(crate) fn load_events(calendar_file: Option<&str>, cfg: &Config) -> AppResult<Vec<CalendarEvent>> {
    let path = expand_tilde(calendar_file.unwrap_or(&cfg.calendar_file));
    info(format!("Reading calendar from {}", path.display()));
    let loaded = calendar::read_ics(&path)?;
    Ok(report_skipped(loaded, "calendar event(s)", &path))
}

fn report_skipped<T>(loaded: Loaded<T>, what: &str, path: &Path) -> Vec<T> {
    if loaded.skipped > 0 {
        warning(format!(
            "Skipped {} malformed {} in {} (set GEOTIMELOG_VERBOSE=1 for details)",
            loaded.skipped,
            what,
            path.display()
        ));
    }
    loaded.records
}
