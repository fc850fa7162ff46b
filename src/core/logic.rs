use crate::core::aggregator;
use crate::core::calendar_index::CalendarIndex;
use crate::core::cluster::{ClusterDetector, ScanState};
use crate::core::geofence::Geofence;
use crate::errors::{AppError, AppResult};
use crate::models::{CalendarEvent, Coordinate, LocationPoint, PresenceInterval, ReportRow, SummaryRow};

/// Largest time offset accepted, in either direction.
pub const MAX_OFFSET_HOURS: i64 = 24;

/// Everything a single run needs besides the inputs themselves.
#[derive(Debug, Clone)]
pub struct ReportParams {
    pub center: Coordinate,
    pub radius_meters: f64,
    pub year: i32,
    pub month: u32,
    pub time_offset_hours: i64,
    pub min_cluster_minutes: f64,
    pub event_marker: String,
}

impl ReportParams {
    /// Checks the tunables after config values and CLI overrides are merged.
    pub fn validate(&self) -> AppResult<()> {
        check_tunables(
            self.radius_meters,
            self.min_cluster_minutes,
            self.time_offset_hours,
        )
        .map_err(AppError::InvalidParameter)
    }
}

/// Range checks shared by the config file and the per-run parameters.
pub fn check_tunables(
    radius_meters: f64,
    min_cluster_minutes: f64,
    offset_hours: i64,
) -> Result<(), String> {
    if !radius_meters.is_finite() || radius_meters < 0.0 {
        return Err(format!(
            "radius_meters must be a non-negative number, got {radius_meters}"
        ));
    }
    if !min_cluster_minutes.is_finite() || min_cluster_minutes < 0.0 {
        return Err(format!(
            "min_cluster_minutes must be a non-negative number, got {min_cluster_minutes}"
        ));
    }
    if !(-MAX_OFFSET_HOURS..=MAX_OFFSET_HOURS).contains(&offset_hours) {
        return Err(format!(
            "time_offset_hours must be within ±{MAX_OFFSET_HOURS}, got {offset_hours}"
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub points_in_month: usize,
    pub intervals: usize,
    pub days: usize,
    pub calendar_notes: usize,
    /// A cluster was still open after the last point and was not counted.
    pub open_cluster_dropped: bool,
}

#[derive(Debug, Clone)]
pub struct PresenceReport {
    pub rows: Vec<ReportRow>,
    pub summary: SummaryRow,
    pub intervals: Vec<PresenceInterval>,
    pub stats: ReportStats,
}

impl PresenceReport {
    /// Month filter → time sort → cluster detection → day aggregation.
    pub fn build(
        points: &[LocationPoint],
        events: &[CalendarEvent],
        params: &ReportParams,
    ) -> AppResult<Self> {
        let month_points = select_month(points, params.year, params.month);

        let detector = ClusterDetector::new(
            Geofence::new(params.center, params.radius_meters),
            params.min_cluster_minutes,
        );
        let scan = detector.scan(&month_points);
        let open_cluster_dropped = matches!(scan.state, ScanState::InCluster { .. });
        let intervals = scan.intervals;

        let calendar = CalendarIndex::build(events, params.year, params.month, &params.event_marker);
        let (rows, summary) =
            aggregator::aggregate(&intervals, &calendar, params.time_offset_hours)?;

        let stats = ReportStats {
            points_in_month: month_points.len(),
            intervals: intervals.len(),
            days: rows.len(),
            calendar_notes: calendar.len(),
            open_cluster_dropped,
        };

        Ok(Self {
            rows,
            summary,
            intervals,
            stats,
        })
    }

    /// Only the detection step, for inspecting raw intervals.
    pub fn detect_intervals(points: &[LocationPoint], params: &ReportParams) -> Vec<PresenceInterval> {
        let month_points = select_month(points, params.year, params.month);
        ClusterDetector::new(
            Geofence::new(params.center, params.radius_meters),
            params.min_cluster_minutes,
        )
        .detect(&month_points)
    }
}

/// Points of one month, stably sorted by timestamp (equal timestamps keep input order).
pub fn select_month(points: &[LocationPoint], year: i32, month: u32) -> Vec<LocationPoint> {
    let mut selected: Vec<LocationPoint> = points
        .iter()
        .filter(|p| p.is_in_month(year, month))
        .cloned()
        .collect();
    selected.sort_by_key(|p| p.timestamp);
    selected
}
