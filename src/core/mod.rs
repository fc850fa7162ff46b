pub mod aggregator;
pub mod calendar_index;
pub mod cluster;
pub mod geofence;
pub mod logic;

pub use calendar_index::CalendarIndex;
pub use cluster::ClusterDetector;
pub use geofence::{Geofence, within_radius};
pub use logic::{MAX_OFFSET_HOURS, PresenceReport, ReportParams, ReportStats};
