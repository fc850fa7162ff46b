pub mod calendar_event;
pub mod interval;
pub mod point;
pub mod report_row;

pub use calendar_event::CalendarEvent;
pub use interval::{DayRecord, PresenceInterval};
pub use point::{Coordinate, LocationPoint};
pub use report_row::{ReportRow, SummaryRow};
