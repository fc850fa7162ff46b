use crate::utils::time::format_worked;
use chrono::{NaiveDate, NaiveTime};

/// One day of the presence log, before any string formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Day the entry fell on before the time offset was applied.
    pub date: NaiveDate,
    pub events: Vec<String>,
    pub duration_seconds: i64,
    pub from: NaiveTime,
    pub to: NaiveTime,
}

impl ReportRow {
    pub fn events_text(&self) -> String {
        self.events.join("\n")
    }

    pub fn duration_text(&self) -> String {
        format_worked(self.duration_seconds)
    }

    pub fn from_text(&self) -> String {
        self.from.format("%H:%M:%S").to_string()
    }

    pub fn to_text(&self) -> String {
        self.to.format("%H:%M:%S").to_string()
    }
}

/// Terminal row of the log: only the aggregate duration is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryRow {
    pub total_seconds: i64,
}

impl SummaryRow {
    /// Sums the per-row durations after each is truncated to whole minutes,
    /// so the total always matches the displayed rows.
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        Self {
            total_seconds: rows
                .iter()
                .map(|r| r.duration_seconds.div_euclid(60) * 60)
                .sum(),
        }
    }

    pub fn duration_text(&self) -> String {
        format_worked(self.total_seconds)
    }
}
