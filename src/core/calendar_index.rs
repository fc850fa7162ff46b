use crate::models::CalendarEvent;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Day → descriptions of the marked events starting that day, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarIndex {
    by_day: BTreeMap<NaiveDate, Vec<String>>,
}

impl CalendarIndex {
    /// Keep events that start in `year`/`month` and whose title contains `marker`.
    pub fn build(events: &[CalendarEvent], year: i32, month: u32, marker: &str) -> Self {
        let mut by_day: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();

        for ev in events
            .iter()
            .filter(|e| e.starts_in_month(year, month) && e.has_marker(marker))
        {
            by_day
                .entry(ev.start.date())
                .or_default()
                .push(ev.describe());
        }

        Self { by_day }
    }

    pub fn descriptions(&self, day: NaiveDate) -> &[String] {
        self.by_day.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Descriptions for `day` joined with newlines; empty when the day has none.
    pub fn joined(&self, day: NaiveDate) -> String {
        self.descriptions(day).join("\n")
    }

    pub fn days(&self) -> impl Iterator<Item = &NaiveDate> {
        self.by_day.keys()
    }

    pub fn len(&self) -> usize {
        self.by_day.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}
