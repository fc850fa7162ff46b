use chrono::{Datelike, NaiveDateTime};

/// A calendar entry as read from the event source.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

impl CalendarEvent {
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: Option<NaiveDateTime>) -> Self {
        Self {
            title: title.into(),
            start,
            end,
        }
    }

    /// Events are assigned to a month by their start time.
    pub fn starts_in_month(&self, year: i32, month: u32) -> bool {
        self.start.year() == year && self.start.month() == month
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.title.contains(marker)
    }

    /// `"<title> (HH:MM - HH:MM)"`, with an empty end when the event has none.
    pub fn describe(&self) -> String {
        let end = self
            .end
            .map(|e| e.format("%H:%M").to_string())
            .unwrap_or_default();
        format!("{} ({} - {})", self.title, self.start.format("%H:%M"), end)
    }
}
