// src/export/model.rs

use crate::config::Language;
use crate::models::{ReportRow, SummaryRow};
use serde::Serialize;

/// Column titles and the summary label for one output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub headers: [&'static str; 5],
    pub summary: &'static str,
}

impl Labels {
    pub fn for_language(lang: Language) -> Self {
        match lang {
            Language::En => Self {
                headers: ["Date", "Event", "Work Duration", "From", "To"],
                summary: "Total",
            },
            Language::Pl => Self {
                headers: ["Data", "Zadanie", "Czas pracy", "Od", "Do"],
                summary: "Suma",
            },
        }
    }
}

/// Flat, already formatted row as it appears in the output table.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub date: String,
    pub event: String,
    pub work_duration: String,
    pub from: String,
    pub to: String,
}

impl TableRow {
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.date,
            &self.event,
            &self.work_duration,
            &self.from,
            &self.to,
        ]
    }
}

/// The report ready for a sink: typed day rows, the summary and presentation settings.
#[derive(Debug, Clone)]
pub struct ReportTable<'a> {
    pub labels: Labels,
    pub rows: &'a [ReportRow],
    pub summary: SummaryRow,
    pub date_format: &'a str,
}

impl<'a> ReportTable<'a> {
    pub fn new(
        rows: &'a [ReportRow],
        summary: SummaryRow,
        language: Language,
        date_format: &'a str,
    ) -> Self {
        Self {
            labels: Labels::for_language(language),
            rows,
            summary,
            date_format,
        }
    }

    pub fn day_row(&self, row: &ReportRow) -> TableRow {
        TableRow {
            date: row.date.format(self.date_format).to_string(),
            event: row.events_text(),
            work_duration: row.duration_text(),
            from: row.from_text(),
            to: row.to_text(),
        }
    }

    pub fn summary_row(&self) -> TableRow {
        TableRow {
            date: self.labels.summary.to_string(),
            event: String::new(),
            work_duration: self.summary.duration_text(),
            from: String::new(),
            to: String::new(),
        }
    }

    /// Day rows in date order followed by the summary row.
    pub fn text_rows(&self) -> Vec<TableRow> {
        self.rows
            .iter()
            .map(|r| self.day_row(r))
            .chain(std::iter::once(self.summary_row()))
            .collect()
    }
}
