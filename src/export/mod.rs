// src/export/mod.rs

mod delimited;
mod excel_date;
mod fs_utils;
mod json;
pub mod model;
mod xlsx;

pub use model::{Labels, ReportTable, TableRow};

use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use clap::ValueEnum;
use std::path::Path;

pub(crate) use fs_utils::ensure_writable;

/// Shared completion message for every sink.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Xlsx => "XLSX",
        }
    }
}

/// Serialize the whole table in memory.
pub fn render(table: &ReportTable<'_>, format: ExportFormat) -> AppResult<Vec<u8>> {
    match format {
        ExportFormat::Csv => delimited::render_csv(table),
        ExportFormat::Json => json::render_json(table),
        ExportFormat::Xlsx => xlsx::render_xlsx(table),
    }
}

/// Render and write the table. Nothing touches the target before rendering succeeds.
pub fn export_report(
    table: &ReportTable<'_>,
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    ensure_writable(path, force)?;

    info(format!("Exporting to {}: {}", format.label(), path.display()));
    let bytes = render(table, format)?;
    fs_utils::write_output(path, &bytes)?;

    notify_export_success(format.label(), path);
    Ok(())
}

/// Write an already serialized payload with the same overwrite and atomic rules.
pub(crate) fn write_bytes(path: &Path, bytes: &[u8], force: bool) -> AppResult<()> {
    ensure_writable(path, force)?;
    fs_utils::write_output(path, bytes)
}
