//! Unified application error type.
//! Every module (sources, core, export, cli) returns AppError so that the
//! binary reports failures in one place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    // ---------------------------
    // Input sources
    // ---------------------------
    /// A point or event source could not be read or decoded. Fatal for the run.
    #[error("{source_name} unavailable: {reason}")]
    SourceUnavailable {
        source_name: String,
        reason: String,
    },

    /// A single record failed validation. Callers skip the record and continue.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid period: {0} (expected YYYY-MM)")]
    InvalidPeriod(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    pub fn source_unavailable(source_name: &str, reason: impl ToString) -> Self {
        AppError::SourceUnavailable {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
