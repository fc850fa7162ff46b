//! Console output helpers. Status lines go to stdout, errors to stderr;
//! `detail` lines appear only when `GEOTIMELOG_VERBOSE` is set.

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_DETAIL: &str = "·";

pub const VERBOSE_ENV: &str = "GEOTIMELOG_VERBOSE";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

pub fn verbose_enabled() -> bool {
    std::env::var_os(VERBOSE_ENV).is_some_and(|v| !v.is_empty() && v != "0")
}

/// Per-record diagnostics (skipped rows, dropped clusters).
pub fn detail<T: fmt::Display>(msg: T) {
    if verbose_enabled() {
        eprintln!("{}{} {}{}", DIM, ICON_DETAIL, msg, RESET);
    }
}

/// Section header above printed tables.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}== {} =={}\n", FG_BLUE, BOLD, msg, RESET);
}
