/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";
pub const RED: &str = "\x1b[31m";

/// Grey for empty cells, unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Worked durations: zero is grey, positive green, negative red.
pub fn colorize_duration(value: &str, seconds: i64) -> String {
    let color = if seconds > 0 {
        GREEN
    } else if seconds < 0 {
        RED
    } else {
        GREY
    };
    format!("{color}{value}{RESET}")
}

/// Entry/exit clock times.
pub fn colorize_clock(value: &str) -> String {
    format!("{CYAN}{value}{RESET}")
}
