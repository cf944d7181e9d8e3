/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Placeholder printed for empty cells.
pub const EMPTY: &str = "-";

/// Value, or a grey dash when the cell is empty.
pub fn colorize_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => format!("{GREY}{EMPTY}{RESET}"),
    }
}

/// Blank rows stand out in listings.
pub fn colorize_sample_type(value: Option<&str>) -> String {
    match value {
        Some("Blank") => format!("{MAGENTA}Blank{RESET}"),
        Some(v) if !v.is_empty() => format!("{GREEN}{v}{RESET}"),
        _ => colorize_optional(None),
    }
}
