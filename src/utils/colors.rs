/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";

/// Placeholder shown for absent values.
pub const MISSING: &str = "--";

/// Overtime share color:
/// \>= 10% → red
/// \> 0 → yellow
/// 0 → green
pub fn color_for_ot_percent(value: f64) -> &'static str {
    if value >= 10.0 {
        RED
    } else if value > 0.0 {
        YELLOW
    } else {
        GREEN
    }
}

/// Grey `--` for empty cells, the value unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == MISSING {
        format!("{GREY}{MISSING}{RESET}")
    } else {
        value.to_string()
    }
}
