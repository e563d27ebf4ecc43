//! Formatting utilities used for CLI and export outputs.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Remove ANSI color sequences.
pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Terminal columns taken by `s`, ignoring color sequences.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", " ".repeat(fill), s)
}

/// Hours and money amounts: two decimals.
pub fn fmt_hours(v: f64) -> String {
    format!("{:.2}", v)
}

/// Optional amount, empty when absent.
pub fn fmt_opt_hours(v: Option<f64>) -> String {
    v.map(fmt_hours).unwrap_or_default()
}

/// Percentages: one decimal, empty when absent (zero denominator).
pub fn fmt_opt_percent(v: Option<f64>) -> String {
    v.map(|p| format!("{:.1}", p)).unwrap_or_default()
}

pub fn fmt_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// True when the cell looks numeric, so it can be right-aligned.
pub fn is_numeric_cell(s: &str) -> bool {
    let plain = strip_ansi(s);
    !plain.is_empty() && plain.parse::<f64>().is_ok()
}
