use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// `1,234` or `12,345.75`: commas only as thousands separators.
static THOUSANDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d{1,3}(,\d{3})+(\.\d+)?$").expect("valid thousands regex")
});

/// Cell values that mean "no value" in the exports we read.
pub(super) fn is_absent(s: &str) -> bool {
    let t = s.trim();
    t.is_empty()
        || t.eq_ignore_ascii_case("nan")
        || t.eq_ignore_ascii_case("null")
        || t.eq_ignore_ascii_case("na")
        || t.eq_ignore_ascii_case("none")
}

/// Non-absent cell content, trimmed.
pub(super) fn present(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !is_absent(s))
}

pub(super) fn required(v: Option<String>, row: usize, field: &'static str) -> AppResult<String> {
    present(v).ok_or_else(|| AppError::invalid_input(row, field, "missing required value"))
}

pub(super) fn date(v: Option<String>, row: usize, field: &'static str) -> AppResult<NaiveDate> {
    let s = required(v, row, field)?;

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(&s, fmt) {
            return Ok(d);
        }
    }

    // datetime exports: keep the date part only
    if let Some(prefix) = s.get(..10)
        && let Ok(d) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d")
    {
        return Ok(d);
    }

    Err(AppError::invalid_input(
        row,
        field,
        format!("invalid date '{s}'"),
    ))
}

pub(super) fn number(v: Option<String>, row: usize, field: &'static str) -> AppResult<f64> {
    let s = required(v, row, field)?;
    to_f64(&s, row, field)
}

pub(super) fn optional_number(
    v: Option<String>,
    row: usize,
    field: &'static str,
) -> AppResult<Option<f64>> {
    present(v).map(|s| to_f64(&s, row, field)).transpose()
}

/// Decimal point only. Any comma outside thousands grouping (`37,5`) is
/// rejected, never reinterpreted.
fn to_f64(s: &str, row: usize, field: &'static str) -> AppResult<f64> {
    let plain: Cow<str> = if THOUSANDS_RE.is_match(s) {
        Cow::Owned(s.replace(',', ""))
    } else {
        Cow::Borrowed(s)
    };

    match plain.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(AppError::invalid_input(
            row,
            field,
            format!("invalid number '{s}'"),
        )),
    }
}
