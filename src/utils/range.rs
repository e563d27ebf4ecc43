//! Parsing of the `--range` filter applied to pay-period end dates.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse `--range` (year / month / day / interval).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
///
/// Returns inclusive `(first, last)` bounds.
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start, end) = match r.split_once(':') {
        Some((s, e)) => (s.trim(), e.trim()),
        None => (r.trim(), r.trim()),
    };

    if start.len() != end.len() {
        return Err(AppError::InvalidRange(format!(
            "start and end must have same format: {r}"
        )));
    }

    let (first, _) = bounds(start)?;
    let (_, last) = bounds(end)?;

    if first > last {
        return Err(AppError::InvalidRange(format!("start after end: {r}")));
    }

    Ok((first, last))
}

/// `None` or `"all"` mean no filtering.
pub fn parse_optional_range(r: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match r {
        None => Ok(None),
        Some(r) if r.eq_ignore_ascii_case("all") => Ok(None),
        Some(r) => parse_range(r).map(Some),
    }
}

/// First and last day covered by a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidRange(format!("invalid year: {p}")))?;
            let d1 = ymd(y, 1, 1, p)?;
            let d2 = ymd(y, 12, 31, p)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| AppError::InvalidRange(format!("invalid month: {p}")))?;
            let last = month_last_day(d1)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid month: {p}")))?;
            Ok((d1, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidRange(format!(
            "unsupported --range format: {p}"
        ))),
    }
}

fn ymd(y: i32, m: u32, d: u32, raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| AppError::InvalidDate(raw.to_string()))
}

fn month_last_day(first: NaiveDate) -> Option<NaiveDate> {
    first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|d| d.pred_opt())
}
