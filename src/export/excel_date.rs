// src/export/excel_date.rs

use chrono::NaiveDate;

/// Excel serial number (1900 date system) of `d`.
pub(crate) fn to_excel_serial(d: NaiveDate) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - excel_epoch).num_days() as f64)
}

pub(crate) const DATE_FORMAT: &str = "yyyy-mm-dd";
