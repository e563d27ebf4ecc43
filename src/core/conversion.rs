//! Conversion of timekeeping rows into the payroll import layout.

use crate::models::TimeRecord;
use serde::Serialize;

/// One imported row: the employee key plus regular and overtime hours,
/// under the column names expected by the payroll import.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ConversionRow {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "E_Hourly Regular_Hours")]
    pub regular_hours: f64,
    #[serde(rename = "E_Overtime_Hours")]
    pub overtime_hours: f64,
}

pub const HEADERS: [&str; 3] = ["Key", "E_Hourly Regular_Hours", "E_Overtime_Hours"];

/// One output row per record, in input order.
pub fn conversion_table(records: &[TimeRecord]) -> Vec<ConversionRow> {
    records
        .iter()
        .map(|r| ConversionRow {
            key: r.employee_id.clone(),
            regular_hours: r.regular_hours,
            overtime_hours: r.overtime_hours,
        })
        .collect()
}
