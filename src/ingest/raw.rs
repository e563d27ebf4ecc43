use super::parse::{date, number, optional_number, present, required};
use crate::errors::{AppError, AppResult};
use crate::models::{RateType, TimeRecord};
use csv::StringRecord;
use serde::Deserialize;

/// Columns the header must carry, as `(header, accepted alias)`.
/// `BreakTime` is listed: its cells may be empty, the column may not.
const REQUIRED_COLUMNS: [(&str, &str); 12] = [
    ("EmployeeID", "employee_id"),
    ("Store", "store"),
    ("Description", "description"),
    ("Minor", "minor"),
    ("RateType", "rate_type"),
    ("RateTimeFrame", "rate_time_frame"),
    ("BeginDate", "begin_date"),
    ("EndDate", "end_date"),
    ("RegularHours", "regular_hours"),
    ("OvertimeHours", "overtime_hours"),
    ("TotalHours", "total_hours"),
    ("BreakTime", "break_time"),
];

/// First required column absent from `headers`, as an error.
pub(super) fn check_headers(headers: &StringRecord) -> AppResult<()> {
    for (name, alias) in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == name || h == alias) {
            return Err(AppError::MissingColumn(name));
        }
    }
    Ok(())
}

/// One CSV row before validation: every cell optional, so that an empty
/// cell surfaces as a typed error naming its row, not a serde one.
/// Optional columns (`EmployeeName`, pay amounts) may be left out entirely.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawRecord {
    #[serde(rename = "EmployeeID", alias = "employee_id")]
    employee_id: Option<String>,
    #[serde(rename = "EmployeeName", alias = "employee_name")]
    employee_name: Option<String>,
    #[serde(rename = "Store", alias = "store")]
    store: Option<String>,
    #[serde(rename = "Description", alias = "description")]
    description: Option<String>,
    #[serde(rename = "Minor", alias = "minor")]
    minor: Option<String>,
    #[serde(rename = "RateType", alias = "rate_type")]
    rate_type: Option<String>,
    #[serde(rename = "RateTimeFrame", alias = "rate_time_frame")]
    rate_time_frame: Option<String>,
    #[serde(rename = "BeginDate", alias = "begin_date")]
    begin_date: Option<String>,
    #[serde(rename = "EndDate", alias = "end_date")]
    end_date: Option<String>,
    #[serde(rename = "RegularHours", alias = "regular_hours")]
    regular_hours: Option<String>,
    #[serde(rename = "OvertimeHours", alias = "overtime_hours")]
    overtime_hours: Option<String>,
    #[serde(rename = "TotalHours", alias = "total_hours")]
    total_hours: Option<String>,
    #[serde(rename = "BreakTime", alias = "break_time")]
    break_time: Option<String>,
    #[serde(rename = "RegPay", alias = "reg_pay")]
    reg_pay: Option<String>,
    #[serde(rename = "OverPay", alias = "over_pay")]
    over_pay: Option<String>,
    #[serde(rename = "TotalPay", alias = "total_pay")]
    total_pay: Option<String>,
}

impl RawRecord {
    /// Typed record, or `InvalidInput` naming the 1-based `row` and field.
    pub(super) fn validate(self, row: usize) -> AppResult<TimeRecord> {
        Ok(TimeRecord {
            employee_id: required(self.employee_id, row, "employee_id")?,
            employee_name: present(self.employee_name),
            store: required(self.store, row, "store")?,
            description: required(self.description, row, "description")?,
            minor: required(self.minor, row, "minor")?,
            rate_type: RateType::from_csv_str(&required(self.rate_type, row, "rate_type")?),
            rate_time_frame: required(self.rate_time_frame, row, "rate_time_frame")?,
            begin_date: date(self.begin_date, row, "begin_date")?,
            end_date: date(self.end_date, row, "end_date")?,
            regular_hours: number(self.regular_hours, row, "regular_hours")?,
            overtime_hours: number(self.overtime_hours, row, "overtime_hours")?,
            total_hours: number(self.total_hours, row, "total_hours")?,
            break_time: optional_number(self.break_time, row, "break_time")?,
            reg_pay: optional_number(self.reg_pay, row, "reg_pay")?,
            over_pay: optional_number(self.over_pay, row, "over_pay")?,
            total_pay: optional_number(self.total_pay, row, "total_pay")?,
        })
    }
}
