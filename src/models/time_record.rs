//! Typed timekeeping rows and the pay periods they belong to.

use crate::models::rate_type::RateType;
use chrono::NaiveDate;

/// One payroll cycle, identified by its boundary dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayPeriod {
    pub begin: NaiveDate,
    pub end: NaiveDate,
}

/// One row per employee per pay period, as loaded from the timekeeping CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRecord {
    pub employee_id: String,
    pub employee_name: Option<String>,
    pub store: String,
    pub description: String,
    pub minor: String,
    pub rate_type: RateType,
    pub rate_time_frame: String,
    pub begin_date: NaiveDate,
    pub end_date: NaiveDate,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub total_hours: f64,
    pub break_time: Option<f64>,
    pub reg_pay: Option<f64>,
    pub over_pay: Option<f64>,
    pub total_pay: Option<f64>,
}

impl TimeRecord {
    pub fn pay_period(&self) -> PayPeriod {
        PayPeriod {
            begin: self.begin_date,
            end: self.end_date,
        }
    }
}
