//! Flat projections returned by the anomaly reports.

use crate::models::rate_type::RateType;
use crate::models::time_record::TimeRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Row of the "missing break time" report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakTimeAnomaly {
    pub employee_id: String,
    pub store: String,
    pub description: String,
    pub minor: String,
    pub rate_type: RateType,
    pub begin_date: NaiveDate,
    pub end_date: NaiveDate,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub total_hours: f64,
    pub break_time: Option<f64>,
}

impl From<&TimeRecord> for BreakTimeAnomaly {
    fn from(r: &TimeRecord) -> Self {
        Self {
            employee_id: r.employee_id.clone(),
            store: r.store.clone(),
            description: r.description.clone(),
            minor: r.minor.clone(),
            rate_type: r.rate_type.clone(),
            begin_date: r.begin_date,
            end_date: r.end_date,
            regular_hours: r.regular_hours,
            overtime_hours: r.overtime_hours,
            total_hours: r.total_hours,
            break_time: r.break_time,
        }
    }
}

/// Row of the "missing pay periods" report. Same columns as
/// [`BreakTimeAnomaly`] without `break_time`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayPeriodAnomaly {
    pub employee_id: String,
    pub store: String,
    pub description: String,
    pub minor: String,
    pub rate_type: RateType,
    pub begin_date: NaiveDate,
    pub end_date: NaiveDate,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub total_hours: f64,
}

impl From<&TimeRecord> for PayPeriodAnomaly {
    fn from(r: &TimeRecord) -> Self {
        Self {
            employee_id: r.employee_id.clone(),
            store: r.store.clone(),
            description: r.description.clone(),
            minor: r.minor.clone(),
            rate_type: r.rate_type.clone(),
            begin_date: r.begin_date,
            end_date: r.end_date,
            regular_hours: r.regular_hours,
            overtime_hours: r.overtime_hours,
            total_hours: r.total_hours,
        }
    }
}
