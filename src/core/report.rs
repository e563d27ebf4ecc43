//! Common tabular shape shared by terminal output and file export.

use crate::core::anomaly::AnomalyDetector;
use crate::core::{conversion, hours, positions, summary};
use crate::errors::AppResult;
use crate::models::{BreakTimeAnomaly, PayPeriodAnomaly, TimeRecord};
use crate::utils::formatting::{fmt_date, fmt_hours, fmt_opt_hours, fmt_opt_percent};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    Conversion,
    Hours,
    SummaryHours,
    SummaryPay,
    Positions,
    MissingBreakTime,
    MissingPayPeriods,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Conversion => "conversion",
            ReportKind::Hours => "hours",
            ReportKind::SummaryHours => "summary-hours",
            ReportKind::SummaryPay => "summary-pay",
            ReportKind::Positions => "positions",
            ReportKind::MissingBreakTime => "missing-break-time",
            ReportKind::MissingPayPeriods => "missing-pay-periods",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Conversion => "Data Conversion",
            ReportKind::Hours => "Average Hours Worked by all Employees per Pay Period",
            ReportKind::SummaryHours => "Total Hours per Store",
            ReportKind::SummaryPay => "Total Pay per Store",
            ReportKind::Positions => "Number of Employees per Position per Store",
            ReportKind::MissingBreakTime => "Missing Break Time",
            ReportKind::MissingPayPeriods => "Missing Pay Periods",
        }
    }
}

pub const BREAK_TIME_HEADERS: [&str; 11] = [
    "employee_id",
    "store",
    "description",
    "minor",
    "rate_type",
    "begin_date",
    "end_date",
    "regular_hours",
    "overtime_hours",
    "total_hours",
    "break_time",
];

pub const PAY_PERIOD_HEADERS: [&str; 10] = [
    "employee_id",
    "store",
    "description",
    "minor",
    "rate_type",
    "begin_date",
    "end_date",
    "regular_hours",
    "overtime_hours",
    "total_hours",
];

/// Columns whose string values are calendar dates.
const DATE_COLUMNS: [&str; 3] = ["EndDate", "begin_date", "end_date"];

/// One report value with its type, at full precision.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Blank,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl Cell {
    fn from_json(column: &str, value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Cell::Blank,
            Some(Value::Number(n)) => n
                .as_f64()
                .map(Cell::Number)
                .unwrap_or_else(|| Cell::Text(n.to_string())),
            Some(Value::String(s)) if DATE_COLUMNS.contains(&column) => {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .map(Cell::Date)
                    .unwrap_or_else(|_| Cell::Text(s.clone()))
            }
            Some(Value::String(s)) => Cell::Text(s.clone()),
            Some(other) => Cell::Text(other.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Blank => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

/// A computed report flattened to display strings, plus its typed JSON form.
///
/// `rows` are rounded for reading (terminal, PDF); file formats meant to be
/// re-imported use [`ReportTable::cells`]. Absent values are empty strings
/// in `rows` and `null` in `json`.
#[derive(Debug, Clone)]
pub struct ReportTable {
    pub kind: ReportKind,
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub json: serde_json::Value,
}

impl ReportTable {
    /// Compute `kind` from the snapshot.
    pub fn build(kind: ReportKind, records: &[TimeRecord]) -> AppResult<Self> {
        match kind {
            ReportKind::Conversion => {
                let items = conversion::conversion_table(records);
                let rows = items
                    .iter()
                    .map(|c| {
                        vec![
                            c.key.clone(),
                            fmt_hours(c.regular_hours),
                            fmt_hours(c.overtime_hours),
                        ]
                    })
                    .collect();
                Self::assemble(kind, &conversion::HEADERS, rows, &items)
            }
            ReportKind::Hours => {
                let items = hours::average_hours(records);
                let rows = items
                    .iter()
                    .map(|h| {
                        vec![
                            fmt_date(&h.end_date),
                            h.records.to_string(),
                            fmt_hours(h.avg_total_hours),
                            fmt_hours(h.avg_overtime_hours),
                            fmt_opt_percent(h.ot_percent),
                        ]
                    })
                    .collect();
                Self::assemble(kind, &hours::HEADERS, rows, &items)
            }
            ReportKind::SummaryHours => {
                let items: Vec<summary::StoreHours> = summary::store_summary(records)
                    .iter()
                    .map(summary::StoreSummary::hours_view)
                    .collect();
                let rows = items
                    .iter()
                    .map(|s| {
                        vec![
                            s.store.clone(),
                            s.employees.to_string(),
                            fmt_hours(s.regular_hours),
                            fmt_hours(s.overtime_hours),
                            fmt_hours(s.total_hours),
                            fmt_opt_percent(s.ot_percent),
                        ]
                    })
                    .collect();
                Self::assemble(kind, &summary::HOURS_HEADERS, rows, &items)
            }
            ReportKind::SummaryPay => {
                let items: Vec<summary::StorePay> = summary::store_summary(records)
                    .iter()
                    .map(summary::StoreSummary::pay_view)
                    .collect();
                let rows = items
                    .iter()
                    .map(|s| {
                        vec![
                            s.store.clone(),
                            s.employees.to_string(),
                            fmt_hours(s.reg_pay),
                            fmt_hours(s.over_pay),
                            fmt_hours(s.total_pay),
                            fmt_opt_percent(s.ot_percent),
                        ]
                    })
                    .collect();
                Self::assemble(kind, &summary::PAY_HEADERS, rows, &items)
            }
            ReportKind::Positions => {
                let items = positions::flatten(&positions::position_counts(records));
                let rows = items
                    .iter()
                    .map(|p| {
                        vec![
                            p.description.clone(),
                            p.store.clone(),
                            p.employees.to_string(),
                        ]
                    })
                    .collect();
                Self::assemble(kind, &positions::HEADERS, rows, &items)
            }
            ReportKind::MissingBreakTime => {
                let items = AnomalyDetector::missing_break_time(records);
                let rows = items.iter().map(break_time_row).collect();
                Self::assemble(kind, &BREAK_TIME_HEADERS, rows, &items)
            }
            ReportKind::MissingPayPeriods => {
                let items = AnomalyDetector::missing_pay_periods(records);
                let rows = items.iter().map(pay_period_row).collect();
                Self::assemble(kind, &PAY_PERIOD_HEADERS, rows, &items)
            }
        }
    }

    fn assemble<T: Serialize>(
        kind: ReportKind,
        headers: &[&'static str],
        rows: Vec<Vec<String>>,
        items: &[T],
    ) -> AppResult<Self> {
        Ok(Self {
            kind,
            title: kind.title().to_string(),
            headers: headers.to_vec(),
            rows,
            json: serde_json::to_value(items)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Typed cells in header order, read back from `json`.
    pub fn cells(&self) -> Vec<Vec<Cell>> {
        let Some(items) = self.json.as_array() else {
            return Vec::new();
        };

        items
            .iter()
            .map(|item| {
                self.headers
                    .iter()
                    .map(|h| Cell::from_json(h, item.get(*h)))
                    .collect()
            })
            .collect()
    }
}

fn break_time_row(a: &BreakTimeAnomaly) -> Vec<String> {
    vec![
        a.employee_id.clone(),
        a.store.clone(),
        a.description.clone(),
        a.minor.clone(),
        a.rate_type.to_string(),
        fmt_date(&a.begin_date),
        fmt_date(&a.end_date),
        fmt_hours(a.regular_hours),
        fmt_hours(a.overtime_hours),
        fmt_hours(a.total_hours),
        fmt_opt_hours(a.break_time),
    ]
}

fn pay_period_row(a: &PayPeriodAnomaly) -> Vec<String> {
    vec![
        a.employee_id.clone(),
        a.store.clone(),
        a.description.clone(),
        a.minor.clone(),
        a.rate_type.to_string(),
        fmt_date(&a.begin_date),
        fmt_date(&a.end_date),
        fmt_hours(a.regular_hours),
        fmt_hours(a.overtime_hours),
        fmt_hours(a.total_hours),
    ]
}
