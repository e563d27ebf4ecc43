//! Average hours worked by all employees per pay period.

use crate::core::percent_of;
use crate::models::TimeRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PeriodHours {
    #[serde(rename = "EndDate")]
    pub end_date: NaiveDate,
    #[serde(rename = "Records")]
    pub records: usize,
    #[serde(rename = "Total Hours")]
    pub avg_total_hours: f64,
    #[serde(rename = "Overtime Hours")]
    pub avg_overtime_hours: f64,
    /// Share of overtime in the average total, in percent (1 decimal).
    #[serde(rename = "% OT Hours")]
    pub ot_percent: Option<f64>,
}

pub const HEADERS: [&str; 5] = [
    "EndDate",
    "Records",
    "Total Hours",
    "Overtime Hours",
    "% OT Hours",
];

/// Group by pay-period end date (ascending) and average total and
/// overtime hours in each group.
pub fn average_hours(records: &[TimeRecord]) -> Vec<PeriodHours> {
    // end date → (sum total, sum overtime, count)
    let mut groups: BTreeMap<NaiveDate, (f64, f64, usize)> = BTreeMap::new();

    for r in records {
        let g = groups.entry(r.end_date).or_insert((0.0, 0.0, 0));
        g.0 += r.total_hours;
        g.1 += r.overtime_hours;
        g.2 += 1;
    }

    groups
        .into_iter()
        .map(|(end_date, (total, ot, n))| {
            let avg_total = total / n as f64;
            let avg_ot = ot / n as f64;
            PeriodHours {
                end_date,
                records: n,
                avg_total_hours: avg_total,
                avg_overtime_hours: avg_ot,
                ot_percent: percent_of(avg_ot, avg_total),
            }
        })
        .collect()
}
