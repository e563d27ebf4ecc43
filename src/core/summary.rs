//! Per-store totals of hours and pay.

use crate::core::percent_of;
use crate::models::TimeRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Raw totals for one store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoreSummary {
    pub store: String,
    /// Records carrying an employee name (one per employee per pay period).
    pub employees: usize,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub total_hours: f64,
    pub reg_pay: f64,
    pub over_pay: f64,
    pub total_pay: f64,
}

/// Hours view of a store summary.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StoreHours {
    #[serde(rename = "Store")]
    pub store: String,
    #[serde(rename = "# Employees")]
    pub employees: usize,
    #[serde(rename = "Total Reg Hours")]
    pub regular_hours: f64,
    #[serde(rename = "Total OT Hours")]
    pub overtime_hours: f64,
    #[serde(rename = "Total Hours")]
    pub total_hours: f64,
    #[serde(rename = "% OT Hours")]
    pub ot_percent: Option<f64>,
}

/// Pay view of a store summary.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StorePay {
    #[serde(rename = "Store")]
    pub store: String,
    #[serde(rename = "# Employees")]
    pub employees: usize,
    #[serde(rename = "Total Reg Pay")]
    pub reg_pay: f64,
    #[serde(rename = "Total OT Pay")]
    pub over_pay: f64,
    #[serde(rename = "Total Pay")]
    pub total_pay: f64,
    #[serde(rename = "% OT Pay")]
    pub ot_percent: Option<f64>,
}

pub const HOURS_HEADERS: [&str; 6] = [
    "Store",
    "# Employees",
    "Total Reg Hours",
    "Total OT Hours",
    "Total Hours",
    "% OT Hours",
];

pub const PAY_HEADERS: [&str; 6] = [
    "Store",
    "# Employees",
    "Total Reg Pay",
    "Total OT Pay",
    "Total Pay",
    "% OT Pay",
];

impl StoreSummary {
    pub fn hours_view(&self) -> StoreHours {
        StoreHours {
            store: self.store.clone(),
            employees: self.employees,
            regular_hours: self.regular_hours,
            overtime_hours: self.overtime_hours,
            total_hours: self.total_hours,
            ot_percent: percent_of(self.overtime_hours, self.total_hours),
        }
    }

    pub fn pay_view(&self) -> StorePay {
        StorePay {
            store: self.store.clone(),
            employees: self.employees,
            reg_pay: self.reg_pay,
            over_pay: self.over_pay,
            total_pay: self.total_pay,
            ot_percent: percent_of(self.over_pay, self.total_pay),
        }
    }
}

/// Group by store (ascending). Absent pay amounts are skipped in the sums.
pub fn store_summary(records: &[TimeRecord]) -> Vec<StoreSummary> {
    let mut groups: BTreeMap<&str, StoreSummary> = BTreeMap::new();

    for r in records {
        let s = groups
            .entry(r.store.as_str())
            .or_insert_with(|| StoreSummary {
                store: r.store.clone(),
                ..Default::default()
            });

        s.employees += usize::from(r.employee_name.is_some());
        s.regular_hours += r.regular_hours;
        s.overtime_hours += r.overtime_hours;
        s.total_hours += r.total_hours;
        s.reg_pay += r.reg_pay.unwrap_or(0.0);
        s.over_pay += r.over_pay.unwrap_or(0.0);
        s.total_pay += r.total_pay.unwrap_or(0.0);
    }

    groups.into_values().collect()
}
