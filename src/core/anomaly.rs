//! Missing-data detection over a timekeeping snapshot.
//!
//! Both checks are pure functions of the record slice: nothing is cached
//! and the input is never reordered, so calling them twice on the same
//! slice yields the same rows in the same order.

use crate::models::{BreakTimeAnomaly, PayPeriod, PayPeriodAnomaly, TimeRecord};
use std::collections::{HashMap, HashSet};
use tracing::debug;

pub struct AnomalyDetector;

impl AnomalyDetector {
    /// Non-salaried records without a break time.
    ///
    /// Salaried staff do not track breaks, so they are never reported.
    pub fn missing_break_time(records: &[TimeRecord]) -> Vec<BreakTimeAnomaly> {
        let out: Vec<BreakTimeAnomaly> = records
            .iter()
            .filter(|r| r.break_time.is_none() && !r.rate_type.is_salary())
            .map(BreakTimeAnomaly::from)
            .collect();

        debug!(
            checked = records.len(),
            flagged = out.len(),
            "missing break time check"
        );
        out
    }

    /// Every record of the employees that appear in fewer pay periods than
    /// the dataset contains.
    ///
    /// An employee with no record at all cannot be seen here, and an
    /// employee with more rows than periods is not flagged either.
    pub fn missing_pay_periods(records: &[TimeRecord]) -> Vec<PayPeriodAnomaly> {
        let total = total_period_count(records);
        let counts = observed_counts(records);

        let incomplete: HashSet<&str> = counts
            .iter()
            .filter(|(_, n)| **n < total)
            .map(|(id, _)| *id)
            .collect();

        debug!(
            periods = total,
            employees = counts.len(),
            incomplete = incomplete.len(),
            "missing pay periods check"
        );

        if incomplete.is_empty() {
            return Vec::new();
        }

        records
            .iter()
            .filter(|r| incomplete.contains(r.employee_id.as_str()))
            .map(PayPeriodAnomaly::from)
            .collect()
    }
}

/// Number of distinct `(begin_date, end_date)` pairs in the snapshot.
pub fn total_period_count(records: &[TimeRecord]) -> usize {
    records
        .iter()
        .map(TimeRecord::pay_period)
        .collect::<HashSet<PayPeriod>>()
        .len()
}

/// Rows per employee id.
pub fn observed_counts(records: &[TimeRecord]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in records {
        *counts.entry(r.employee_id.as_str()).or_default() += 1;
    }
    counts
}
