//! Number of employees per position per store.

use crate::models::TimeRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Flat row, used for export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PositionCount {
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Store")]
    pub store: String,
    #[serde(rename = "# Employees")]
    pub employees: usize,
}

pub const HEADERS: [&str; 3] = ["Description", "Store", "# Employees"];

/// Counts of one position across every store of the dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionGroup {
    pub description: String,
    /// `(store, count)` for every store, zero when the store has none.
    pub stores: Vec<(String, usize)>,
}

/// Count named employees per `(store, description)`.
///
/// Groups are keyed by store then description, both ascending. Stores are
/// listed in that order; positions in the order they first appear among
/// the sorted keys. Every position lists every store so charts line up.
/// Rows without an employee name keep their group but add nothing to it.
pub fn position_counts(records: &[TimeRecord]) -> Vec<PositionGroup> {
    let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();

    for r in records {
        *counts
            .entry((r.store.as_str(), r.description.as_str()))
            .or_default() += usize::from(r.employee_name.is_some());
    }

    let mut stores: Vec<&str> = Vec::new();
    let mut descriptions: Vec<&str> = Vec::new();
    for &(store, description) in counts.keys() {
        if stores.last() != Some(&store) {
            stores.push(store);
        }
        if !descriptions.contains(&description) {
            descriptions.push(description);
        }
    }

    descriptions
        .iter()
        .map(|d| PositionGroup {
            description: d.to_string(),
            stores: stores
                .iter()
                .map(|s| (s.to_string(), counts.get(&(*s, *d)).copied().unwrap_or(0)))
                .collect(),
        })
        .collect()
}

pub fn flatten(groups: &[PositionGroup]) -> Vec<PositionCount> {
    groups
        .iter()
        .flat_map(|g| {
            g.stores.iter().map(|(store, n)| PositionCount {
                description: g.description.clone(),
                store: store.clone(),
                employees: *n,
            })
        })
        .collect()
}
