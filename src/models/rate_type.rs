//! Pay rate classification as found in the `RateType` column.

use serde::{Serialize, Serializer};
use std::fmt;

/// Pay rate classification of a record.
///
/// The set is closed on the two values the reports care about; anything
/// else found in the source file is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RateType {
    Salary,
    Hourly,
    Other(String),
}

impl RateType {
    pub fn as_str(&self) -> &str {
        match self {
            RateType::Salary => "Salary",
            RateType::Hourly => "Hourly",
            RateType::Other(s) => s.as_str(),
        }
    }

    /// Convert a CSV cell → enum. Matching is exact on the trimmed value,
    /// the same way the source data is compared.
    pub fn from_csv_str(s: &str) -> Self {
        match s.trim() {
            "Salary" => RateType::Salary,
            "Hourly" => RateType::Hourly,
            other => RateType::Other(other.to_string()),
        }
    }

    pub fn is_salary(&self) -> bool {
        matches!(self, RateType::Salary)
    }
}

impl fmt::Display for RateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RateType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
