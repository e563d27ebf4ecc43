pub mod anomaly;
pub mod conversion;
pub mod hours;
pub mod positions;
pub mod report;
pub mod summary;

pub use anomaly::AnomalyDetector;
pub use report::{Cell, ReportKind, ReportTable};

/// `100 * round(part / whole, 3)`; `None` when `whole` is zero.
pub(crate) fn percent_of(part: f64, whole: f64) -> Option<f64> {
    if whole == 0.0 {
        return None;
    }
    // round(1000 x) / 10 keeps one exact decimal
    Some(((part / whole) * 1000.0).round() / 10.0)
}
