pub mod anomaly;
pub mod rate_type;
pub mod time_record;

pub use anomaly::{BreakTimeAnomaly, PayPeriodAnomaly};
pub use rate_type::RateType;
pub use time_record::{PayPeriod, TimeRecord};
