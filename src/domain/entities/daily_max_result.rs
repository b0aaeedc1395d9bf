use crate::domain::values::confidence::ConfidenceLevel;
use crate::domain::values::observation_source::ObservationSource;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Public view of the confirmed daily maximum, built fresh on every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyMaxResult {
    pub max_temp_f: i64,
    pub confidence: ConfidenceLevel,
    pub precision_c: f64,
    pub source: ObservationSource,
    pub timestamp: Option<DateTime<Utc>>,
}
