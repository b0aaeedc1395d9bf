use serde::{Deserialize, Serialize};

/// Persisted layout of a [`DailyMaxRawState`](super::raw_state::DailyMaxRawState).
///
/// Every field is optional on the way in so partial or older snapshots still load.
/// Timestamps are ISO-8601 strings; `has_data` is derived on write and ignored on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyMaxSnapshot {
    pub max_temp_c: Option<f64>,
    pub precision: Option<f64>,
    pub source: Option<String>,
    pub timestamp: Option<String>,
    pub has_data: bool,
    pub hourly_max_temp_c: Option<f64>,
    pub hourly_timestamp: Option<String>,
}
