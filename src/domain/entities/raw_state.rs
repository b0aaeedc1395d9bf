use crate::domain::values::observation_source::ObservationSource;
use crate::domain::values::precision::Precision;
use chrono::{DateTime, Utc};

/// Running daily-maximum state for one station-day.
///
/// `None` stands for "nothing observed yet today". The confirmed maximum and the
/// hourly-only maximum are tracked independently; both only ever increase until
/// the next day reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyMaxRawState {
    pub(crate) max_temp_c: Option<f64>,
    pub(crate) precision: Option<Precision>,
    pub(crate) source: Option<ObservationSource>,
    pub(crate) timestamp: Option<DateTime<Utc>>,
    pub(crate) hourly_max_temp_c: Option<f64>,
    pub(crate) hourly_timestamp: Option<DateTime<Utc>>,
}

impl DailyMaxRawState {
    pub fn max_temp_c(&self) -> Option<f64> {
        self.max_temp_c
    }

    pub fn precision(&self) -> Option<Precision> {
        self.precision
    }

    pub fn source(&self) -> Option<ObservationSource> {
        self.source
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    pub fn hourly_max_temp_c(&self) -> Option<f64> {
        self.hourly_max_temp_c
    }

    pub fn hourly_timestamp(&self) -> Option<DateTime<Utc>> {
        self.hourly_timestamp
    }

    pub fn has_data(&self) -> bool {
        self.max_temp_c.is_some()
    }
}
