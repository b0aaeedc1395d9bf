use crate::domain::error::DomainError;
use crate::domain::values::precision::Precision;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical feed that produced a confirmed maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObservationSource {
    /// Routine hourly METAR reading.
    #[serde(rename = "hourly")]
    Hourly,
    /// Synoptic 6-hour maximum group.
    #[serde(rename = "6h")]
    SixHour,
}

impl ObservationSource {
    pub fn precision(&self) -> Precision {
        match self {
            ObservationSource::Hourly => Precision::High,
            ObservationSource::SixHour => Precision::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObservationSource::Hourly => "hourly",
            ObservationSource::SixHour => "6h",
        }
    }
}

impl fmt::Display for ObservationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObservationSource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hourly" => Ok(ObservationSource::Hourly),
            "6h" => Ok(ObservationSource::SixHour),
            _ => Err(DomainError::UnknownSource(s.to_string())),
        }
    }
}
