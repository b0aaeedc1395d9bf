use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const HIGH_PRECISION_C: f64 = 0.1;
const LOW_PRECISION_C: f64 = 1.0;
const PRECISION_TOLERANCE: f64 = 1e-9;

/// Resolution of the source that produced a temperature, in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum Precision {
    /// Hourly METAR readings, reported to a tenth of a degree.
    High,
    /// Synoptic 6-hour maxima, reported in whole degrees.
    Low,
}

impl Precision {
    pub fn value_c(&self) -> f64 {
        match self {
            Precision::High => HIGH_PRECISION_C,
            Precision::Low => LOW_PRECISION_C,
        }
    }
}

impl TryFrom<f64> for Precision {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if (value - HIGH_PRECISION_C).abs() < PRECISION_TOLERANCE {
            Ok(Precision::High)
        } else if (value - LOW_PRECISION_C).abs() < PRECISION_TOLERANCE {
            Ok(Precision::Low)
        } else {
            Err(DomainError::UnknownPrecision(value.to_string()))
        }
    }
}

impl From<Precision> for f64 {
    fn from(p: Precision) -> Self {
        p.value_c()
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value_c())
    }
}
