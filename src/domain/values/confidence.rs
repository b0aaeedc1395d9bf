//! Confidence classification for a daily maximum and the Celsius safety margin
//! that goes with it.

use crate::domain::error::DomainError;
use crate::domain::values::precision::Precision;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Half of the ±1°C rounding uncertainty of whole-degree readings.
const MEDIUM_SAFETY_MARGIN_C: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfidenceLevel {
    High,
    Medium,
}

impl ConfidenceLevel {
    pub fn for_precision(precision: Precision) -> Self {
        match precision {
            Precision::High => ConfidenceLevel::High,
            Precision::Low => ConfidenceLevel::Medium,
        }
    }

    pub fn safety_margin_c(&self) -> f64 {
        match self {
            ConfidenceLevel::High => 0.0,
            ConfidenceLevel::Medium => MEDIUM_SAFETY_MARGIN_C,
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLevel::High => write!(f, "HIGH"),
            ConfidenceLevel::Medium => write!(f, "MEDIUM"),
        }
    }
}

impl FromStr for ConfidenceLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HIGH" => Ok(ConfidenceLevel::High),
            "MEDIUM" => Ok(ConfidenceLevel::Medium),
            _ => Err(DomainError::UnknownConfidence(s.to_string())),
        }
    }
}

/// Map a raw precision to a confidence level. There is no default: an absent or
/// unrecognised precision is an error.
pub fn confidence_level(precision: Option<f64>) -> Result<ConfidenceLevel, DomainError> {
    let precision = precision
        .ok_or_else(|| DomainError::UnknownPrecision("None".to_string()))?;
    Ok(ConfidenceLevel::for_precision(Precision::try_from(precision)?))
}

/// Safety margin in Celsius for a raw precision.
pub fn safety_margin_c(precision: Option<f64>) -> Result<f64, DomainError> {
    Ok(confidence_level(precision)?.safety_margin_c())
}
