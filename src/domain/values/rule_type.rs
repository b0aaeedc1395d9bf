use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction in which the safety margin is applied before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    /// Wait for certainty: margin is added.
    Conservative,
    /// Act early: margin is subtracted.
    Aggressive,
}

impl RuleType {
    pub fn apply_margin(&self, temp_c: f64, margin_c: f64) -> f64 {
        match self {
            RuleType::Conservative => temp_c + margin_c,
            RuleType::Aggressive => temp_c - margin_c,
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleType::Conservative => write!(f, "conservative"),
            RuleType::Aggressive => write!(f, "aggressive"),
        }
    }
}

impl FromStr for RuleType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conservative" => Ok(RuleType::Conservative),
            "aggressive" => Ok(RuleType::Aggressive),
            _ => Err(DomainError::UnknownRuleType(s.to_string())),
        }
    }
}
