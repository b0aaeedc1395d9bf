//! Daily maximum temperature tracking.
//!
//! [`DailyMaxState`] owns one station-day of state and composes the tracker,
//! result generator and state manager. It is not synchronised: one processing
//! context owns and mutates an instance at a time.

pub mod observation_tracker;
pub mod result_generator;
pub mod state_manager;

use crate::domain::entities::daily_max_result::DailyMaxResult;
use crate::domain::entities::metar_config::MetarConfig;
use crate::domain::entities::raw_state::DailyMaxRawState;
use crate::domain::entities::snapshot::DailyMaxSnapshot;
use crate::domain::error::{DomainError, MetarConfigLoadError};
use crate::domain::ports::temperature_converter::TemperatureConverter;
use crate::domain::values::confidence::{self, ConfidenceLevel};
use crate::domain::values::rule_type::RuleType;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct DailyMaxState {
    state: DailyMaxRawState,
    metar_config: MetarConfig,
    converter: Arc<dyn TemperatureConverter>,
}

impl DailyMaxState {
    pub fn new(metar_config: MetarConfig, converter: Arc<dyn TemperatureConverter>) -> Self {
        Self {
            state: DailyMaxRawState::default(),
            metar_config,
            converter,
        }
    }

    /// Build from a config loader. A load failure is logged and returned; no
    /// instance exists without a valid METAR config.
    pub fn load<F>(
        load_config: F,
        converter: Arc<dyn TemperatureConverter>,
    ) -> Result<Self, MetarConfigLoadError>
    where
        F: FnOnce() -> Result<MetarConfig, MetarConfigLoadError>,
    {
        match load_config() {
            Ok(config) => Ok(Self::new(config, converter)),
            Err(e) => {
                tracing::error!(error = ?e, "failed to load METAR config");
                Err(e)
            }
        }
    }

    pub fn raw_state(&self) -> &DailyMaxRawState {
        &self.state
    }

    pub fn metar_config(&self) -> &MetarConfig {
        &self.metar_config
    }

    pub fn add_hourly_observation(
        &mut self,
        temp_c: f64,
        timestamp: Option<DateTime<Utc>>,
    ) -> Result<(), DomainError> {
        observation_tracker::add_hourly_observation(&mut self.state, temp_c, timestamp)
    }

    pub fn add_6h_maximum(&mut self, max_c: i32, window_end: Option<DateTime<Utc>>) {
        observation_tracker::add_6h_maximum(&mut self.state, &self.metar_config, max_c, window_end)
    }

    /// Confidence for a reading of the given precision. Errors on anything but
    /// 0.1 or 1.0, including `None`; pass `raw_state().precision()` to ask about
    /// the tracked maximum.
    pub fn get_confidence_level(&self, precision: Option<f64>) -> Result<ConfidenceLevel, DomainError> {
        confidence::confidence_level(precision)
    }

    pub fn get_safety_margin_c(&self, precision: Option<f64>) -> Result<f64, DomainError> {
        confidence::safety_margin_c(precision)
    }

    pub fn get_daily_max_result(&self) -> Option<DailyMaxResult> {
        result_generator::daily_max_result(&self.state, self.converter.as_ref())
    }

    /// `rule_type` is `"conservative"` or `"aggressive"`.
    pub fn get_adjusted_temp_for_rule(&self, rule_type: &str) -> Result<i64, DomainError> {
        let rule_type: RuleType = rule_type.parse()?;
        result_generator::adjusted_temp_for_rule(&self.state, rule_type, self.converter.as_ref())
    }

    pub fn get_hourly_only_max_f(&self) -> Option<i64> {
        result_generator::hourly_only_max_f(&self.state, self.converter.as_ref())
    }

    pub fn reset_for_new_day(&mut self) {
        state_manager::reset_for_new_day(&mut self.state);
        tracing::info!("daily max state reset for new day");
    }

    pub fn get_state_dict(&self) -> DailyMaxSnapshot {
        state_manager::state_dict(&self.state)
    }

    pub fn load_from_state_dict(&mut self, snapshot: &DailyMaxSnapshot) -> Result<(), DomainError> {
        state_manager::load_from_state_dict(&mut self.state, snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn config() -> MetarConfig {
        let mut data_sources = BTreeMap::new();
        data_sources.insert("test_metar".to_string(), serde_json::json!({"precision": 0.1}));
        MetarConfig { data_sources }
    }

    fn rounding(c: f64) -> i64 {
        (c * 9.0 / 5.0 + 32.0).round() as i64
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = DailyMaxState::new(config(), Arc::new(rounding));
        assert_eq!(state.raw_state(), &DailyMaxRawState::default());
        assert!(state.metar_config().source("test_metar").is_some());
    }

    #[test]
    fn test_load_propagates_config_error() {
        let result = DailyMaxState::load(
            || {
                Err(MetarConfigLoadError::NotFound {
                    path: "missing.json".into(),
                })
            },
            Arc::new(rounding),
        );
        assert!(matches!(result, Err(MetarConfigLoadError::NotFound { .. })));
    }

    #[test]
    fn test_confidence_requires_data() {
        let mut state = DailyMaxState::new(config(), Arc::new(rounding));
        let current = |s: &DailyMaxState| s.raw_state().precision().map(f64::from);
        assert!(matches!(
            state.get_confidence_level(current(&state)),
            Err(DomainError::UnknownPrecision(_))
        ));

        state.add_6h_maximum(21, None);
        assert_eq!(state.get_confidence_level(current(&state)).unwrap(), ConfidenceLevel::Medium);
        assert_eq!(state.get_safety_margin_c(current(&state)).unwrap(), 0.5);

        state.add_hourly_observation(21.4, None).unwrap();
        assert_eq!(state.get_confidence_level(current(&state)).unwrap(), ConfidenceLevel::High);
        assert_eq!(state.get_safety_margin_c(current(&state)).unwrap(), 0.0);
    }

    #[test]
    fn test_confidence_for_explicit_precision() {
        // Answers for the precision asked about, not the tracked one.
        let mut state = DailyMaxState::new(config(), Arc::new(rounding));
        state.add_hourly_observation(21.4, None).unwrap();

        assert_eq!(state.get_confidence_level(Some(1.0)).unwrap(), ConfidenceLevel::Medium);
        assert_eq!(state.get_safety_margin_c(Some(1.0)).unwrap(), 0.5);
        assert_eq!(state.get_confidence_level(Some(0.1)).unwrap(), ConfidenceLevel::High);
        assert_eq!(state.get_safety_margin_c(Some(0.1)).unwrap(), 0.0);
        assert!(matches!(
            state.get_confidence_level(Some(0.5)),
            Err(DomainError::UnknownPrecision(_))
        ));
        assert!(state.get_safety_margin_c(None).is_err());
    }

    #[test]
    fn test_unknown_rule_type() {
        let mut state = DailyMaxState::new(config(), Arc::new(rounding));
        state.add_hourly_observation(25.0, None).unwrap();
        let err = state.get_adjusted_temp_for_rule("unknown").unwrap_err();
        assert!(matches!(err, DomainError::UnknownRuleType(ref t) if t == "unknown"));
    }
}
