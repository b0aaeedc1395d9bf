use crate::domain::entities::daily_max_result::DailyMaxResult;
use crate::domain::entities::raw_state::DailyMaxRawState;
use crate::domain::error::DomainError;
use crate::domain::ports::temperature_converter::TemperatureConverter;
use crate::domain::values::confidence::{self, ConfidenceLevel};
use crate::domain::values::rule_type::RuleType;

/// Current confirmed maximum in Fahrenheit, or `None` when nothing usable has been
/// observed today.
pub fn daily_max_result(
    state: &DailyMaxRawState,
    converter: &dyn TemperatureConverter,
) -> Option<DailyMaxResult> {
    let max_temp_c = state.max_temp_c.filter(|t| t.is_finite())?;
    let precision = state.precision?;
    let source = state.source?;

    Some(DailyMaxResult {
        max_temp_f: converter.to_fahrenheit(max_temp_c),
        confidence: ConfidenceLevel::for_precision(precision),
        precision_c: precision.value_c(),
        source,
        timestamp: state.timestamp,
    })
}

/// Confirmed maximum with the confidence margin applied in Celsius, then converted.
pub fn adjusted_temp_for_rule(
    state: &DailyMaxRawState,
    rule_type: RuleType,
    converter: &dyn TemperatureConverter,
) -> Result<i64, DomainError> {
    let max_temp_c = state
        .max_temp_c
        .filter(|t| t.is_finite())
        .ok_or_else(|| DomainError::NoData("no confirmed daily maximum yet".to_string()))?;
    let margin_c = confidence::safety_margin_c(state.precision.map(|p| p.value_c()))?;

    Ok(converter.to_fahrenheit(rule_type.apply_margin(max_temp_c, margin_c)))
}

/// Fahrenheit view of the hourly feed alone, ignoring 6-hour maxima.
pub fn hourly_only_max_f(
    state: &DailyMaxRawState,
    converter: &dyn TemperatureConverter,
) -> Option<i64> {
    state
        .hourly_max_temp_c
        .filter(|t| t.is_finite())
        .map(|t| converter.to_fahrenheit(t))
}
