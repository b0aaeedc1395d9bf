//! Merge policy between the hourly METAR feed and synoptic 6-hour maxima.
//!
//! A candidate replaces the confirmed maximum only when strictly greater, so the
//! first source to report a new high keeps it against later equal readings.

use crate::domain::entities::metar_config::MetarConfig;
use crate::domain::entities::raw_state::DailyMaxRawState;
use crate::domain::error::DomainError;
use crate::domain::values::observation_source::ObservationSource;
use chrono::{DateTime, Utc};

fn exceeds(candidate: f64, current: Option<f64>) -> bool {
    current.map_or(true, |c| candidate > c)
}

fn confirm(
    state: &mut DailyMaxRawState,
    temp_c: f64,
    source: ObservationSource,
    timestamp: DateTime<Utc>,
) {
    state.max_temp_c = Some(temp_c);
    state.precision = Some(source.precision());
    state.source = Some(source);
    state.timestamp = Some(timestamp);
    tracing::debug!(temp_c, %source, %timestamp, "new confirmed daily max");
}

/// Apply an hourly METAR reading. Updates the hourly-only maximum and, when
/// higher, the confirmed maximum.
pub fn add_hourly_observation(
    state: &mut DailyMaxRawState,
    temp_c: f64,
    timestamp: Option<DateTime<Utc>>,
) -> Result<(), DomainError> {
    if !temp_c.is_finite() {
        return Err(DomainError::InvalidInput(format!(
            "Hourly temperature must be finite, got {temp_c}"
        )));
    }
    let observed_at = timestamp.unwrap_or_else(Utc::now);

    if exceeds(temp_c, state.hourly_max_temp_c) {
        state.hourly_max_temp_c = Some(temp_c);
        state.hourly_timestamp = Some(observed_at);
    }

    if exceeds(temp_c, state.max_temp_c) {
        confirm(state, temp_c, ObservationSource::Hourly, observed_at);
    }
    Ok(())
}

/// Apply a whole-degree 6-hour maximum. Never touches the hourly-only maximum.
pub fn add_6h_maximum(
    state: &mut DailyMaxRawState,
    metar_config: &MetarConfig,
    max_c: i32,
    window_end: Option<DateTime<Utc>>,
) {
    let candidate = f64::from(max_c);
    let window_end = window_end.unwrap_or_else(Utc::now);

    if exceeds(candidate, state.max_temp_c) {
        confirm(state, candidate, ObservationSource::SixHour, window_end);
    } else {
        tracing::debug!(
            max_c,
            configured_sources = metar_config.data_sources.len(),
            "6h maximum not above confirmed max"
        );
    }
}
