//! Glue between persisted snapshots, incoming observations and trading rules.

use crate::application::daily_max::DailyMaxState;
use crate::domain::entities::daily_max_result::DailyMaxResult;
use crate::domain::entities::snapshot::DailyMaxSnapshot;
use crate::domain::error::DomainError;
use crate::domain::values::confidence::ConfidenceLevel;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// Daily maximum as handed to trading rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradingMaxTemp {
    pub max_temp_f: i64,
    pub start_time: String,
    pub confidence: ConfidenceLevel,
}

/// Everything known about a station's day, as reported by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct StationStatus {
    pub station: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub result: Option<DailyMaxResult>,
    pub hourly_only_max_f: Option<i64>,
    pub trading: Option<TradingMaxTemp>,
    pub snapshot: DailyMaxSnapshot,
}

/// True when `current` falls on a later local calendar day than `previous`.
pub fn is_new_local_day(
    previous: DateTime<Utc>,
    current: DateTime<Utc>,
    utc_offset: FixedOffset,
) -> bool {
    current.with_timezone(&utc_offset).date_naive() > previous.with_timezone(&utc_offset).date_naive()
}

/// Bring `state` up to date for the current local day.
///
/// On rollover the previous snapshot is ignored and the state starts empty.
/// Otherwise a stored snapshot must parse and validate; a bad snapshot is
/// reported as corrupted rather than replaced by a fresh state.
pub fn restore_daily_state(
    state: &mut DailyMaxState,
    should_reset: bool,
    previous_json: Option<&str>,
) -> Result<(), DomainError> {
    if should_reset {
        if previous_json.is_some() {
            tracing::warn!("local day rolled over, discarding previous daily max snapshot");
        }
        state.reset_for_new_day();
        return Ok(());
    }

    let Some(raw) = previous_json else {
        return Ok(());
    };

    let snapshot: DailyMaxSnapshot = serde_json::from_str(raw)
        .map_err(|e| DomainError::CorruptedSnapshot(format!("stored JSON does not parse: {e}")))?;
    state
        .load_from_state_dict(&snapshot)
        .map_err(|e| DomainError::CorruptedSnapshot(e.to_string()))?;

    tracing::info!(has_data = snapshot.has_data, "restored daily max snapshot");
    Ok(())
}

/// Feed one observation cycle: the hourly reading, then the 6-hour maximum if the
/// report carried one.
pub fn add_observations_to_state(
    state: &mut DailyMaxState,
    temp_c: f64,
    timestamp: DateTime<Utc>,
    six_hour_max_c: Option<i32>,
) -> Result<(), DomainError> {
    state.add_hourly_observation(temp_c, Some(timestamp))?;
    if let Some(max_c) = six_hour_max_c {
        state.add_6h_maximum(max_c, Some(timestamp));
    }
    Ok(())
}

pub fn extract_result_for_trading(
    state: &DailyMaxState,
    start_time: &str,
) -> Result<TradingMaxTemp, DomainError> {
    let result = state.get_daily_max_result().ok_or_else(|| {
        DomainError::NoData("daily max state produced no result after observations".to_string())
    })?;

    Ok(TradingMaxTemp {
        max_temp_f: result.max_temp_f,
        start_time: start_time.to_string(),
        confidence: result.confidence,
    })
}
