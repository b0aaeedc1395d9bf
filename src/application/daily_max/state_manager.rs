//! Snapshot, restore and day reset of the raw daily-max state.

use crate::domain::entities::raw_state::DailyMaxRawState;
use crate::domain::entities::snapshot::DailyMaxSnapshot;
use crate::domain::error::DomainError;
use crate::domain::values::observation_source::ObservationSource;
use crate::domain::values::precision::Precision;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

pub fn state_dict(state: &DailyMaxRawState) -> DailyMaxSnapshot {
    DailyMaxSnapshot {
        max_temp_c: state.max_temp_c,
        precision: state.precision.map(|p| p.value_c()),
        source: state.source.map(|s| s.to_string()),
        timestamp: state.timestamp.map(format_timestamp),
        has_data: state.has_data(),
        hourly_max_temp_c: state.hourly_max_temp_c,
        hourly_timestamp: state.hourly_timestamp.map(format_timestamp),
    }
}

/// Replace `state` with the contents of `snapshot`. Absent fields load as empty.
/// The state is left unchanged if any present field fails validation.
pub fn load_from_state_dict(
    state: &mut DailyMaxRawState,
    snapshot: &DailyMaxSnapshot,
) -> Result<(), DomainError> {
    let precision = snapshot
        .precision
        .map(Precision::try_from)
        .transpose()
        .map_err(|e| DomainError::InvalidSnapshot(format!("precision: {e}")))?;
    let source = snapshot
        .source
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::parse::<ObservationSource>)
        .transpose()
        .map_err(|e| DomainError::InvalidSnapshot(format!("source: {e}")))?;

    *state = DailyMaxRawState {
        max_temp_c: snapshot.max_temp_c.filter(|t| t.is_finite()),
        precision,
        source,
        timestamp: parse_timestamp("timestamp", snapshot.timestamp.as_deref())?,
        hourly_max_temp_c: snapshot.hourly_max_temp_c.filter(|t| t.is_finite()),
        hourly_timestamp: parse_timestamp("hourly_timestamp", snapshot.hourly_timestamp.as_deref())?,
    };
    Ok(())
}

pub fn reset_for_new_day(state: &mut DailyMaxRawState) {
    *state = DailyMaxRawState::default();
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Accepts RFC 3339 or an offset-less ISO-8601 datetime, which is taken as UTC.
fn parse_timestamp(field: &str, raw: Option<&str>) -> Result<Option<DateTime<Utc>>, DomainError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Some(naive.and_utc()))
        .map_err(|e| DomainError::InvalidSnapshot(format!("{field} '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn populated() -> DailyMaxRawState {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap();
        DailyMaxRawState {
            max_temp_c: Some(24.4),
            precision: Some(Precision::High),
            source: Some(ObservationSource::Hourly),
            timestamp: Some(ts),
            hourly_max_temp_c: Some(24.4),
            hourly_timestamp: Some(ts),
        }
    }

    #[test]
    fn test_state_dict_layout() {
        let value = serde_json::to_value(state_dict(&populated())).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "max_temp_c": 24.4,
                "precision": 0.1,
                "source": "hourly",
                "timestamp": "2024-06-01T14:00:00+00:00",
                "has_data": true,
                "hourly_max_temp_c": 24.4,
                "hourly_timestamp": "2024-06-01T14:00:00+00:00"
            })
        );
    }

    #[test]
    fn test_state_dict_empty() {
        let snap = state_dict(&DailyMaxRawState::default());
        assert!(!snap.has_data);
        assert_eq!(snap.max_temp_c, None);
        assert_eq!(snap.timestamp, None);
    }

    #[test]
    fn test_round_trip_keeps_microseconds() {
        let mut original = populated();
        original.timestamp = Some(
            Utc.with_ymd_and_hms(2024, 6, 1, 15, 4, 5).unwrap()
                + chrono::Duration::microseconds(123_456),
        );
        let mut restored = DailyMaxRawState::default();
        load_from_state_dict(&mut restored, &state_dict(&original)).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_load_missing_fields_gives_empty_state() {
        let mut state = populated();
        load_from_state_dict(&mut state, &DailyMaxSnapshot::default()).unwrap();
        assert_eq!(state, DailyMaxRawState::default());
    }

    #[test]
    fn test_load_naive_and_empty_timestamps() {
        let snapshot = DailyMaxSnapshot {
            max_temp_c: Some(25.5),
            precision: Some(1.0),
            source: Some("6h".into()),
            timestamp: Some("2025-01-15T12:00:00".into()),
            hourly_timestamp: Some(String::new()),
            ..Default::default()
        };
        let mut state = DailyMaxRawState::default();
        load_from_state_dict(&mut state, &snapshot).unwrap();

        assert_eq!(state.timestamp, Some(Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()));
        assert_eq!(state.hourly_timestamp, None);
        assert_eq!(state.precision, Some(Precision::Low));
    }

    #[test]
    fn test_invalid_fields_rejected_without_partial_load() {
        let mut state = populated();
        for snapshot in [
            DailyMaxSnapshot { precision: Some(0.5), ..Default::default() },
            DailyMaxSnapshot { source: Some("metar".into()), ..Default::default() },
            DailyMaxSnapshot { timestamp: Some("yesterday".into()), ..Default::default() },
        ] {
            let err = load_from_state_dict(&mut state, &snapshot).unwrap_err();
            assert!(matches!(err, DomainError::InvalidSnapshot(_)));
            assert_eq!(state, populated());
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = populated();
        reset_for_new_day(&mut state);
        let once = state.clone();
        reset_for_new_day(&mut state);
        assert_eq!(state, once);
        assert_eq!(state, DailyMaxRawState::default());
    }
}
