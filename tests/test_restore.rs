mod common;

use chrono::{FixedOffset, TimeZone, Utc};
use common::new_state;
use dailymax::application::max_temp_processor::{
    add_observations_to_state, extract_result_for_trading, is_new_local_day, restore_daily_state,
};
use dailymax::domain::error::DomainError;
use dailymax::domain::values::confidence::ConfidenceLevel;

#[test]
fn test_restore_loads_previous_snapshot() {
    let mut state = new_state();
    restore_daily_state(
        &mut state,
        false,
        Some(r#"{"max_temp_c": 10, "precision": 1.0, "source": "6h", "timestamp": null}"#),
    )
    .unwrap();

    assert_eq!(state.raw_state().max_temp_c(), Some(10.0));
    assert_eq!(state.get_confidence_level(state.raw_state().precision().map(f64::from)).unwrap(), ConfidenceLevel::Medium);
}

#[test]
fn test_restore_partial_snapshot_defaults_missing_fields() {
    let mut state = new_state();
    restore_daily_state(&mut state, false, Some(r#"{"a": 1}"#)).unwrap();
    assert!(state.get_daily_max_result().is_none());
    assert_eq!(state.raw_state().hourly_max_temp_c(), None);
}

#[test]
fn test_restore_rejects_unparseable_json() {
    let mut state = new_state();
    let err = restore_daily_state(&mut state, false, Some("{bad json")).unwrap_err();
    assert!(matches!(err, DomainError::CorruptedSnapshot(_)));
}

#[test]
fn test_restore_rejects_invalid_fields() {
    let mut state = new_state();
    let err = restore_daily_state(&mut state, false, Some(r#"{"max_temp_c": 20.0, "precision": 0.5}"#))
        .unwrap_err();
    assert!(matches!(err, DomainError::CorruptedSnapshot(_)));

    let err = restore_daily_state(&mut state, false, Some(r#"{"max_temp_c": "warm"}"#)).unwrap_err();
    assert!(matches!(err, DomainError::CorruptedSnapshot(_)));
}

#[test]
fn test_reset_ignores_previous_snapshot() {
    let mut state = new_state();
    state.add_hourly_observation(30.0, None).unwrap();
    restore_daily_state(&mut state, true, Some("{bad json")).unwrap();
    assert!(state.get_daily_max_result().is_none());
}

#[test]
fn test_observe_and_extract() {
    let mut state = new_state();
    let now = Utc.with_ymd_and_hms(2024, 1, 2, 6, 0, 0).unwrap();
    restore_daily_state(&mut state, false, Some(r#"{"max_temp_c": 10, "precision": 0.1, "source": "hourly"}"#))
        .unwrap();

    add_observations_to_state(&mut state, 19.0, now, Some(12)).unwrap();
    let trading = extract_result_for_trading(&state, &now.to_rfc3339()).unwrap();

    assert_eq!(trading.max_temp_f, 66); // 66.2
    assert_eq!(trading.confidence, ConfidenceLevel::High);
    assert_eq!(trading.start_time, now.to_rfc3339());
    assert_eq!(state.raw_state().timestamp(), Some(now));
}

#[test]
fn test_extract_without_data_fails() {
    let state = new_state();
    let err = extract_result_for_trading(&state, "ts").unwrap_err();
    assert!(matches!(err, DomainError::NoData(_)));
}

#[test]
fn test_local_day_rollover() {
    let est = FixedOffset::west_opt(5 * 3600).unwrap();
    let evening = Utc.with_ymd_and_hms(2024, 1, 2, 3, 0, 0).unwrap(); // Jan 1 22:00 local
    let before_midnight = Utc.with_ymd_and_hms(2024, 1, 2, 4, 30, 0).unwrap(); // Jan 1 23:30
    let after_midnight = Utc.with_ymd_and_hms(2024, 1, 2, 5, 30, 0).unwrap(); // Jan 2 00:30

    assert!(!is_new_local_day(evening, before_midnight, est));
    assert!(is_new_local_day(evening, after_midnight, est));
    assert!(!is_new_local_day(after_midnight, evening, est));
}
