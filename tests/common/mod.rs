//! Shared test helpers.
#![allow(dead_code)]

use dailymax::application::daily_max::DailyMaxState;
use dailymax::domain::entities::metar_config::MetarConfig;
use dailymax::infrastructure::conversion::cli_temperature::CliTemperatureConverter;
use dailymax::DailyMaxService;
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::Arc;

pub fn metar_config() -> MetarConfig {
    let mut data_sources = BTreeMap::new();
    data_sources.insert("awc_metar".to_string(), serde_json::json!({"precision_c": 0.1}));
    data_sources.insert("synop_6h_max".to_string(), serde_json::json!({"precision_c": 1.0}));
    MetarConfig { data_sources }
}

pub fn new_state() -> DailyMaxState {
    DailyMaxState::new(metar_config(), Arc::new(CliTemperatureConverter))
}

pub fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

pub const VALID_CONFIG: &str = r#"{"data_sources": {"awc_metar": {"precision_c": 0.1}}}"#;

/// Service over an in-memory database. Keep the returned file alive for the test.
pub fn setup_service() -> (DailyMaxService, tempfile::NamedTempFile) {
    let config = write_config(VALID_CONFIG);
    let service = DailyMaxService::with_providers(
        ":memory:",
        config.path(),
        Arc::new(CliTemperatureConverter),
    )
    .unwrap();
    (service, config)
}
