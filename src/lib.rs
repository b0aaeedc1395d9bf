pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::daily_max::DailyMaxState;
use crate::application::max_temp_processor::{
    add_observations_to_state, extract_result_for_trading, is_new_local_day, restore_daily_state,
    StationStatus,
};
use crate::domain::entities::metar_config::MetarConfig;
use crate::domain::error::{DomainError, MetarConfigLoadError};
use crate::domain::ports::snapshot_store::{SnapshotStore, StoredSnapshot};
use crate::domain::ports::temperature_converter::TemperatureConverter;
use crate::infrastructure::config::metar::{load_metar_config, metar_config_path};
use crate::infrastructure::conversion::cli_temperature::CliTemperatureConverter;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::snapshot_store::SqliteSnapshotStore;
use chrono::{DateTime, FixedOffset, Utc};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

/// Build a [`DailyMaxState`] from the METAR config at `config_path`.
pub fn create_daily_max_state(
    config_path: &Path,
    converter: Arc<dyn TemperatureConverter>,
) -> Result<DailyMaxState, MetarConfigLoadError> {
    DailyMaxState::load(|| load_metar_config(config_path), converter)
}

/// One observation cycle for a station.
#[derive(Debug, Clone)]
pub struct Observation {
    pub temp_c: f64,
    pub six_hour_max_c: Option<i32>,
    pub observed_at: DateTime<Utc>,
}

pub struct DailyMaxService {
    store: Arc<dyn SnapshotStore>,
    metar_config: MetarConfig,
    converter: Arc<dyn TemperatureConverter>,
}

impl DailyMaxService {
    pub fn new(db_path: &str) -> Result<Self, DomainError> {
        Self::with_providers(
            db_path,
            &metar_config_path(),
            Arc::new(CliTemperatureConverter),
        )
    }

    pub fn with_providers(
        db_path: &str,
        config_path: &Path,
        converter: Arc<dyn TemperatureConverter>,
    ) -> Result<Self, DomainError> {
        // Config first: a bad METAR config must stop startup before anything else.
        let metar_config = load_metar_config(config_path).map_err(|e| {
            tracing::error!(error = ?e, "failed to load METAR config");
            e
        })?;

        let conn = Connection::open(db_path).map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
        run_migrations(&conn)?;

        Ok(Self {
            store: Arc::new(SqliteSnapshotStore::new(conn)),
            metar_config,
            converter,
        })
    }

    fn fresh_state(&self) -> DailyMaxState {
        DailyMaxState::new(self.metar_config.clone(), self.converter.clone())
    }

    /// Restore the station's day (resetting on local-day rollover), apply the
    /// observation and persist the result.
    ///
    /// An observation from a local day earlier than the stored one is rejected.
    /// The stored `updated_at` never moves backwards, so a late reading from
    /// earlier in the same day cannot trigger a rollover later on.
    pub fn observe(
        &self,
        station: &str,
        observation: &Observation,
        utc_offset: FixedOffset,
    ) -> Result<StationStatus, DomainError> {
        let previous = self.store.load(station)?;
        if let Some(p) = &previous {
            if is_new_local_day(observation.observed_at, p.updated_at, utc_offset) {
                tracing::warn!(
                    station,
                    observed_at = %observation.observed_at,
                    stored_at = %p.updated_at,
                    "rejecting observation from an earlier local day"
                );
                return Err(DomainError::InvalidInput(format!(
                    "observation at {} is from a local day before the stored day of {station} ({})",
                    observation.observed_at, p.updated_at
                )));
            }
        }
        let should_reset = previous
            .as_ref()
            .map(|p| is_new_local_day(p.updated_at, observation.observed_at, utc_offset))
            .unwrap_or(false);
        let updated_at = match &previous {
            Some(p) if !should_reset => p.updated_at.max(observation.observed_at),
            _ => observation.observed_at,
        };

        let mut state = self.fresh_state();
        restore_daily_state(
            &mut state,
            should_reset,
            previous.as_ref().map(|p| p.snapshot_json.as_str()),
        )?;
        add_observations_to_state(
            &mut state,
            observation.temp_c,
            observation.observed_at,
            observation.six_hour_max_c,
        )?;

        let snapshot_json = serde_json::to_string(&state.get_state_dict())
            .map_err(|e| DomainError::InvalidSnapshot(e.to_string()))?;
        self.store.save(station, &snapshot_json, updated_at)?;

        let trading = extract_result_for_trading(&state, &observation.observed_at.to_rfc3339())?;
        tracing::info!(
            station,
            max_temp_f = trading.max_temp_f,
            confidence = %trading.confidence,
            "observation applied"
        );
        Ok(self.status_of(station, &state, Some(updated_at)))
    }

    /// Station status as of `as_of`. A snapshot from an earlier local day reads as empty.
    pub fn status(
        &self,
        station: &str,
        as_of: DateTime<Utc>,
        utc_offset: FixedOffset,
    ) -> Result<Option<StationStatus>, DomainError> {
        let Some(stored) = self.store.load(station)? else {
            return Ok(None);
        };
        let state = self.current_day_state(&stored, as_of, utc_offset)?;
        Ok(Some(self.status_of(station, &state, Some(stored.updated_at))))
    }

    /// Rule-adjusted maximum for the local day containing `as_of`. `NoData` when
    /// nothing has been observed that day.
    pub fn adjusted(
        &self,
        station: &str,
        rule_type: &str,
        as_of: DateTime<Utc>,
        utc_offset: FixedOffset,
    ) -> Result<i64, DomainError> {
        let stored = self
            .store
            .load(station)?
            .ok_or_else(|| DomainError::NoData(format!("no snapshot stored for {station}")))?;
        let state = self.current_day_state(&stored, as_of, utc_offset)?;
        state.get_adjusted_temp_for_rule(rule_type)
    }

    fn current_day_state(
        &self,
        stored: &StoredSnapshot,
        as_of: DateTime<Utc>,
        utc_offset: FixedOffset,
    ) -> Result<DailyMaxState, DomainError> {
        let rolled_over = is_new_local_day(stored.updated_at, as_of, utc_offset);
        let mut state = self.fresh_state();
        restore_daily_state(&mut state, rolled_over, Some(stored.snapshot_json.as_str()))?;
        Ok(state)
    }

    /// Forget the station's day. Returns whether anything was stored.
    pub fn reset(&self, station: &str) -> Result<bool, DomainError> {
        self.store.delete(station)
    }

    fn status_of(
        &self,
        station: &str,
        state: &DailyMaxState,
        updated_at: Option<DateTime<Utc>>,
    ) -> StationStatus {
        let start_time = state
            .raw_state()
            .timestamp()
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();
        StationStatus {
            station: station.to_string(),
            updated_at,
            result: state.get_daily_max_result(),
            hourly_only_max_f: state.get_hourly_only_max_f(),
            trading: extract_result_for_trading(state, &start_time).ok(),
            snapshot: state.get_state_dict(),
        }
    }
}
