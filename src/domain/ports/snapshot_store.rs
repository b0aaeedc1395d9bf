use crate::domain::error::DomainError;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct StoredSnapshot {
    pub station: String,
    /// JSON text of a `DailyMaxSnapshot`.
    pub snapshot_json: String,
    pub updated_at: DateTime<Utc>,
}

/// Key-value persistence for daily-max snapshots, keyed by station.
pub trait SnapshotStore: Send + Sync {
    fn save(&self, station: &str, snapshot_json: &str, updated_at: DateTime<Utc>) -> Result<(), DomainError>;
    fn load(&self, station: &str) -> Result<Option<StoredSnapshot>, DomainError>;
    /// Returns whether a snapshot existed.
    fn delete(&self, station: &str) -> Result<bool, DomainError>;
}
