use crate::domain::error::DomainError;
use crate::domain::ports::snapshot_store::{SnapshotStore, StoredSnapshot};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;

pub struct SqliteSnapshotStore {
    conn: Mutex<Connection>,
}

impl SqliteSnapshotStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    fn save(
        &self,
        station: &str,
        snapshot_json: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO daily_max_snapshots (station, snapshot, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(station) DO UPDATE SET snapshot = excluded.snapshot, updated_at = excluded.updated_at",
            params![station, snapshot_json, updated_at.to_rfc3339()],
        )
        .map_err(|e| DomainError::Database(format!("Failed to save snapshot: {e}")))?;
        Ok(())
    }

    fn load(&self, station: &str) -> Result<Option<StoredSnapshot>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let row = conn
            .query_row(
                "SELECT station, snapshot, updated_at FROM daily_max_snapshots WHERE station = ?1",
                params![station],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()
            .map_err(|e| DomainError::Database(format!("Failed to load snapshot: {e}")))?;

        let Some((station, snapshot_json, updated_str)) = row else {
            return Ok(None);
        };
        let updated_at = DateTime::parse_from_rfc3339(&updated_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                DomainError::CorruptedSnapshot(format!(
                    "bad updated_at '{updated_str}' for {station}: {e}"
                ))
            })?;

        Ok(Some(StoredSnapshot {
            station,
            snapshot_json,
            updated_at,
        }))
    }

    fn delete(&self, station: &str) -> Result<bool, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = conn
            .execute(
                "DELETE FROM daily_max_snapshots WHERE station = ?1",
                params![station],
            )
            .map_err(|e| DomainError::Database(format!("Failed to delete snapshot: {e}")))?;
        Ok(rows > 0)
    }
}
