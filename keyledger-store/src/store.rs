//! SQLite-backed persistence for license records.
//!
//! Uniqueness of `license_id` and the closed status set are enforced by the
//! schema itself (UNIQUE and CHECK constraints), so duplicate detection is
//! race-safe: there is never a read-then-write window between concurrent
//! creators of the same identifier.

use crate::error::{StoreError, StoreResult};
use crate::record::LicenseRecord;
use crate::status::LicenseStatus;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Persistent store for license records backed by SQLite.
#[derive(Clone)]
pub struct LicenseStore {
    conn: Arc<Mutex<Connection>>,
}

impl LicenseStore {
    /// Opens (or creates) a license store at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| StoreError::Storage(format!("failed to open license store: {e}")))?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Opens an in-memory license store (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| {
            StoreError::Storage(format!("failed to open in-memory license store: {e}"))
        })?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Idempotent schema creation. Safe to call on every open.
    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS licenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                license_id TEXT NOT NULL UNIQUE,
                customer_email TEXT,
                status TEXT NOT NULL DEFAULT 'active'
                    CHECK(status IN ('active', 'expired', 'cancelled')),
                creation_date TEXT NOT NULL
            );
            ",
        )
        .map_err(|e| StoreError::Storage(format!("failed to init license schema: {e}")))?;
        tracing::debug!("license schema ready");
        Ok(())
    }

    /// Looks up the status of a license by exact, case-sensitive match on
    /// `license_id`. Returns `None` when no record exists.
    pub fn status(&self, license_id: &str) -> StoreResult<Option<LicenseStatus>> {
        let conn = self.conn.lock().unwrap();
        let status_str: Option<String> = conn
            .query_row(
                "SELECT status FROM licenses WHERE license_id = ?1",
                params![license_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StoreError::Storage(format!("failed to query license status: {e}")))?;

        match status_str {
            Some(s) => Ok(Some(s.parse()?)),
            None => Ok(None),
        }
    }

    /// Inserts a new license record with status `active` and a store-assigned
    /// id and creation date.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] when `license_id` already exists,
    /// detected via the UNIQUE constraint rather than a prior SELECT.
    pub fn create(
        &self,
        license_id: &str,
        customer_email: Option<&str>,
    ) -> StoreResult<LicenseRecord> {
        let conn = self.conn.lock().unwrap();
        let created = Utc::now();
        conn.execute(
            "INSERT INTO licenses (license_id, customer_email, status, creation_date)
             VALUES (?1, ?2, 'active', ?3)",
            params![license_id, customer_email, created.to_rfc3339()],
        )
        .map_err(|e| {
            if constraint_violation(&e) {
                StoreError::Duplicate(license_id.to_string())
            } else {
                StoreError::Storage(format!("failed to insert license: {e}"))
            }
        })?;

        Ok(LicenseRecord {
            id: conn.last_insert_rowid(),
            license_id: license_id.to_string(),
            customer_email: customer_email.map(str::to_string),
            status: LicenseStatus::Active,
            creation_date: created,
        })
    }

    /// Updates the status of an existing license. The single-statement UPDATE
    /// is the atomicity unit; zero affected rows means the id does not exist
    /// (`license_id` is unique, so the count is always 0 or 1).
    pub fn update_status(&self, license_id: &str, status: LicenseStatus) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        let affected = conn
            .execute(
                "UPDATE licenses SET status = ?1 WHERE license_id = ?2",
                params![status.as_str(), license_id],
            )
            .map_err(|e| StoreError::Storage(format!("failed to update license status: {e}")))?;

        if affected == 0 {
            return Err(StoreError::NotFound(license_id.to_string()));
        }
        Ok(())
    }

    /// Returns every license record with all fields, in store-default order.
    /// Callers must not depend on the ordering.
    pub fn list(&self) -> StoreResult<Vec<LicenseRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(
                "SELECT id, license_id, customer_email, status, creation_date FROM licenses",
            )
            .map_err(|e| StoreError::Storage(format!("failed to prepare license query: {e}")))?;

        let rows = stmt
            .query_map([], read_raw_record)
            .map_err(|e| StoreError::Storage(format!("failed to query licenses: {e}")))?;

        let mut records = Vec::new();
        for row in rows {
            let raw =
                row.map_err(|e| StoreError::Storage(format!("failed to read license row: {e}")))?;
            records.push(raw.try_into()?);
        }
        Ok(records)
    }
}

/// Column values as stored, before status/timestamp decoding.
struct RawRecord {
    id: i64,
    license_id: String,
    customer_email: Option<String>,
    status: String,
    creation_date: String,
}

fn read_raw_record(row: &Row<'_>) -> rusqlite::Result<RawRecord> {
    Ok(RawRecord {
        id: row.get(0)?,
        license_id: row.get(1)?,
        customer_email: row.get(2)?,
        status: row.get(3)?,
        creation_date: row.get(4)?,
    })
}

impl TryFrom<RawRecord> for LicenseRecord {
    type Error = StoreError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let status: LicenseStatus = raw.status.parse()?;
        let creation_date = DateTime::parse_from_rfc3339(&raw.creation_date)
            .map_err(|e| {
                StoreError::Storage(format!(
                    "invalid creation_date for license {}: {e}",
                    raw.license_id
                ))
            })?
            .with_timezone(&Utc);
        Ok(Self {
            id: raw.id,
            license_id: raw.license_id,
            customer_email: raw.customer_email,
            status,
            creation_date,
        })
    }
}

/// True when the error is a SQLite constraint violation (UNIQUE or CHECK).
fn constraint_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _) if err.code == ErrorCode::ConstraintViolation
    )
}
