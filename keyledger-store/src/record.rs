//! The persisted license record.

use crate::status::LicenseStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One issued license as stored in the database.
///
/// `id` and `creation_date` are assigned by the store at insert time and
/// never change; `license_id` is caller-supplied and immutable after
/// creation; only `status` is ever updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRecord {
    /// Store-assigned row id, monotonically increasing, never reused.
    pub id: i64,
    /// The opaque caller-supplied license key, unique across all records.
    pub license_id: String,
    /// Optional free-form contact address.
    pub customer_email: Option<String>,
    /// Current lifecycle status.
    pub status: LicenseStatus,
    /// When the record was created (store clock, UTC).
    pub creation_date: DateTime<Utc>,
}
