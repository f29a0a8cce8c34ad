//! Error types for the license store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in license store operations.
///
/// The first three variants are domain outcomes a caller can act on; the
/// `Storage` variant is an infrastructure failure (unreachable or
/// misconfigured database) and is never mapped onto a domain outcome.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with this `license_id` already exists.
    #[error("license ID already exists: {0}")]
    Duplicate(String),

    /// No record matches this `license_id`.
    #[error("license ID not found: {0}")]
    NotFound(String),

    /// The supplied status is not one of `active`, `expired`, `cancelled`.
    #[error("invalid status: {0}")]
    InvalidStatus(String),

    /// Underlying database failure.
    #[error("storage error: {0}")]
    Storage(String),
}

impl StoreError {
    /// Returns true if this is a domain outcome rather than an
    /// infrastructure failure.
    #[must_use]
    pub fn is_domain(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}
