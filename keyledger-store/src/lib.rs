//! License record storage for Keyledger.
//!
//! This crate owns the single persisted entity — the license record — and
//! the integrity rules around it:
//! - `license_id` uniqueness is enforced by a SQLite UNIQUE constraint, so
//!   concurrent creators of the same identifier cannot both succeed
//! - `status` is a closed three-value set (`active`, `expired`, `cancelled`),
//!   typed as [`LicenseStatus`] and additionally guarded by a schema CHECK
//! - `id` and `creation_date` are store-assigned and immutable
//!
//! The store has no knowledge of HTTP or authorization; callers translate
//! [`StoreError`] values into their own response outcomes.

mod error;
mod record;
mod status;
mod store;

pub use error::{StoreError, StoreResult};
pub use record::LicenseRecord;
pub use status::LicenseStatus;
pub use store::LicenseStore;
