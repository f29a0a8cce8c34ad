//! The three-valued license lifecycle field.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The current status of a license record.
///
/// Transitions are caller-driven and unrestricted among the three values
/// (including `cancelled` back to `active`); membership in the set is the
/// only gate. A stricter lifecycle would be a policy layered above this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseStatus {
    /// License is valid and usable.
    Active,
    /// License has lapsed.
    Expired,
    /// License was revoked by the operator.
    Cancelled,
}

impl LicenseStatus {
    /// Returns the lowercase wire/storage form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseStatus {
    type Err = StoreError;

    /// Parses the exact lowercase form. No trimming, no case folding:
    /// `"Active"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "expired" => Ok(Self::Expired),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(StoreError::InvalidStatus(other.to_string())),
        }
    }
}
