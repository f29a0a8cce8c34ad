//! API error taxonomy and HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use keyledger_store::StoreError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Failures a handler can return.
///
/// Domain failures carry caller-correctable detail; `Unauthorized` is a fixed
/// message so a wrong credential and an absent credential are
/// indistinguishable; `Internal` hides the storage detail (it goes to the log
/// instead) so operators can tell "license doesn't exist" apart from "the
/// service is broken" without leaking internals to callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Credential missing, malformed, or wrong.
    #[error("unauthorized")]
    Unauthorized,

    /// A required request field was absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The supplied status is not one of `active`, `expired`, `cancelled`.
    #[error("invalid status: {0}")]
    InvalidStatus(String),

    /// No license matches the requested `license_id`.
    #[error("license ID not found")]
    NotFound,

    /// A license with this `license_id` already exists.
    #[error("license ID already exists: {0}")]
    Duplicate(String),

    /// Infrastructure failure; detail is logged, not returned.
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MissingField(_) | Self::InvalidStatus(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Duplicate(_) => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (self.status_code(), body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(id) => Self::Duplicate(id),
            StoreError::NotFound(_) => Self::NotFound,
            StoreError::InvalidStatus(s) => Self::InvalidStatus(s),
            StoreError::Storage(detail) => {
                error!("store failure: {detail}");
                Self::Internal
            }
        }
    }
}
