//! HTTP surface: route table, request/response bodies, handlers.
//!
//! Protected handlers evaluate the access gate before touching the request
//! body or the store, so an unauthorized caller always sees the same 401 —
//! never a hint of whether the target license exists.

use crate::error::ApiError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use keyledger_store::{LicenseRecord, LicenseStatus};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Builds the HTTP API router with the given shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/licenses/check", post(check_license))
        .route("/api/v1/licenses", get(list_licenses).post(create_license))
        .route(
            "/api/v1/licenses/{license_id}/status",
            put(update_license_status),
        )
        .with_state(state)
}

fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let authorization = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    if state.gate.authorize(authorization) {
        Ok(())
    } else {
        Err(ApiError::Unauthorized)
    }
}

// ── Public endpoints ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Deserialize)]
pub struct CheckRequest {
    pub license_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct CheckResponse {
    pub status: LicenseStatus,
}

async fn check_license(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, ApiError> {
    let license_id = req.license_id.ok_or(ApiError::MissingField("license_id"))?;
    match state.store.status(&license_id)? {
        Some(status) => Ok(Json(CheckResponse { status })),
        None => Err(ApiError::NotFound),
    }
}

// ── Admin endpoints ──────────────────────────────────────────────

async fn list_licenses(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<LicenseRecord>>, ApiError> {
    require_admin(&state, &headers)?;
    Ok(Json(state.store.list()?))
}

#[derive(Deserialize)]
pub struct CreateLicenseRequest {
    pub license_id: Option<String>,
    pub customer_email: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct CreateLicenseResponse {
    pub message: String,
    pub license: LicenseRecord,
}

async fn create_license(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<CreateLicenseRequest>,
) -> Result<(StatusCode, Json<CreateLicenseResponse>), ApiError> {
    require_admin(&state, &headers)?;
    let license_id = req.license_id.ok_or(ApiError::MissingField("license_id"))?;
    let license = state
        .store
        .create(&license_id, req.customer_email.as_deref())?;
    info!(license_id = %license.license_id, "license created");
    Ok((
        StatusCode::CREATED,
        Json(CreateLicenseResponse {
            message: "License added successfully.".to_string(),
            license,
        }),
    ))
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateStatusResponse {
    pub message: String,
    pub status: LicenseStatus,
}

async fn update_license_status(
    State(state): State<Arc<AppState>>,
    Path(license_id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<UpdateStatusResponse>, ApiError> {
    require_admin(&state, &headers)?;
    let status_str = req.status.ok_or(ApiError::MissingField("status"))?;
    // Parse rejects unknown values before any storage round-trip.
    let status: LicenseStatus = status_str.parse()?;
    state.store.update_status(&license_id, status)?;
    info!(license_id = %license_id, status = %status, "license status updated");
    Ok(Json(UpdateStatusResponse {
        message: format!("License status updated to {status}."),
        status,
    }))
}
