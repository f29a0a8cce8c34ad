//! HTTP API for the Keyledger license-validation service.
//!
//! Two surfaces share one router:
//! - public: license status check and health probe, no credential
//! - admin: create, list, and status-update operations, guarded by a single
//!   shared bearer token evaluated by the [`AccessGate`]
//!
//! Control flow is strictly one-way: handler → gate (for admin routes) →
//! [`LicenseStore`]. The store knows nothing about authorization, and domain
//! failures are mapped into structured JSON error responses by [`ApiError`];
//! no request can terminate the process.

mod auth;
mod config;
mod error;
mod routes;

pub use auth::AccessGate;
pub use config::{ServerConfig, ADMIN_TOKEN_ENV, DEFAULT_ADMIN_TOKEN};
pub use error::ApiError;
pub use routes::{
    build_router, CheckResponse, CreateLicenseResponse, HealthResponse, UpdateStatusResponse,
};

use keyledger_store::LicenseStore;

/// Shared state behind every handler.
pub struct AppState {
    /// The license record store.
    pub store: LicenseStore,
    /// The credential gate for admin routes.
    pub gate: AccessGate,
}

impl AppState {
    /// Assembles application state from an opened store and configuration.
    #[must_use]
    pub fn new(store: LicenseStore, config: &ServerConfig) -> Self {
        Self {
            store,
            gate: AccessGate::new(config.admin_token.clone()),
        }
    }
}
