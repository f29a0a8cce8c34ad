//! Process-wide configuration, loaded once at startup.

use tracing::warn;

/// Environment variable holding the admin token.
pub const ADMIN_TOKEN_ENV: &str = "KEYLEDGER_ADMIN_TOKEN";

/// Fallback admin token used when the environment variable is unset.
/// Deploying with this value leaves the admin surface open to anyone who
/// reads the source.
pub const DEFAULT_ADMIN_TOKEN: &str = "changeme";

/// Configuration for the license service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Shared secret accepted by the access gate.
    pub admin_token: String,
}

impl ServerConfig {
    /// Loads configuration from the environment.
    ///
    /// An unset (or empty) `KEYLEDGER_ADMIN_TOKEN` does not prevent startup:
    /// the service stays reachable with [`DEFAULT_ADMIN_TOKEN`] and a warning
    /// is logged. Preserved reference behavior; a deployment hazard.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(ADMIN_TOKEN_ENV) {
            Ok(token) if !token.is_empty() => Self { admin_token: token },
            _ => {
                warn!(
                    "{ADMIN_TOKEN_ENV} is not set; admin endpoints accept the \
                     default token. Set it before exposing this service."
                );
                Self {
                    admin_token: DEFAULT_ADMIN_TOKEN.to_string(),
                }
            }
        }
    }
}
