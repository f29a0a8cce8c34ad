//! The access gate guarding protected operations.

/// Decides whether a caller may invoke a protected operation.
///
/// A single shared admin token is configured once at startup and compared
/// against the bearer credential of each request. Every malformed
/// presentation — missing header, missing `Bearer ` scheme marker, wrong
/// token — is the same deny; callers can never tell which case they hit.
///
/// Comparison is plain string equality with no constant-time guarantee, and
/// there is no lockout or rate limiting. Both are inherited reference
/// behavior, documented rather than silently changed.
#[derive(Debug, Clone)]
pub struct AccessGate {
    token: String,
}

impl AccessGate {
    /// Creates a gate that accepts exactly the given token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Evaluates an `Authorization` header value. Grants access only for
    /// `Bearer <token>` with an exact token match.
    #[must_use]
    pub fn authorize(&self, authorization: Option<&str>) -> bool {
        match authorization.and_then(|h| h.strip_prefix("Bearer ")) {
            Some(presented) => presented == self.token,
            None => false,
        }
    }
}
