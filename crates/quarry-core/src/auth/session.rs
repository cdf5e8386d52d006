//! The authenticated session value.

use chrono::{DateTime, Utc};

use super::token::SessionToken;
use crate::types::Endpoint;

/// The outcome of a successful login.
///
/// Holds the token to attach to every later call and the endpoint those
/// calls must go to. The endpoint is the one the login response
/// redirected to, never the entry endpoint.
#[derive(Clone)]
pub struct Session {
    token: SessionToken,
    endpoint: Endpoint,
    issued_at: DateTime<Utc>,
    user_id: Option<String>,
}

impl Session {
    /// Create a session from its parts.
    pub fn new(
        token: SessionToken,
        endpoint: Endpoint,
        issued_at: DateTime<Utc>,
        user_id: Option<String>,
    ) -> Self {
        Self {
            token,
            endpoint,
            issued_at,
            user_id,
        }
    }

    /// Returns the session token.
    pub fn token(&self) -> &SessionToken {
        &self.token
    }

    /// Returns the endpoint authenticated calls go to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns when the session was established.
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Returns the user id reported at login, if any.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("endpoint", &self.endpoint)
            .field("issued_at", &self.issued_at)
            .field("user_id", &self.user_id)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
