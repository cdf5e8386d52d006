//! Login credentials type.

use std::fmt;

use crate::error::{Error, InvalidInputError};

/// Login credentials for the service.
///
/// Holds the identity (username) and secret (password, optionally with a
/// security token appended) for exactly one login attempt.
///
/// # Security
///
/// The secret is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use quarry_core::Credentials;
///
/// let creds = Credentials::new("alice@example.com", "hunter2");
/// assert_eq!(creds.identity(), "alice@example.com");
/// ```
pub struct Credentials {
    identity: String,
    secret: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(identity: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            secret: secret.into(),
        }
    }

    /// Returns the identity.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Returns the secret.
    ///
    /// # Security
    ///
    /// Use this only when constructing the login request.
    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }

    /// Check that neither part is empty.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.identity.trim().is_empty() {
            return Err(InvalidInputError::Credentials {
                reason: "identity must not be empty".to_string(),
            }
            .into());
        }

        if self.secret.is_empty() {
            return Err(InvalidInputError::Credentials {
                reason: "secret must not be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identity", &self.identity)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
