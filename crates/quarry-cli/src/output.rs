//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use quarry_core::Error;
use quarry_core::error::AuthError;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// What the user can do about a failure, if anything specific.
pub fn hint(err: &Error) -> Option<&'static str> {
    match err {
        Error::Auth(AuthError::CredentialRejected(_)) => {
            Some("check your username and password, and that the account is active")
        }
        Error::Auth(AuthError::PasswordExpired) => {
            Some("the password has expired; change it before logging in again")
        }
        Error::Auth(AuthError::SessionExpired(_)) => {
            Some("the session is no longer valid; run the command again to log in")
        }
        Error::Transport(_) => Some("the service could not be reached; the command can be retried"),
        Error::InvalidInput(_) => Some("check the command arguments"),
        _ => None,
    }
}

/// Wrap a core error for reporting, attaching what was being attempted
/// and a hint when there is one.
pub fn failure(err: Error, action: &str) -> anyhow::Error {
    let message = match hint(&err) {
        Some(hint) => format!("{} ({})", action, hint),
        None => action.to_string(),
    };
    anyhow::Error::new(err).context(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_core::Fault;
    use quarry_core::error::TransportError;

    #[test]
    fn credential_rejection_points_at_credentials() {
        let err = Error::Auth(AuthError::CredentialRejected(Fault::new(
            "INVALID_LOGIN",
            "Invalid username, password, security token; or user locked out.",
        )));
        assert!(hint(&err).unwrap().contains("username and password"));
    }

    #[test]
    fn plain_fault_has_no_hint() {
        let err = Error::Fault(Fault::new("MALFORMED_QUERY", "unexpected token"));
        assert!(hint(&err).is_none());

        let wrapped = failure(err, "Failed to run query");
        assert_eq!(wrapped.to_string(), "Failed to run query");
    }

    #[test]
    fn failure_keeps_the_cause() {
        let err = Error::Transport(TransportError::Timeout { duration_ms: 1000 });
        let wrapped = failure(err, "Failed to login");

        assert!(wrapped.to_string().starts_with("Failed to login (the service"));
        let chain: Vec<_> = wrapped.chain().map(|e| e.to_string()).collect();
        assert!(chain[1].contains("timed out after 1000ms"));
    }
}
