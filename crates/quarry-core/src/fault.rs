//! Structured faults reported by the service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A coded fault returned by the remote service.
///
/// The code and message are kept exactly as the server sent them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fault {
    /// Fault code.
    pub code: FaultCode,
    /// Server-provided message.
    pub message: String,
}

impl Fault {
    /// Create a new fault.
    pub fn new(code: impl Into<FaultCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for Fault {}

/// Fault codes the client knows how to classify.
///
/// Codes the client has never seen land in [`FaultCode::Unrecognized`]
/// with the raw string preserved, and are treated as ordinary protocol
/// faults.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FaultCode {
    InvalidLogin,
    InvalidClient,
    FunctionalityNotEnabled,
    OrgLocked,
    PasswordLockout,
    TrialExpired,
    UnsupportedClient,
    LoginDuringRestrictedTime,
    LoginDuringRestrictedDomain,
    ServerUnavailable,
    InvalidSessionId,
    InvalidQueryLocator,
    MalformedQuery,
    InvalidField,
    InvalidType,
    QueryTimeout,
    RequestLimitExceeded,
    Unrecognized(String),
}

impl FaultCode {
    /// Returns the wire form of the code.
    pub fn as_str(&self) -> &str {
        match self {
            FaultCode::InvalidLogin => "INVALID_LOGIN",
            FaultCode::InvalidClient => "INVALID_CLIENT",
            FaultCode::FunctionalityNotEnabled => "FUNCTIONALITY_NOT_ENABLED",
            FaultCode::OrgLocked => "ORG_LOCKED",
            FaultCode::PasswordLockout => "PASSWORD_LOCKOUT",
            FaultCode::TrialExpired => "TRIAL_EXPIRED",
            FaultCode::UnsupportedClient => "UNSUPPORTED_CLIENT",
            FaultCode::LoginDuringRestrictedTime => "LOGIN_DURING_RESTRICTED_TIME",
            FaultCode::LoginDuringRestrictedDomain => "LOGIN_DURING_RESTRICTED_DOMAIN",
            FaultCode::ServerUnavailable => "SERVER_UNAVAILABLE",
            FaultCode::InvalidSessionId => "INVALID_SESSION_ID",
            FaultCode::InvalidQueryLocator => "INVALID_QUERY_LOCATOR",
            FaultCode::MalformedQuery => "MALFORMED_QUERY",
            FaultCode::InvalidField => "INVALID_FIELD",
            FaultCode::InvalidType => "INVALID_TYPE",
            FaultCode::QueryTimeout => "QUERY_TIMEOUT",
            FaultCode::RequestLimitExceeded => "REQUEST_LIMIT_EXCEEDED",
            FaultCode::Unrecognized(raw) => raw,
        }
    }

    /// Whether a login fault with this code means the credentials or the
    /// account cannot be used as they are.
    pub fn is_credential_class(&self) -> bool {
        matches!(
            self,
            FaultCode::InvalidLogin
                | FaultCode::InvalidClient
                | FaultCode::FunctionalityNotEnabled
                | FaultCode::OrgLocked
                | FaultCode::PasswordLockout
                | FaultCode::TrialExpired
                | FaultCode::UnsupportedClient
                | FaultCode::LoginDuringRestrictedTime
                | FaultCode::LoginDuringRestrictedDomain
                | FaultCode::ServerUnavailable
        )
    }

    /// Whether the fault means the session token is no longer accepted.
    pub fn is_session_invalid(&self) -> bool {
        matches!(self, FaultCode::InvalidSessionId)
    }
}

impl From<&str> for FaultCode {
    fn from(s: &str) -> Self {
        match s {
            "INVALID_LOGIN" => FaultCode::InvalidLogin,
            "INVALID_CLIENT" => FaultCode::InvalidClient,
            "FUNCTIONALITY_NOT_ENABLED" => FaultCode::FunctionalityNotEnabled,
            "ORG_LOCKED" => FaultCode::OrgLocked,
            "PASSWORD_LOCKOUT" => FaultCode::PasswordLockout,
            "TRIAL_EXPIRED" => FaultCode::TrialExpired,
            "UNSUPPORTED_CLIENT" => FaultCode::UnsupportedClient,
            "LOGIN_DURING_RESTRICTED_TIME" => FaultCode::LoginDuringRestrictedTime,
            "LOGIN_DURING_RESTRICTED_DOMAIN" => FaultCode::LoginDuringRestrictedDomain,
            "SERVER_UNAVAILABLE" => FaultCode::ServerUnavailable,
            "INVALID_SESSION_ID" => FaultCode::InvalidSessionId,
            "INVALID_QUERY_LOCATOR" => FaultCode::InvalidQueryLocator,
            "MALFORMED_QUERY" => FaultCode::MalformedQuery,
            "INVALID_FIELD" => FaultCode::InvalidField,
            "INVALID_TYPE" => FaultCode::InvalidType,
            "QUERY_TIMEOUT" => FaultCode::QueryTimeout,
            "REQUEST_LIMIT_EXCEEDED" => FaultCode::RequestLimitExceeded,
            other => FaultCode::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for FaultCode {
    fn from(s: String) -> Self {
        FaultCode::from(s.as_str())
    }
}

impl FromStr for FaultCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FaultCode::from(s))
    }
}

impl fmt::Display for FaultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FaultCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FaultCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(FaultCode::from(s))
    }
}
