//! Error types for quarry.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, server fault, and input validation errors.
//! The split matters to callers: only transport errors are worth retrying
//! automatically, everything else needs a caller decision.

use thiserror::Error;

use crate::fault::Fault;

/// The unified error type for quarry operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, unexpected HTTP status).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication and session-state errors.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A structured fault returned by the service.
    #[error("server fault: {0}")]
    Fault(#[from] Fault),

    /// Input validation errors, raised before anything reaches the network.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The service answered, but the payload did not have the expected shape.
    #[error("unexpected response to {method}: {reason}")]
    UnexpectedResponse { method: String, reason: String },
}

impl Error {
    /// Whether a caller may reasonably retry the failed operation unchanged.
    ///
    /// Only transport-class failures qualify. quarry itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Whether the session was invalidated by this failure.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Error::Auth(AuthError::SessionExpired(_)))
    }

    /// The server fault behind this error, if there is one.
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Error::Fault(fault)
            | Error::Auth(AuthError::CredentialRejected(fault))
            | Error::Auth(AuthError::SessionExpired(fault)) => Some(fault),
            _ => None,
        }
    }

    pub(crate) fn unexpected(method: &str, reason: impl Into<String>) -> Self {
        Error::UnexpectedResponse {
            method: method.to_string(),
            reason: reason.into(),
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The server answered with an error status and no fault body.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The service refused the login because of the credentials or the
    /// state of the account. Retrying with the same credentials is pointless.
    #[error("authentication rejected, check credentials ({0})")]
    CredentialRejected(Fault),

    /// Login went through, but the password must be changed first.
    #[error("password expired, change it before logging in again")]
    PasswordExpired,

    /// An authenticated operation was attempted without a session.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The service no longer accepts the session token. The session has
    /// been cleared and the caller must authenticate again.
    #[error("session expired, authenticate again ({0})")]
    SessionExpired(Fault),
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Identity or secret missing.
    #[error("invalid credentials: {reason}")]
    Credentials { reason: String },

    /// Query text missing or blank.
    #[error("invalid query: {reason}")]
    Query { reason: String },

    /// Invalid endpoint URL.
    #[error("invalid endpoint '{value}': {reason}")]
    Endpoint { value: String, reason: String },

    /// Invalid record value.
    #[error("invalid record: {reason}")]
    Record { reason: String },

    /// Request payload could not be encoded.
    #[error("invalid request payload: {message}")]
    Payload { message: String },
}
