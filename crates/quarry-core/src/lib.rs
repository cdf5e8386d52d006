//! quarry-core - Session management and result paging for a remote
//! object-query service.
//!
//! A [`SessionManager`] logs in against a well-known entry endpoint,
//! keeps the session token and the endpoint the service redirected to,
//! and attaches both to every later call. A [`QueryCursor`] reads a query
//! result that the service delivers in pages, one record at a time.
//!
//! The wire format is not handled here. Calls go through a [`Transport`]
//! implementation supplied by the caller.

pub mod auth;
pub mod config;
pub mod error;
pub mod fault;
pub mod query;
pub mod rpc;
pub mod traits;
pub mod types;

pub use auth::{Credentials, Session, SessionManager, SessionToken};
pub use config::ClientConfig;
pub use error::Error;
pub use fault::{Fault, FaultCode};
pub use query::{QueryCursor, QueryState, Record, RecordStream};
pub use traits::{CallContext, InvokeError, Transport};
pub use types::{Endpoint, PageSize};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
