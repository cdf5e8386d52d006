//! RPC transport trait.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::auth::SessionToken;
use crate::error::{Error, TransportError};
use crate::fault::Fault;
use crate::types::Endpoint;

/// Per-call routing and authentication data handed to a [`Transport`].
#[derive(Debug, Clone)]
pub struct CallContext {
    /// Where the call goes.
    pub endpoint: Endpoint,
    /// Session token to attach, absent only for login.
    pub session_token: Option<SessionToken>,
    /// Upper bound on the call.
    pub timeout: Duration,
}

/// Why a single RPC did not produce a response payload.
#[derive(Debug, Clone, Error)]
pub enum InvokeError {
    /// The service answered with a structured fault.
    #[error(transparent)]
    Fault(#[from] Fault),

    /// The call did not complete.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl From<InvokeError> for Error {
    fn from(err: InvokeError) -> Self {
        match err {
            InvokeError::Fault(fault) => Error::Fault(fault),
            InvokeError::Transport(err) => Error::Transport(err),
        }
    }
}

/// Performs one request/response exchange with the service.
///
/// Implementations own the wire framing. They must not retry, and must
/// not keep any session state of their own: everything needed to route
/// and authenticate the call is in the [`CallContext`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Invoke `method` with `request` as its payload.
    async fn invoke(
        &self,
        method: &str,
        request: &Value,
        context: &CallContext,
    ) -> Result<Value, InvokeError>;
}

#[async_trait]
impl<T> Transport for std::sync::Arc<T>
where
    T: Transport + ?Sized,
{
    async fn invoke(
        &self,
        method: &str,
        request: &Value,
        context: &CallContext,
    ) -> Result<Value, InvokeError> {
        (**self).invoke(method, request, context).await
    }
}
