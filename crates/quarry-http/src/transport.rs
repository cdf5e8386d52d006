//! HTTP/JSON transport implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, trace};

use quarry_core::error::TransportError;
use quarry_core::{CallContext, Fault, InvokeError, Transport};

/// Fault body returned with an error status.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FaultBody {
    error_code: String,
    #[serde(default)]
    message: String,
}

/// A [`Transport`] that posts each call as JSON over HTTP.
///
/// Method `m` on endpoint `E` is `POST E/m` with the request payload as
/// the body. A session token, when present, goes in the `Authorization`
/// header as a bearer token.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with its own HTTP client.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quarry/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Http {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    /// Create a transport on top of an existing HTTP client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Handle a response, returning the body or the fault it carries.
    async fn handle_response(
        &self,
        response: reqwest::Response,
        timeout: Duration,
    ) -> Result<Value, InvokeError> {
        let status = response.status();
        trace!(status = %status, "RPC response");

        if status.is_success() {
            let body = response
                .json::<Value>()
                .await
                .map_err(|e| transport_error(e, timeout))?;
            return Ok(body);
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        match serde_json::from_str::<FaultBody>(&body) {
            Ok(fault) => {
                debug!(code = %fault.error_code, "RPC fault");
                Err(Fault::new(fault.error_code, fault.message).into())
            }
            Err(_) => Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }
            .into()),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request, context), fields(endpoint = %context.endpoint))]
    async fn invoke(
        &self,
        method: &str,
        request: &Value,
        context: &CallContext,
    ) -> Result<Value, InvokeError> {
        let url = context.endpoint.method_url(method);
        debug!(%url, "RPC call");

        let mut builder = self
            .client
            .post(&url)
            .json(request)
            .timeout(context.timeout);

        if let Some(token) = &context.session_token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token.as_str()));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(e, context.timeout))?;

        self.handle_response(response, context.timeout).await
    }
}

fn transport_error(err: reqwest::Error, timeout: Duration) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            duration_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    }
}
