//! Session management for authenticated calls.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, trace, warn};

use crate::Result;
use crate::config::ClientConfig;
use crate::error::{AuthError, Error, InvalidInputError, TransportError};
use crate::query::QueryCursor;
use crate::rpc::{LOGIN, LoginRequest, LoginResponse};
use crate::traits::{CallContext, InvokeError, Transport};
use crate::types::Endpoint;

use super::credentials::Credentials;
use super::session::Session;
use super::token::SessionToken;

/// Owns the login handshake and the resulting session.
///
/// Every call made through a `SessionManager` carries the session token
/// and goes to the endpoint the login response redirected to. Without a
/// session, calls fail with [`AuthError::NotAuthenticated`] before they
/// reach the transport.
///
/// # State
///
/// ```text
/// Unauthenticated --authenticate--> Authenticated
/// Authenticated --session-invalid fault | logout--> Unauthenticated
/// ```
///
/// Nothing is retried behind the caller's back: a rejected session is
/// cleared and reported, and logging in again is the caller's decision.
///
/// # Thread Safety
///
/// Managers are cheap to clone (they use internal `Arc`) and clones share
/// one session. Calls work on a snapshot of the session, so a call that is
/// in flight while the session changes fails or succeeds on its own terms
/// without racing on the endpoint.
///
/// # Example
///
/// ```no_run
/// use quarry_core::{ClientConfig, Credentials, Endpoint, SessionManager, Transport};
///
/// # async fn example<T: Transport + 'static>(transport: T) -> quarry_core::Result<()> {
/// let config = ClientConfig::new(Endpoint::new("https://login.example.com/services/rpc")?);
/// let manager = SessionManager::new(transport, config);
/// manager.authenticate(Credentials::new("alice@example.com", "hunter2")).await?;
///
/// let mut cursor = manager.query("select FirstName, LastName from Contact").await?;
/// while let Some(record) = cursor.next().await? {
///     println!("{:?}", record.get("LastName"));
/// }
/// # Ok(())
/// # }
/// ```
pub struct SessionManager<T> {
    inner: Arc<ManagerInner<T>>,
}

struct ManagerInner<T> {
    transport: T,
    config: ClientConfig,
    session: RwLock<Option<Session>>,
}

impl<T> Clone for SessionManager<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport> SessionManager<T> {
    /// Create an unauthenticated manager.
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self {
            inner: Arc::new(ManagerInner {
                transport,
                config,
                session: RwLock::new(None),
            }),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Returns a snapshot of the current session, if any.
    pub async fn session(&self) -> Option<Session> {
        self.inner.session.read().await.clone()
    }

    /// Whether a session is currently held.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.session.read().await.is_some()
    }

    /// Log in against the entry endpoint and store the resulting session.
    ///
    /// # Errors
    ///
    /// - [`InvalidInputError::Credentials`] if identity or secret is empty;
    ///   nothing is sent.
    /// - [`AuthError::CredentialRejected`] for faults caused by the
    ///   credentials or the account state.
    /// - [`AuthError::PasswordExpired`] if the service accepted the login
    ///   but flagged the password as expired. No session is stored.
    /// - [`Error::Fault`] for any other fault, with code and message intact.
    /// - [`Error::Transport`] if the call did not complete.
    ///
    /// On failure any previously held session is left as it was.
    #[instrument(skip(self, credentials), fields(entry = %self.inner.config.entry_endpoint))]
    pub async fn authenticate(&self, credentials: Credentials) -> Result<Session> {
        credentials.validate()?;

        info!("Logging in");

        let request = LoginRequest {
            username: credentials.identity(),
            password: credentials.secret(),
        };
        let payload = encode(&request)?;
        drop(credentials);

        let context = CallContext {
            endpoint: self.inner.config.entry_endpoint.clone(),
            session_token: None,
            timeout: self.inner.config.timeout(),
        };

        let response = self
            .invoke(LOGIN, &payload, &context)
            .await
            .map_err(classify_login_failure)?;

        let response: LoginResponse = decode(LOGIN, response)?;

        if response.password_expired {
            warn!("Login succeeded but the password has expired");
            return Err(AuthError::PasswordExpired.into());
        }

        let endpoint = Endpoint::new(&response.server_url).map_err(|e| {
            Error::unexpected(LOGIN, format!("server URL is not usable: {}", e))
        })?;

        let session = Session::new(
            SessionToken::new(response.session_id),
            endpoint,
            Utc::now(),
            response.user_id,
        );

        *self.inner.session.write().await = Some(session.clone());

        info!(endpoint = %session.endpoint(), "Session established");
        Ok(session)
    }

    /// Make an authenticated call.
    ///
    /// The body is encoded as the request payload and the response payload
    /// is decoded into `R` (use [`serde_json::Value`] to take it as is).
    ///
    /// # Errors
    ///
    /// - [`AuthError::NotAuthenticated`] if no session is held; the
    ///   transport is not touched.
    /// - [`AuthError::SessionExpired`] if the service rejected the session
    ///   token. The session is cleared first.
    /// - [`Error::Fault`] for any other fault.
    /// - [`Error::Transport`] if the call did not complete.
    /// - [`Error::UnexpectedResponse`] if the payload does not decode as `R`.
    #[instrument(skip(self, body))]
    pub async fn call<B, R>(&self, method: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let payload = encode(body)?;

        let session = self
            .inner
            .session
            .read()
            .await
            .clone()
            .ok_or(AuthError::NotAuthenticated)?;

        debug!(endpoint = %session.endpoint(), "Authenticated call");
        trace!(?payload, "call payload");

        let context = CallContext {
            endpoint: session.endpoint().clone(),
            session_token: Some(session.token().clone()),
            timeout: self.inner.config.timeout(),
        };

        match self.invoke(method, &payload, &context).await {
            Ok(response) => decode(method, response),
            Err(InvokeError::Fault(fault)) if fault.code.is_session_invalid() => {
                self.invalidate(session.token()).await;
                Err(AuthError::SessionExpired(fault).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Drop the current session. Returns whether one was held.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> bool {
        let previous = self.inner.session.write().await.take();
        if previous.is_some() {
            info!("Logged out");
        }
        previous.is_some()
    }

    /// Start a query using the configured page size.
    ///
    /// See [`QueryCursor::open`].
    pub async fn query(&self, query_text: &str) -> Result<QueryCursor<T>> {
        let page_size = self.inner.config.page_size.map(|size| size.get());
        QueryCursor::open(self.clone(), query_text, page_size).await
    }

    /// Clear the session, unless it was already replaced by a newer login.
    async fn invalidate(&self, rejected: &SessionToken) {
        let mut session = self.inner.session.write().await;
        if session.as_ref().is_some_and(|s| s.token() == rejected) {
            *session = None;
            info!("Session invalidated by the service");
        } else {
            debug!("Rejected session was already replaced");
        }
    }

    async fn invoke(
        &self,
        method: &str,
        payload: &Value,
        context: &CallContext,
    ) -> std::result::Result<Value, InvokeError> {
        let call = self.inner.transport.invoke(method, payload, context);
        match tokio::time::timeout(context.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout {
                duration_ms: u64::try_from(context.timeout.as_millis()).unwrap_or(u64::MAX),
            }
            .into()),
        }
    }
}

impl<T> std::fmt::Debug for SessionManager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

fn classify_login_failure(err: InvokeError) -> Error {
    match err {
        InvokeError::Fault(fault) if fault.code.is_credential_class() => {
            warn!(code = %fault.code, "Login rejected");
            AuthError::CredentialRejected(fault).into()
        }
        other => other.into(),
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| {
        InvalidInputError::Payload {
            message: e.to_string(),
        }
        .into()
    })
}

fn decode<R: DeserializeOwned>(method: &str, response: Value) -> Result<R> {
    serde_json::from_value(response).map_err(|e| Error::unexpected(method, e.to_string()))
}
