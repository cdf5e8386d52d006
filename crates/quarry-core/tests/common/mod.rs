//! Shared test helpers: a scripted transport that records every call.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Notify;

use quarry_core::error::TransportError;
use quarry_core::{
    CallContext, ClientConfig, Credentials, Endpoint, Fault, InvokeError, QueryCursor, Record,
    SessionManager, Transport,
};

pub const ENTRY: &str = "https://login.example.com/services/rpc";
pub const INSTANCE: &str = "https://na1.example.com/services/rpc";
pub const SESSION_ID: &str = "SESSION-1";

/// What the transport saw for one call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub request: Value,
    pub endpoint: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

/// A transport that answers from a queue and records what it was asked.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<Value, InvokeError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, value: Value) {
        self.replies.lock().unwrap().push_back(Ok(value));
    }

    pub fn fault(&self, code: &str, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(Fault::new(code, message).into()));
    }

    pub fn fail(&self, err: TransportError) {
        self.replies.lock().unwrap().push_back(Err(err.into()));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, method: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == method)
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn invoke(
        &self,
        method: &str,
        request: &Value,
        context: &CallContext,
    ) -> Result<Value, InvokeError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            request: request.clone(),
            endpoint: context.endpoint.to_string(),
            token: context.session_token.as_ref().map(|t| t.as_str().to_string()),
            timeout: context.timeout,
        });

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply for {}", method))
    }
}

/// A transport that never answers within any reasonable timeout.
pub struct StalledTransport;

#[async_trait]
impl Transport for StalledTransport {
    async fn invoke(
        &self,
        _method: &str,
        _request: &Value,
        _context: &CallContext,
    ) -> Result<Value, InvokeError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Value::Null)
    }
}

/// A transport that answers logins at once but holds every other call
/// until released, then rejects it as session-invalid.
#[derive(Default)]
pub struct GatedTransport {
    logins: Mutex<VecDeque<Value>>,
    entered: Notify,
    release: Notify,
}

impl GatedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn login_reply(&self, value: Value) {
        self.logins.lock().unwrap().push_back(value);
    }

    /// Wait until a held call has reached the transport.
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    /// Let the held call finish.
    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn invoke(
        &self,
        method: &str,
        _request: &Value,
        _context: &CallContext,
    ) -> Result<Value, InvokeError> {
        if method == "login" {
            let reply = self.logins.lock().unwrap().pop_front();
            return Ok(reply.unwrap_or_else(|| panic!("no scripted login reply")));
        }

        self.entered.notify_one();
        self.release.notified().await;
        Err(Fault::new("INVALID_SESSION_ID", "Session expired or invalid").into())
    }
}

pub fn config() -> ClientConfig {
    ClientConfig::new(Endpoint::new(ENTRY).unwrap())
}

pub fn manager(transport: &Arc<ScriptedTransport>) -> SessionManager<Arc<ScriptedTransport>> {
    SessionManager::new(Arc::clone(transport), config())
}

pub fn login_ok() -> Value {
    json!({
        "sessionId": SESSION_ID,
        "serverUrl": INSTANCE,
        "passwordExpired": false,
        "userId": "005D0000001Az1Y"
    })
}

pub fn credentials() -> Credentials {
    Credentials::new("alice@example.com", "hunter2")
}

/// A manager that has already logged in.
pub async fn authenticated(
    transport: &Arc<ScriptedTransport>,
) -> SessionManager<Arc<ScriptedTransport>> {
    let manager = manager(transport);
    transport.reply(login_ok());
    manager.authenticate(credentials()).await.unwrap();
    manager
}

pub fn contact(first: &str, last: &str) -> Value {
    json!({
        "attributes": {"type": "Contact"},
        "FirstName": first,
        "LastName": last
    })
}

pub fn page(size: u64, done: bool, locator: Option<&str>, records: Vec<Value>) -> Value {
    let mut page = json!({
        "size": size,
        "done": done,
        "records": records
    });
    if let Some(locator) = locator {
        page["queryLocator"] = json!(locator);
    }
    page
}

/// Pull a cursor to its end.
pub async fn drain<T: Transport>(cursor: &mut QueryCursor<T>) -> quarry_core::Result<Vec<Record>> {
    let mut records = Vec::new();
    while let Some(record) = cursor.next().await? {
        records.push(record);
    }
    Ok(records)
}

pub fn last_names(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.get("LastName").and_then(Value::as_str).unwrap_or_default().to_string())
        .collect()
}
