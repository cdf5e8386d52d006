//! RPC method names and payload types.

use serde::{Deserialize, Serialize};

use crate::query::Record;

// ============================================================================
// Method Names
// ============================================================================

/// Exchanges credentials for a session.
pub const LOGIN: &str = "login";

/// Starts a query.
pub const QUERY: &str = "query";

/// Fetches the next page of a started query.
pub const QUERY_MORE: &str = "queryMore";

/// Lists the object types visible to the session.
pub const DESCRIBE_GLOBAL: &str = "describeGlobal";

/// Describes the fields of one object type.
pub const DESCRIBE_SOBJECT: &str = "describeSObject";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for login.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response from login.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginResponse {
    pub session_id: String,
    pub server_url: String,
    #[serde(default)]
    pub password_expired: bool,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Request body for query.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QueryRequest<'a> {
    pub query_string: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
}

/// Request body for queryMore.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QueryMoreRequest<'a> {
    pub query_locator: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
}

/// Response from query and queryMore.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QueryResponse {
    pub size: u64,
    pub done: bool,
    #[serde(default)]
    pub query_locator: Option<String>,
    #[serde(default)]
    pub records: Vec<Record>,
}

/// Request body for describeSObject.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeSObjectRequest<'a> {
    pub s_object_type: &'a str,
}
