//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::{Endpoint, PageSize};

/// Default bound on a single RPC, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Configuration for a [`SessionManager`](crate::SessionManager).
///
/// # Example
///
/// ```
/// use quarry_core::{ClientConfig, Endpoint};
///
/// let config = ClientConfig::new(Endpoint::new("https://login.example.com").unwrap())
///     .with_timeout_ms(30_000)
///     .with_page_size(1000);
/// assert_eq!(config.timeout().as_secs(), 30);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Well-known endpoint used only for the login call.
    pub entry_endpoint: Endpoint,

    /// Bound on every RPC, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Page size requested for queries. `None` leaves it to the server.
    #[serde(default)]
    pub page_size: Option<PageSize>,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl ClientConfig {
    /// Create a configuration with default timeout and page size.
    pub fn new(entry_endpoint: Endpoint) -> Self {
        Self {
            entry_endpoint,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            page_size: None,
        }
    }

    /// Set the per-call timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the query page size hint. Out-of-range values are clamped.
    pub fn with_page_size(mut self, hint: u32) -> Self {
        self.page_size = Some(PageSize::new(hint));
        self
    }

    /// Returns the per-call timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
