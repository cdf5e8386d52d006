//! Query page size hint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of records the server is asked to return per page.
///
/// This is a performance hint, so out-of-range values are clamped into
/// [`PageSize::MIN`]..=[`PageSize::MAX`] rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PageSize(u32);

impl PageSize {
    /// Smallest page the service accepts.
    pub const MIN: u32 = 200;

    /// Largest page the service accepts.
    pub const MAX: u32 = 2000;

    /// Page size the service uses when none is requested.
    pub const SERVER_DEFAULT: u32 = 500;

    /// Create a page size, clamping into the accepted range.
    pub fn new(hint: u32) -> Self {
        let clamped = hint.clamp(Self::MIN, Self::MAX);
        if clamped != hint {
            tracing::debug!(hint, clamped, "page size hint clamped");
        }
        Self(clamped)
    }

    /// Returns the clamped value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for PageSize {
    fn from(hint: u32) -> Self {
        Self::new(hint)
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Self::new(u32::deserialize(deserializer)?))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
