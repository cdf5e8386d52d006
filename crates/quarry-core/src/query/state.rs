//! Paging state of one query.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::Error;
use crate::rpc::QueryResponse;

use super::Record;

/// Where a query stands: the undelivered part of the current page, the
/// locator for the next page, and whether the server has more.
///
/// The state is plain data. It can be serialized, rebuilt with
/// [`QueryState::new`], and handed to
/// [`QueryCursor::resume`](super::QueryCursor::resume) to continue the
/// same sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    records: VecDeque<Record>,
    query_locator: Option<String>,
    exhausted: bool,
    total_size: u64,
}

impl QueryState {
    /// Build a state from its parts.
    pub fn new(
        records: impl IntoIterator<Item = Record>,
        query_locator: Option<String>,
        exhausted: bool,
        total_size: u64,
    ) -> Self {
        Self {
            records: records.into_iter().collect(),
            query_locator,
            exhausted,
            total_size,
        }
    }

    /// State after the initial query response.
    ///
    /// A total size of zero ends the query outright, whatever else the
    /// response says.
    pub(crate) fn from_response(method: &str, response: QueryResponse) -> Result<Self> {
        if response.size == 0 {
            return Ok(Self::new(Vec::new(), None, true, 0));
        }

        let total_size = response.size;
        let mut state = Self::new(Vec::new(), None, false, total_size);
        state.apply_page(method, response)?;
        Ok(state)
    }

    /// Replace the buffered page with the next one.
    ///
    /// The page is checked before anything is committed, so a bad page
    /// leaves the state untouched.
    pub(crate) fn apply_page(&mut self, method: &str, response: QueryResponse) -> Result<()> {
        if !response.done {
            if response.query_locator.is_none() {
                return Err(Error::unexpected(
                    method,
                    "more records reported but no query locator given",
                ));
            }
            if response.records.is_empty() {
                return Err(Error::unexpected(
                    method,
                    "empty page with more records reported",
                ));
            }
        }

        self.records = response.records.into();
        self.exhausted = response.done;
        self.query_locator = if response.done {
            None
        } else {
            response.query_locator
        };

        Ok(())
    }

    pub(crate) fn pop_front(&mut self) -> Option<Record> {
        self.records.pop_front()
    }

    /// Records of the current page not yet handed out.
    pub fn buffered(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of records of the current page not yet handed out.
    pub fn buffered_len(&self) -> usize {
        self.records.len()
    }

    /// Locator of the next page, if the server has more.
    pub fn query_locator(&self) -> Option<&str> {
        self.query_locator.as_deref()
    }

    /// Whether the server has no more pages.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Total number of records the query matches, as reported by the server.
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Whether every record has been handed out.
    pub fn is_finished(&self) -> bool {
        self.exhausted && self.records.is_empty()
    }
}
