//! Lazy, page-hiding iteration over a query result.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tracing::{debug, info, instrument};

use crate::Result;
use crate::auth::SessionManager;
use crate::error::{Error, InvalidInputError};
use crate::rpc::{QUERY, QUERY_MORE, QueryMoreRequest, QueryRequest, QueryResponse};
use crate::traits::Transport;
use crate::types::PageSize;

use super::{QueryState, Record};

/// One query, read forward one record at a time.
///
/// The cursor holds at most one page. When the page runs dry and the
/// server has more, the next call to [`next`](Self::next) fetches the
/// following page with the stored query locator. Records come out in
/// exactly the order the server delivered them.
///
/// A cursor is not restartable; open a new one to run the query again.
pub struct QueryCursor<T> {
    manager: SessionManager<T>,
    state: QueryState,
    page_size: Option<PageSize>,
}

impl<T: Transport> QueryCursor<T> {
    /// Run `query_text` and buffer the first page.
    ///
    /// `page_size_hint` is clamped into the range the service accepts.
    ///
    /// # Errors
    ///
    /// Fails locally with [`InvalidInputError::Query`] on blank query text,
    /// otherwise with whatever [`SessionManager::call`] reports.
    #[instrument(skip(manager))]
    pub async fn open(
        manager: SessionManager<T>,
        query_text: &str,
        page_size_hint: Option<u32>,
    ) -> Result<Self> {
        if query_text.trim().is_empty() {
            return Err(InvalidInputError::Query {
                reason: "query text must not be empty".to_string(),
            }
            .into());
        }

        let page_size = page_size_hint.map(PageSize::new);
        let request = QueryRequest {
            query_string: query_text,
            batch_size: page_size.map(PageSize::get),
        };

        let response: QueryResponse = manager.call(QUERY, &request).await?;
        let state = QueryState::from_response(QUERY, response)?;

        info!(
            total_size = state.total_size(),
            first_page = state.buffered_len(),
            exhausted = state.is_exhausted(),
            "Query opened"
        );

        Ok(Self {
            manager,
            state,
            page_size,
        })
    }

    /// Continue from a previously captured state.
    ///
    /// The resumed cursor yields exactly what the original would have
    /// yielded from that point.
    pub fn resume(manager: SessionManager<T>, state: QueryState, page_size_hint: Option<u32>) -> Self {
        Self {
            manager,
            state,
            page_size: page_size_hint.map(PageSize::new),
        }
    }

    /// Pull the next record. `Ok(None)` marks the end of the sequence.
    ///
    /// # Errors
    ///
    /// A failed page fetch is returned as is. Records already handed out
    /// stay valid, and the state is left at the failed page, so calling
    /// `next` again issues the same fetch again.
    pub async fn next(&mut self) -> Result<Option<Record>> {
        loop {
            if let Some(record) = self.state.pop_front() {
                return Ok(Some(record));
            }

            if self.state.is_exhausted() {
                return Ok(None);
            }

            self.fetch_next_page().await?;
        }
    }

    #[instrument(skip(self), fields(locator = ?self.state.query_locator()))]
    async fn fetch_next_page(&mut self) -> Result<()> {
        let locator = self.state.query_locator().ok_or_else(|| {
            Error::unexpected(QUERY_MORE, "more records reported but no query locator given")
        })?;

        debug!("Fetching next page");

        let request = QueryMoreRequest {
            query_locator: locator,
            batch_size: self.page_size.map(PageSize::get),
        };

        let response: QueryResponse = self.manager.call(QUERY_MORE, &request).await?;
        self.state.apply_page(QUERY_MORE, response)?;

        debug!(
            page = self.state.buffered_len(),
            exhausted = self.state.is_exhausted(),
            "Page fetched"
        );
        Ok(())
    }

    /// Returns the current state.
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Consume the cursor, keeping its state.
    pub fn into_state(self) -> QueryState {
        self.state
    }

    /// Total number of records the query matches.
    pub fn total_size(&self) -> u64 {
        self.state.total_size()
    }

    /// Turn the cursor into a stream that ends after the first error.
    pub fn into_stream(self) -> RecordStream
    where
        T: 'static,
    {
        let mut cursor = self;
        RecordStream::new(async_stream::stream! {
            loop {
                match cursor.next().await {
                    Ok(Some(record)) => yield Ok(record),
                    Ok(None) => break,
                    Err(e) => {
                        yield Err(e);
                        break;
                    }
                }
            }
        })
    }
}

impl<T> std::fmt::Debug for QueryCursor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCursor")
            .field("state", &self.state)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

/// Stream of query records.
pub struct RecordStream {
    inner: Pin<Box<dyn Stream<Item = Result<Record>> + Send>>,
}

impl RecordStream {
    fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<Record>> + Send + 'static,
    {
        Self {
            inner: Box::pin(stream),
        }
    }
}

impl Stream for RecordStream {
    type Item = Result<Record>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}
