//! Query results and paging.
//!
//! Queries are started through [`SessionManager::query`](crate::SessionManager::query)
//! or [`QueryCursor::open`], and read through a [`QueryCursor`].

mod cursor;
mod record;
mod state;

pub use cursor::{QueryCursor, RecordStream};
pub use record::Record;
pub use state::QueryState;
