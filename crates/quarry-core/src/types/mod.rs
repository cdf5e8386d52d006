//! Validated value types.
//!
//! These types enforce their invariants at construction time, so a value
//! that exists is a value that can be sent.

mod endpoint;
mod page_size;

pub use endpoint::Endpoint;
pub use page_size::PageSize;
