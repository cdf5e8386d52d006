//! Seams between the core and its collaborators.

mod transport;

pub use transport::{CallContext, InvokeError, Transport};
