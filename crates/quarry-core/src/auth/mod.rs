//! Authentication types and session management.
//!
//! All authenticated calls go through a [`SessionManager`], which owns the
//! [`Session`] produced by a successful login.

mod credentials;
mod manager;
mod session;
mod token;

pub use credentials::Credentials;
pub use manager::SessionManager;
pub use session::Session;
pub use token::SessionToken;
