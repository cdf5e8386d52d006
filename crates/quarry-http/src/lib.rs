//! quarry-http - HTTP/JSON transport for quarry.

mod transport;

pub use transport::HttpTransport;
