//! HTTP transport.

mod http;

pub use http::{HttpTransport, TransportError};
