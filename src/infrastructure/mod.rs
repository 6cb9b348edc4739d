//! Adapters implementing the `HttpTransport` port.

pub mod http;
pub mod in_memory;
