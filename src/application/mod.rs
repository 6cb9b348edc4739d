//! Application layer.
//!
//! `CoolpayClient` validates arguments, builds requests for each endpoint,
//! sends them through the `HttpTransport` port and maps status codes and
//! bodies onto domain values or `CoolpayError`s.

pub mod client;
