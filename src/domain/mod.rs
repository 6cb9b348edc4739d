//! Domain layer: value objects, wire schemas and the transport port.

pub mod payment;
pub mod ports;
pub mod recipient;
pub mod schema;
pub mod session;
