//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the gateway and external systems.
//! Each port is a trait implemented by adapters in the infrastructure
//! layer (or by test doubles).

mod http_transport;
mod token_storage;

pub use http_transport::{HttpTransport, TransportError, TransportRequest, TransportResponse};
pub use token_storage::{TokenStorage, TokenStorageError};
