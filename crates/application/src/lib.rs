//! Elodan Application - Request gateway and ports
//!
//! This crate contains the authenticated request gateway and the port
//! traits it depends on. All network and storage access goes through the
//! ports, so the gateway's refresh coordination and replay behavior is
//! testable without real I/O.

pub mod auth;
pub mod error;
pub mod gateway;
pub mod ports;

pub use auth::MemoryTokenStore;
pub use error::{ApiError, ApiResult};
pub use gateway::{ApiGateway, DEFAULT_TIMEOUT_MS, GatewayConfig};
pub use ports::{
    HttpTransport, TokenStorage, TokenStorageError, TransportError, TransportRequest,
    TransportResponse,
};
