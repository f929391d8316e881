//! Authenticated request gateway.
//!
//! This module is the core of the client: it wraps an HTTP transport with
//! bearer-token attachment, one-shot session refresh on 401, and
//! transparent replay, while guaranteeing that concurrent callers never
//! trigger more than one refresh call.

mod client;
mod config;
mod refresh;

pub use client::ApiGateway;
pub use config::{DEFAULT_TIMEOUT_MS, GatewayConfig};
