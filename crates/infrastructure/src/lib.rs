//! Elodan Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: a reqwest-backed HTTP transport and a
//! file-backed token store.

pub mod adapters;
pub mod http;
pub mod persistence;

pub use adapters::ReqwestTransport;
pub use persistence::FileTokenStore;
