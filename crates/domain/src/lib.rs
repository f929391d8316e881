//! Elodan Domain - Core client types
//!
//! This crate defines the domain model for the Elodan API client.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod models;
pub mod request;

pub use auth::{AccessToken, OAuthCallback};
pub use envelope::{ApiEnvelope, unwrap_data};
pub use error::{DomainError, DomainResult};
pub use request::{FormData, FormField, HttpMethod, QueryParams, RequestBody, RequestOptions};
