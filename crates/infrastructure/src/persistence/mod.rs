//! Durable persistence adapters.

mod token_repository;

pub use token_repository::FileTokenStore;
