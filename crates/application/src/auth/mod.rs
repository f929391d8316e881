//! Authentication state for the Elodan client.
//!
//! This module provides the in-memory token store. The file-backed store
//! for sessions that survive restarts lives in the infrastructure crate.

mod token_store;

pub use token_store::MemoryTokenStore;
