//! Token storage port

use async_trait::async_trait;
use elodan_domain::AccessToken;
use thiserror::Error;

/// Errors that can occur in durable token storage.
#[derive(Debug, Error)]
pub enum TokenStorageError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The storage location is unavailable.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Port for the process-wide access-token slot.
///
/// Exactly one token value exists at a time. `store` is last-write-wins,
/// `load` has no side effects, and all three operations must be observable
/// by the next caller immediately.
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// Returns the currently held token, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenStorageError`] when the backing store cannot be
    /// read.
    async fn load(&self) -> Result<Option<AccessToken>, TokenStorageError>;

    /// Replaces the held token.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenStorageError`] when the backing store cannot be
    /// written.
    async fn store(&self, token: &AccessToken) -> Result<(), TokenStorageError>;

    /// Removes the held token.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenStorageError`] when the backing store cannot be
    /// written.
    async fn clear(&self) -> Result<(), TokenStorageError>;
}
