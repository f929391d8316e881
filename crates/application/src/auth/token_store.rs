//! In-memory token storage.

use std::sync::Arc;

use async_trait::async_trait;
use elodan_domain::AccessToken;
use tokio::sync::RwLock;

use crate::ports::{TokenStorage, TokenStorageError};

/// Thread-safe in-memory token store.
///
/// The default storage for short-lived clients and tests; the token does
/// not survive the process. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Arc<RwLock<Option<AccessToken>>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a token.
    #[must_use]
    pub fn with_token(token: AccessToken) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token))),
        }
    }
}

#[async_trait]
impl TokenStorage for MemoryTokenStore {
    async fn load(&self) -> Result<Option<AccessToken>, TokenStorageError> {
        Ok(self.token.read().await.clone())
    }

    async fn store(&self, token: &AccessToken) -> Result<(), TokenStorageError> {
        *self.token.write().await = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), TokenStorageError> {
        *self.token.write().await = None;
        Ok(())
    }
}
