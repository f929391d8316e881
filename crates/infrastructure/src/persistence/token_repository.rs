//! File-backed token storage.
//!
//! The access token is persisted in a schema-versioned JSON credentials
//! file so a restarted client resumes its session without
//! re-authenticating. The refresh token never appears here; it lives in
//! an httpOnly cookie owned by the server.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use elodan_application::{TokenStorage, TokenStorageError};
use elodan_domain::AccessToken;
use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: u32 = 1;

/// On-disk credentials layout:
/// ```json
/// {
///   "schema_version": 1,
///   "access_token": "eyJhb..."
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
struct CredentialsFile {
    schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access_token: Option<AccessToken>,
}

/// File-backed token store.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store backed by an explicit file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the default per-user location,
    /// `<data dir>/elodan/credentials.json`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStorageError::Unavailable`] when the platform
    /// exposes no user data directory.
    pub fn default_location() -> Result<Self, TokenStorageError> {
        let base = dirs::data_dir().ok_or_else(|| {
            TokenStorageError::Unavailable("no user data directory".to_string())
        })?;
        Ok(Self::new(base.join("elodan").join("credentials.json")))
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_file(&self) -> Result<Option<CredentialsFile>, TokenStorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|e| TokenStorageError::Serialization(e.to_string())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(TokenStorageError::Io(err)),
        }
    }

    async fn write_file(&self, file: &CredentialsFile) -> Result<(), TokenStorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(file)
            .map_err(|e| TokenStorageError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl TokenStorage for FileTokenStore {
    async fn load(&self) -> Result<Option<AccessToken>, TokenStorageError> {
        Ok(self.read_file().await?.and_then(|file| file.access_token))
    }

    async fn store(&self, token: &AccessToken) -> Result<(), TokenStorageError> {
        self.write_file(&CredentialsFile {
            schema_version: SCHEMA_VERSION,
            access_token: Some(token.clone()),
        })
        .await
    }

    async fn clear(&self) -> Result<(), TokenStorageError> {
        self.write_file(&CredentialsFile {
            schema_version: SCHEMA_VERSION,
            access_token: None,
        })
        .await
    }
}
