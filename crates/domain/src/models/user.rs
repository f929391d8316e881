//! User account model

use serde::{Deserialize, Serialize};

/// An authenticated user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Account email address.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Account role (e.g. "user", "admin").
    #[serde(default)]
    pub role: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: Option<String>,
}
