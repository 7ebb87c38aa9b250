//! Account, session, and admin reporting entities.

use serde::{Deserialize, Serialize};

/// A bearer token issued by login or regeneration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    pub token: String,
}

/// The authenticated account's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub admin: bool,
    /// Custom domain serving the account's public files, if configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Storage quota in bytes; zero means unlimited.
    #[serde(default)]
    pub quota: u64,
}

/// Payload for provisioning an account through the admin surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default)]
    pub admin: bool,
}

/// One account's row in the admin usage report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageEntry {
    pub username: String,
    #[serde(default)]
    pub file_count: u64,
    #[serde(default)]
    pub bytes_used: u64,
}
