//! File and folder entities.

use serde::{Deserialize, Serialize};

/// Who can retrieve a file without a download token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Listed on the owner's public page and fetchable by anyone.
    Public,
    /// Fetchable by anyone who knows the short name, but unlisted.
    Unlisted,
    /// Owner only.
    #[default]
    Private,
}

/// A stored file as the server reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    /// Stable public identifier, used in `/v1/file/{shortName}` paths.
    pub short_name: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub mime_type: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Upload time, unix seconds.
    #[serde(default)]
    pub uploaded_at: i64,
    #[serde(default)]
    pub visibility: Visibility,
    /// Containing folder id, absent for files at the account root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(default)]
    pub downloads: u64,
}

/// A folder as the server reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    /// Parent folder id, absent for top-level folders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub file_count: u64,
}

/// A folder together with its contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderContents {
    pub folder: Folder,
    #[serde(default)]
    pub files: Vec<StoredFile>,
    #[serde(default)]
    pub subfolders: Vec<Folder>,
}

/// Short-lived credential for one direct download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadToken {
    pub token: String,
    /// Expiry, unix seconds.
    #[serde(default)]
    pub expires_at: i64,
}

/// Where a move operation should land.
///
/// The wire contract distinguishes a missing `destination` key from an
/// explicit `null`: any supplied destination, `null` included, makes
/// the server treat the move as forced. Callers that only rename pass
/// [`MoveDestination::Keep`], which keeps the key off the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MoveDestination {
    /// Leave the parent untouched; `destination` is not sent.
    #[default]
    Keep,
    /// Move to the account root; `destination` is sent as `null`.
    Root,
    /// Move into the given folder.
    Folder(String),
}
