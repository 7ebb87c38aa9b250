//! Cross-cutting response and callback types.

use serde::{Deserialize, Serialize};

/// Generic acknowledgement returned by mutations without a richer
/// response entity (deletes, resets, invalidation).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}

/// Error payload the server attaches to non-success statuses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Snapshot handed to upload progress callbacks.
///
/// `transferred` is cumulative and never decreases across invocations
/// of one upload; `total` is the payload size and stays constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    pub transferred: u64,
    pub total: u64,
}
