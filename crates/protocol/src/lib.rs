//! Wire types for the Pat file hosting API.
//!
//! Everything the `/v1` surface sends or accepts, with the API's
//! camelCase field naming. Decoding is lenient: fields the server may
//! omit default instead of failing.

pub mod account;
pub mod files;
pub mod types;

pub use account::{Account, NewUser, SessionToken, UsageEntry};
pub use files::{DownloadToken, Folder, FolderContents, MoveDestination, StoredFile, Visibility};
pub use types::{Ack, ErrorBody, UploadProgress};
