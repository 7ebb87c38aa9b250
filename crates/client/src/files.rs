//! File operations: listing, metadata, upload, move, sharing.

use reqwest::Method;
use serde_json::{Map, Value, json};

use pat_protocol::{Ack, DownloadToken, MoveDestination, StoredFile, Visibility};

use crate::client::{Client, encode_query, encode_segment};
use crate::error::Error;
use crate::upload::ProgressCallback;

/// Metadata for a new upload, carried in the query string.
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    /// Original filename shown alongside the stored file.
    pub file_name: String,
    /// Mime type; the server sniffs one when omitted.
    pub mime_type: Option<String>,
    /// Folder id to file the upload under; account root when omitted.
    pub folder: Option<String>,
}

impl Client {
    /// Lists every file owned by the authenticated account.
    pub async fn list_files(&self) -> Result<Vec<StoredFile>, Error> {
        self.request(Method::GET, "/v1/files", &[], None).await
    }

    /// Fetches metadata for a single file.
    pub async fn file_info(&self, short_name: &str) -> Result<StoredFile, Error> {
        let path = format!("/v1/file/{}", encode_segment(short_name));
        self.request(Method::GET, &path, &[], None).await
    }

    /// Deletes a file.
    pub async fn delete_file(&self, short_name: &str) -> Result<Ack, Error> {
        let path = format!("/v1/file/{}", encode_segment(short_name));
        self.request(Method::DELETE, &path, &[], None).await
    }

    /// Renames and/or relocates a file.
    ///
    /// Any supplied destination — [`MoveDestination::Root`] included —
    /// marks the move as forced server-side; [`MoveDestination::Keep`]
    /// keeps the `destination` key off the wire and the parent
    /// untouched.
    pub async fn move_file(
        &self,
        short_name: &str,
        new_name: Option<&str>,
        destination: MoveDestination,
    ) -> Result<StoredFile, Error> {
        let body = move_body("shortName", short_name, new_name, destination);
        self.request(Method::POST, "/v1/files/move", &[], Some(body)).await
    }

    /// Issues a short-lived token for one direct download of a file.
    pub async fn download_token(&self, short_name: &str) -> Result<DownloadToken, Error> {
        let body = json!({ "shortName": short_name });
        self.request(Method::POST, "/v1/files/token", &[], Some(body)).await
    }

    /// Updates a file's visibility.
    pub async fn set_sharing(
        &self,
        short_name: &str,
        visibility: Visibility,
    ) -> Result<StoredFile, Error> {
        let body = json!({ "shortName": short_name, "visibility": visibility });
        self.request(Method::POST, "/v1/files/sharing", &[], Some(body)).await
    }

    /// Uploads a new file, streaming `data` as the request body.
    pub async fn upload_file(
        &self,
        data: Vec<u8>,
        options: &UploadOptions,
        on_progress: Option<ProgressCallback>,
    ) -> Result<StoredFile, Error> {
        let query = encode_query(&[
            ("name", Some(options.file_name.clone())),
            ("mime", options.mime_type.clone()),
            ("folder", options.folder.clone()),
        ]);
        self.upload(Method::POST, &format!("/v1/upload{query}"), data, on_progress)
            .await
    }

    /// Replaces the contents of an existing file.
    pub async fn replace_file(
        &self,
        short_name: &str,
        data: Vec<u8>,
        mime_type: Option<String>,
        on_progress: Option<ProgressCallback>,
    ) -> Result<StoredFile, Error> {
        let query = encode_query(&[("mime", mime_type)]);
        let path = format!("/v1/file/{}{query}", encode_segment(short_name));
        self.upload(Method::PUT, &path, data, on_progress).await
    }
}

/// Builds a move-request body with presence-based destination
/// semantics: the `destination` key appears on the wire only when a
/// destination was supplied, carrying `null` for the account root.
pub(crate) fn move_body(
    id_key: &str,
    id: &str,
    new_name: Option<&str>,
    destination: MoveDestination,
) -> Value {
    let mut body = Map::new();
    body.insert(id_key.to_string(), id.into());
    if let Some(name) = new_name {
        body.insert("newName".to_string(), name.into());
    }
    match destination {
        MoveDestination::Keep => {}
        MoveDestination::Root => {
            body.insert("destination".to_string(), Value::Null);
        }
        MoveDestination::Folder(folder_id) => {
            body.insert("destination".to_string(), folder_id.into());
        }
    }
    Value::Object(body)
}
