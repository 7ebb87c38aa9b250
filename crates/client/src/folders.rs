//! Folder operations.

use reqwest::Method;
use serde_json::{Map, Value};

use pat_protocol::{Ack, Folder, FolderContents, MoveDestination};

use crate::client::{Client, encode_segment};
use crate::error::Error;
use crate::files::move_body;

impl Client {
    /// Lists the account's folders, all nesting levels flattened.
    pub async fn list_folders(&self) -> Result<Vec<Folder>, Error> {
        self.request(Method::GET, "/v1/folders", &[], None).await
    }

    /// Creates a folder, optionally under a parent.
    pub async fn create_folder(&self, name: &str, parent: Option<&str>) -> Result<Folder, Error> {
        let mut body = Map::new();
        body.insert("name".to_string(), name.into());
        if let Some(parent) = parent {
            body.insert("parent".to_string(), parent.into());
        }
        self.request(Method::POST, "/v1/folders/create", &[], Some(Value::Object(body)))
            .await
    }

    /// Renames and/or relocates a folder.
    ///
    /// Destination semantics match [`Client::move_file`]: a supplied
    /// destination (explicit `null` for the root included) marks the
    /// move as forced.
    pub async fn move_folder(
        &self,
        id: &str,
        new_name: Option<&str>,
        destination: MoveDestination,
    ) -> Result<Folder, Error> {
        let body = move_body("id", id, new_name, destination);
        self.request(Method::POST, "/v1/folders/move", &[], Some(body)).await
    }

    /// Fetches a folder together with its files and subfolders.
    pub async fn folder_contents(&self, id: &str) -> Result<FolderContents, Error> {
        let path = format!("/v1/folder/{}", encode_segment(id));
        self.request(Method::GET, &path, &[], None).await
    }

    /// Deletes a folder. Contained files move back to the account root.
    pub async fn delete_folder(&self, id: &str) -> Result<Ack, Error> {
        let path = format!("/v1/folder/{}", encode_segment(id));
        self.request(Method::DELETE, &path, &[], None).await
    }
}
