//! Request dispatch for the Pat API.
//!
//! Every resource method funnels through [`Client::request`] (JSON
//! cycle) or [`Client::upload`] (binary body). The dispatcher owns the
//! base endpoint and the bearer token; nothing else survives between
//! calls, and a failed call leaves the client fully usable.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use pat_protocol::ErrorBody;

use crate::error::Error;
use crate::upload::{ProgressCallback, progress_body};

/// Production endpoint, used unless overridden at construction.
pub const DEFAULT_BASE_URL: &str = "https://pat.link";

/// Message used when neither the error body nor the status carries one.
const NO_ERROR_INFO: &str = "No error info";

/// Async client for the Pat API.
///
/// Holds the base endpoint and an optional bearer token. Dispatch only
/// reads the token, so a shared `&Client` is safe to use from
/// concurrent tasks; changing the token requires `&mut self`.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    streaming_uploads: bool,
}

impl Client {
    /// Creates a client against the production endpoint.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom endpoint (self-hosted
    /// instances). A trailing slash is tolerated.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            // reqwest cannot stream request bodies on wasm targets.
            streaming_uploads: cfg!(not(target_arch = "wasm32")),
        })
    }

    /// Sets the bearer token attached to every subsequent request.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Clears the bearer token; subsequent requests go out unauthenticated.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Whether a bearer token is currently held.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// The endpoint this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(test)]
    pub(crate) fn without_streaming_uploads(mut self) -> Self {
        self.streaming_uploads = false;
        self
    }

    /// Dispatches a JSON request and decodes the response body.
    ///
    /// Query entries with `None` or empty values are dropped rather
    /// than sent as `key=`. Bodyless requests carry no body at all.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, Option<String>)],
        body: Option<Value>,
    ) -> Result<T, Error> {
        let url = format!("{}{}{}", self.base_url, path, encode_query(query));
        debug!(%method, %url, "dispatching request");

        let mut req = self
            .http
            .request(method, &url)
            .header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        if let Some(body) = &body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            let message = error_message(status, &text);
            warn!(status = status.as_u16(), %url, %message, "request failed");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text).map_err(Error::MalformedResponse)
    }

    /// Dispatches a binary upload, streaming `data` as the whole
    /// request body.
    ///
    /// `path` must already carry its query string: upload metadata
    /// (mime type, original filename) travels in the query, not the
    /// body. The progress callback observes cumulative transferred
    /// bytes against the constant payload total, in transfer order.
    ///
    /// Upload endpoints always answer with JSON, so a body that does
    /// not parse is reported as malformed even on an error status.
    pub(crate) async fn upload<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        data: Vec<u8>,
        on_progress: Option<ProgressCallback>,
    ) -> Result<T, Error> {
        if !self.streaming_uploads {
            return Err(Error::UploadsUnsupported);
        }

        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, bytes = data.len(), "dispatching upload");

        let mut req = self
            .http
            .request(method, &url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/octet-stream");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req.body(progress_body(data, on_progress)).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        let parsed: Value = serde_json::from_str(&text).map_err(Error::MalformedResponse)?;
        if !status.is_success() {
            let message = error_message(status, &text);
            warn!(status = status.as_u16(), %url, %message, "upload failed");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_value(parsed).map_err(Error::MalformedResponse)
    }
}

/// Percent-encodes a caller-supplied path segment (short names,
/// folder ids).
pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
}

/// Builds a query string from the given mapping, leading `?` included.
///
/// Entries whose value is `None` or empty are omitted entirely.
/// Returns an empty string when nothing remains.
pub(crate) fn encode_query(params: &[(&str, Option<String>)]) -> String {
    let mut out = String::new();
    for (key, value) in params {
        let Some(value) = value else { continue };
        if value.is_empty() {
            continue;
        }
        out.push(if out.is_empty() { '?' } else { '&' });
        out.push_str(key);
        out.push('=');
        out.push_str(&utf8_percent_encode(value, NON_ALPHANUMERIC).to_string());
    }
    out
}

/// Extracts a human-readable message from an error response body.
///
/// Prefers the JSON body's `message` field, then the status' canonical
/// reason, then a fixed placeholder.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(err) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = err.message.filter(|m| !m.is_empty()) {
            return message;
        }
    }
    status.canonical_reason().unwrap_or(NO_ERROR_INFO).to_string()
}
