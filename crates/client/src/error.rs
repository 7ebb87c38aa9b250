//! Client error type.

/// Errors surfaced by the Pat client.
///
/// Every failure is reported once to the caller; the [`Client`](crate::Client)
/// itself stays usable afterwards.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server answered with a non-success status.
    ///
    /// `message` comes from the JSON error body's `message` field,
    /// falling back to the status' canonical reason, then to a fixed
    /// placeholder when neither is available.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Connection-level failure before a usable response arrived.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response arrived but its body could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// This build's transport cannot stream binary upload bodies.
    #[error("binary uploads are not supported in this environment")]
    UploadsUnsupported,
}

impl Error {
    /// Returns the HTTP status for API errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
