//! Async client for the Pat file hosting API.
//!
//! Wraps the `/v1` REST surface (files, folders, sessions, sharing,
//! admin reporting) behind typed methods on [`Client`]. All calls are
//! single-attempt: no retries, no internal timeouts, no caching.
//! Binary uploads stream their payload and report progress through a
//! callback.
//!
//! ```no_run
//! # async fn demo() -> Result<(), pat_client::Error> {
//! let mut client = pat_client::Client::new()?;
//! let session = client.login("dana", "hunter2").await?;
//! client.set_token(session.token);
//! for file in client.list_files().await? {
//!     println!("{} ({} bytes)", file.short_name, file.size);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod upload;

mod admin;
mod auth;
mod files;
mod folders;

#[cfg(test)]
mod testutil;

pub use client::{Client, DEFAULT_BASE_URL};
pub use error::Error;
pub use files::UploadOptions;
pub use upload::ProgressCallback;

pub use pat_protocol as protocol;
