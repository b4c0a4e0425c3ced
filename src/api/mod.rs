//! API client for the cross-poster backend

pub mod backend;

use std::future::Future;

use thiserror::Error;

use crate::models::Post;

pub use backend::BackendClient;

/// The only message users ever see when the latest post can't be fetched
pub const FETCH_FAILURE_MESSAGE: &str = "Could not fetch tweet. Please sign in.";

/// Why a fetch failed
///
/// The variants exist for logs. Every one of them is shown to the user as
/// [`FETCH_FAILURE_MESSAGE`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// The backend answered with a non-success status (usually 401)
    #[error("backend returned {0}")]
    Status(reqwest::StatusCode),
    /// Connection, TLS, timeout or body read failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The body wasn't a post
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// User-facing message (identical for every cause)
    pub const fn user_message(&self) -> &'static str {
        FETCH_FAILURE_MESSAGE
    }
}

/// Something that can produce the user's latest post
pub trait PostSource: Send + Sync + 'static {
    /// Fetch the most recent post
    fn latest_post(&self) -> impl Future<Output = Result<Post, FetchError>> + Send;
}
