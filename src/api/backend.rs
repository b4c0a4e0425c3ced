//! HTTP client for the Flask cross-poster backend

use reqwest::Client;
use reqwest::header::{ACCEPT, COOKIE};

use crate::config::Config;
use crate::models::Post;

use super::{FetchError, PostSource};

/// Backend API client
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    latest_url: String,
    session_cookie: Option<String>,
}

impl BackendClient {
    /// Create a client from configuration
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            latest_url: config.latest_url(),
            session_cookie: config.session_cookie.clone(),
        })
    }

    /// Endpoint this client reads from
    pub fn latest_url(&self) -> &str {
        &self.latest_url
    }
}

impl PostSource for BackendClient {
    async fn latest_post(&self) -> Result<Post, FetchError> {
        let mut request = self
            .client
            .get(&self.latest_url)
            .header(ACCEPT, "application/json");
        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, cookie);
        }

        tracing::debug!("GET {}", self.latest_url);
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        let post: Post = serde_json::from_slice(&body)?;
        tracing::info!("Fetched latest post ({} chars)", post.full_text.len());
        Ok(post)
    }
}
