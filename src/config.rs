//! Configuration module for Crossperch

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths;
use crate::theme::Theme;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Selected theme
    #[serde(default)]
    pub theme: Theme,

    /// Root URL of the cross-poster backend; also where sign-in starts
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Path of the latest-tweet endpoint, relative to `backend_url`
    #[serde(default = "default_latest_path")]
    pub latest_path: String,

    /// Session cookie forwarded with the fetch (e.g. `session=abc123`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,

    /// Request timeout in seconds (0 = no timeout)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_backend_url() -> String {
    crate::DEFAULT_BACKEND_URL.to_string()
}

fn default_latest_path() -> String {
    "/latest_tweet".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            backend_url: default_backend_url(),
            latest_path: default_latest_path(),
            session_cookie: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        paths::config_path()
    }

    /// Load config from the default path or create default
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        self.save_to(&path)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Full URL of the latest-tweet endpoint
    pub fn latest_url(&self) -> String {
        format!(
            "{}/{}",
            self.backend_url.trim_end_matches('/'),
            self.latest_path.trim_start_matches('/')
        )
    }

    /// URL the sign-in action navigates to
    pub fn sign_in_url(&self) -> &str {
        &self.backend_url
    }

    /// Request timeout, if any
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}
