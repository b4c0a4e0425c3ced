//! Sign-in navigation
//!
//! Signing in is a hand-off: we open the backend's root URL in the browser
//! and the backend owns everything after that.

use anyhow::{Context, Result};

/// Opens URLs outside the TUI
pub trait Navigator {
    /// Navigate to `url`
    fn navigate(&self, url: &str) -> Result<()>;
}

/// Opens URLs in the system browser
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) -> Result<()> {
        tracing::info!("Opening {url} in browser");
        open::that(url).with_context(|| format!("Failed to open {url}"))
    }
}
