//! # Crossperch 🐦
//!
//! Terminal view of your latest tweet, for the Twitter to Bluesky cross-poster.
//!
//! ## Overview
//!
//! Crossperch asks the cross-poster backend for your most recent tweet and
//! shows it. If the backend can't hand it over (you aren't signed in, it is
//! down, or it answered with something unexpected) you get one message and a
//! button that opens the backend's sign-in page in your browser.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     LatestPostView                          │
//! │   Mounts once, fetches once, renders Loading/Loaded/Error   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │     Config      │ │       API       │ │    Navigate     │
//! │                 │ │                 │ │                 │
//! │ • Backend URL   │ │ • PostSource    │ │ • Sign-in URL   │
//! │ • Session cookie│ │ • BackendClient │ │ • Browser       │
//! │ • Theme         │ │ • FetchError    │ │                 │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`]: Backend client and the single fetch error taxonomy
//! - [`app`]: TUI view state, fetch task and event loop
//! - [`cli`]: Non-interactive `latest` command
//! - [`config`]: Configuration management
//! - [`models`]: The `Post` entity
//! - [`navigate`]: Sign-in navigation
//! - [`paths`]: Config directory location
//! - [`theme`]: Theme support via ratatui-themes
//!
//! ## Example
//!
//! ```no_run
//! use crossperch::app;
//!
//! fn main() -> anyhow::Result<()> {
//!     app::run()
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::if_not_else)]
#![allow(clippy::single_match_else)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::return_self_not_must_use)]

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod models;
pub mod navigate;
pub mod paths;
pub mod theme;

// Re-export main types for convenience
pub use api::{BackendClient, FETCH_FAILURE_MESSAGE, FetchError, PostSource};
pub use app::{AppState, LatestPostView, ViewState};
pub use config::Config;
pub use models::Post;
pub use navigate::{BrowserNavigator, Navigator};
pub use theme::{Theme, ThemeColors};

/// ASCII logo for the application
pub const LOGO: &str = r"
  ┌─┐┬─┐┌─┐┌─┐┌─┐┌─┐┌─┐┬─┐┌─┐┬ ┬
  │  ├┬┘│ │└─┐└─┐├─┘├┤ ├┬┘│  ├─┤
  └─┘┴└─└─┘└─┘└─┘┴  └─┘┴└─└─┘┴ ┴
";

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Where the cross-poster backend listens by default
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
