//! Application state

use crate::api::FetchError;
use crate::config::Config;
use crate::models::Post;
use crate::theme::Theme;

/// What the view is currently showing
///
/// Starts as `Loading` and is resolved exactly once. There is no way back to
/// `Loading`, and a post and an error can never be held at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Fetch still in flight
    #[default]
    Loading,
    /// Fetch succeeded
    Loaded(Post),
    /// Fetch failed; holds the user-facing message
    Error(String),
}

impl ViewState {
    /// Whether the fetch outcome has been applied
    pub const fn is_resolved(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// Apply the fetch outcome. Returns `false` (and changes nothing) if
    /// already resolved.
    pub fn resolve(&mut self, outcome: Result<Post, FetchError>) -> bool {
        if self.is_resolved() {
            tracing::warn!("Ignoring fetch outcome for an already resolved view");
            return false;
        }

        *self = match outcome {
            Ok(post) => Self::Loaded(post),
            Err(e) => {
                tracing::warn!("Latest post fetch failed: {e}");
                Self::Error(e.user_message().to_string())
            }
        };
        true
    }

    /// The loaded post, if any
    pub const fn post(&self) -> Option<&Post> {
        match self {
            Self::Loaded(post) => Some(post),
            _ => None,
        }
    }

    /// The error message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Whether the sign-in button is on screen
    pub const fn shows_sign_in(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Modal overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No overlay
    #[default]
    Normal,
    /// Keybinding help
    Help,
}

/// Application state
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Whether to quit
    pub should_quit: bool,
    /// Current theme
    pub theme: Theme,
    /// Fetch-driven view state
    pub view: ViewState,
    /// Current overlay
    pub mode: Mode,

    /// Status message (bottom bar)
    pub status: String,

    /// Tick counter for animations
    tick: u64,
    /// Whether `config` differs from what was loaded
    config_changed: bool,
}

impl AppState {
    /// Create a new app state
    pub fn new(config: Config) -> Self {
        let theme = config.theme;

        Self {
            config,
            should_quit: false,
            theme,
            view: ViewState::Loading,
            mode: Mode::Normal,
            status: String::new(),
            tick: 0,
            config_changed: false,
        }
    }

    /// Tick for animations
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Get current tick
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status.clear();
    }

    /// Whether the spinner should run
    pub const fn loading(&self) -> bool {
        !self.view.is_resolved()
    }

    /// Cycle through themes
    pub fn next_theme(&mut self) {
        self.theme = self.theme.next();
        self.config.theme = self.theme;
        self.config_changed = true;
    }

    /// Whether the config needs writing back on exit
    pub const fn config_changed(&self) -> bool {
        self.config_changed
    }
}
