//! TUI Application module

mod async_ops;
mod events;
mod state;
mod ui;

pub use async_ops::{AsyncResult, FetchHandle, spawn_fetch};
pub use state::{AppState, Mode, ViewState};
pub use ui::{LOADED_HEADING, LOADING_TEXT, SIGN_IN_LABEL, TITLE};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::runtime::Runtime;

use crate::api::{BackendClient, PostSource};
use crate::config::Config;
use crate::navigate::{BrowserNavigator, Navigator};

/// The latest-post view
///
/// Mounting issues the one and only fetch. Dropping the view unmounts it and
/// cancels the fetch if it is still in flight.
pub struct LatestPostView {
    /// Render/input state
    pub state: AppState,
    fetch: FetchHandle,
}

impl LatestPostView {
    /// Mount the view and start its fetch
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount<S: PostSource>(config: Config, source: S) -> Self {
        tracing::debug!("Mounting latest post view");
        Self {
            state: AppState::new(config),
            fetch: spawn_fetch(source),
        }
    }

    /// Apply a finished fetch, if any. Returns whether the view changed.
    pub fn poll(&mut self) -> bool {
        match self.fetch.try_recv() {
            Some(result) => handle_async_result(&mut self.state, result),
            None => false,
        }
    }

    /// Wait until the fetch outcome has been applied
    pub async fn settle(&mut self) {
        while !self.state.view.is_resolved() {
            match self.fetch.recv().await {
                Some(result) => {
                    handle_async_result(&mut self.state, result);
                }
                None => break,
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent, navigator: &dyn Navigator) {
        events::handle_key(&mut self.state, key, navigator);
    }

    /// Draw the current state
    pub fn render(&self, frame: &mut Frame) {
        ui::render(frame, &self.state);
    }
}

/// Run the TUI application
pub fn run() -> Result<()> {
    // Create tokio runtime
    let rt = Runtime::new()?;

    // Load config
    let config = Config::load()?;
    let client = BackendClient::new(&config).context("Failed to build HTTP client")?;
    tracing::info!("Fetching latest post from {}", client.latest_url());

    // Mount the view (starts the fetch)
    let mut view = rt.block_on(async { LatestPostView::mount(config, client) });

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Main loop
    let result = run_app(&mut terminal, &mut view, &BrowserNavigator);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Keep the chosen theme; an untouched config is left as the user wrote it
    if view.state.config_changed()
        && let Err(e) = view.state.config.save()
    {
        tracing::warn!("Failed to save config: {e:#}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    view: &mut LatestPostView,
    navigator: &dyn Navigator,
) -> Result<()> {
    loop {
        // Process the fetch outcome once it lands
        view.poll();

        // Draw UI
        terminal.draw(|frame| view.render(frame))?;

        // Handle events
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            view.handle_key(key, navigator);
        }

        // Tick for animations
        view.state.tick();

        if view.state.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_async_result(state: &mut AppState, result: AsyncResult) -> bool {
    match result {
        AsyncResult::PostFetched(outcome) => state.view.resolve(outcome),
    }
}
