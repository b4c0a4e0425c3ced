//! Event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, Mode};
use crate::navigate::Navigator;

/// Handle key events
///
/// Nothing here can start a fetch: the view fetches once, on mount.
pub fn handle_key(state: &mut AppState, key: KeyEvent, navigator: &dyn Navigator) {
    if state.mode == Mode::Help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter) {
            state.mode = Mode::Normal;
        }
        return;
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Char('q')) => {
            state.should_quit = true;
        }
        (_, KeyCode::Char('?') | KeyCode::F(1)) => {
            state.mode = Mode::Help;
        }
        (_, KeyCode::Char('t')) => {
            state.next_theme();
            state.set_status(format!("✓ Theme set to {}", state.theme.name()));
        }
        (_, KeyCode::Enter | KeyCode::Char('s')) => {
            if state.view.shows_sign_in() {
                sign_in(state, navigator);
            }
        }
        (_, KeyCode::Esc) => {
            state.clear_status();
        }
        _ => {}
    }
}

/// Hand the user over to the backend's sign-in flow
fn sign_in(state: &mut AppState, navigator: &dyn Navigator) {
    let url = state.config.sign_in_url().to_string();
    match navigator.navigate(&url) {
        Ok(()) => {
            state.set_status(format!("✓ Opened {url} in browser. Restart once signed in."));
        }
        Err(e) => {
            tracing::warn!("Sign-in navigation failed: {e:#}");
            state.set_status(format!("❌ Open {url} in your browser to sign in"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::api::FetchError;
    use crate::app::state::ViewState;
    use crate::config::Config;
    use crate::models::Post;

    #[derive(Default)]
    struct Recorder {
        visited: RefCell<Vec<String>>,
    }

    impl Navigator for Recorder {
        fn navigate(&self, url: &str) -> anyhow::Result<()> {
            self.visited.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl Navigator for Broken {
        fn navigate(&self, _url: &str) -> anyhow::Result<()> {
            anyhow::bail!("no browser")
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn failed_state() -> AppState {
        let mut state = AppState::new(Config::default());
        state
            .view
            .resolve(Err(FetchError::Status(reqwest::StatusCode::UNAUTHORIZED)));
        state
    }

    #[test]
    fn test_sign_in_navigates_to_backend_root() {
        let mut state = failed_state();
        let nav = Recorder::default();

        handle_key(&mut state, press(KeyCode::Enter), &nav);

        assert_eq!(*nav.visited.borrow(), vec!["http://localhost:5000".to_string()]);
        assert!(state.status.contains("Opened"));
        assert!(matches!(state.view, ViewState::Error(_)));
    }

    #[test]
    fn test_sign_in_key_ignored_without_error() {
        let nav = Recorder::default();

        let mut loading = AppState::new(Config::default());
        handle_key(&mut loading, press(KeyCode::Char('s')), &nav);

        let mut loaded = AppState::new(Config::default());
        loaded.view.resolve(Ok(Post::new("hello")));
        handle_key(&mut loaded, press(KeyCode::Enter), &nav);

        assert!(nav.visited.borrow().is_empty());
    }

    #[test]
    fn test_navigation_failure_reported_in_status() {
        let mut state = failed_state();
        handle_key(&mut state, press(KeyCode::Char('s')), &Broken);
        assert!(state.status.starts_with('❌'));
        assert!(!state.should_quit);
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut state = failed_state();
        let nav = Recorder::default();

        handle_key(&mut state, press(KeyCode::Char('?')), &nav);
        assert_eq!(state.mode, Mode::Help);

        handle_key(&mut state, press(KeyCode::Enter), &nav);
        assert_eq!(state.mode, Mode::Normal);
        assert!(nav.visited.borrow().is_empty());
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::new(Config::default());
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &Recorder::default(),
        );
        assert!(state.should_quit);
    }
}
