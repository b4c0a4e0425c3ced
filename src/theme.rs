//! Theme configuration and colors.
//!
//! Crossperch supports popular terminal color schemes out of the box.
//! Theme palettes are provided by the `ratatui-themes` crate.

use ratatui::style::{Color, Modifier, Style};
use ratatui_themes::{ThemeName, ThemePalette};
use serde::{Deserialize, Serialize};

/// Theme wrapper around `ThemeName` from ratatui-themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme(pub ThemeName);

impl Theme {
    /// Get the next theme in rotation
    #[must_use]
    pub fn next(&self) -> Self {
        Self(self.0.next())
    }

    /// Get the display name for the theme.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.0.display_name()
    }

    /// Get the color palette for this theme
    #[must_use]
    pub fn colors(&self) -> ThemeColors {
        ThemeColors::from_palette(self.0.palette())
    }
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Extended color palette for UI elements.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Base colors (from palette)
    /// Primary background color
    pub bg: Color,
    /// Secondary background for the status bar and popups
    pub bg_secondary: Color,
    /// Primary foreground/text color
    pub fg: Color,
    /// Muted text color (lowest contrast)
    pub fg_muted: Color,

    // Accent colors
    /// Primary accent color
    pub primary: Color,
    /// Secondary accent color
    pub secondary: Color,

    // Semantic colors
    /// Warning state color (yellow/orange)
    pub warning: Color,
    /// Error state color (red)
    pub error: Color,
    /// Info state color (blue)
    pub info: Color,

    // UI elements
    /// Border color (unfocused)
    pub border: Color,
    /// Border color (focused)
    pub border_focus: Color,

    // Network-specific colors
    /// Twitter brand color (blue)
    pub twitter: Color,
    /// Bluesky brand color (blue)
    pub bluesky: Color,
}

impl ThemeColors {
    /// Create `ThemeColors` from a `ThemePalette`
    #[must_use]
    pub fn from_palette(p: ThemePalette) -> Self {
        Self {
            bg: p.bg,
            bg_secondary: Self::adjust_brightness(p.bg, 10),
            fg: p.fg,
            fg_muted: p.muted,

            primary: p.accent,
            secondary: p.secondary,

            warning: p.warning,
            error: p.error,
            info: p.info,

            border: p.muted,
            border_focus: p.accent,

            // Network colors (approximate)
            twitter: Color::Rgb(29, 155, 240), // #1D9BF0
            bluesky: Color::Rgb(0, 133, 255),  // #0085FF
        }
    }

    /// Adjust color brightness
    fn adjust_brightness(color: Color, amount: u8) -> Color {
        if let Color::Rgb(r, g, b) = color {
            Color::Rgb(
                r.saturating_add(amount),
                g.saturating_add(amount),
                b.saturating_add(amount),
            )
        } else {
            color
        }
    }

    // Style helpers

    /// Default text style
    #[must_use]
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Muted text style
    #[must_use]
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.fg_muted)
    }

    /// Primary accent style
    #[must_use]
    pub fn text_primary(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Secondary accent style
    #[must_use]
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    /// Warning style
    #[must_use]
    pub fn text_warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Error style
    #[must_use]
    pub fn text_error(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Info style
    #[must_use]
    pub fn text_info(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Block border style
    #[must_use]
    pub fn block(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Focused block border style
    #[must_use]
    pub fn block_focus(&self) -> Style {
        Style::default().fg(self.border_focus)
    }

    /// Key hint style (for shortcuts)
    #[must_use]
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Twitter network style
    #[must_use]
    pub fn network_twitter(&self) -> Style {
        Style::default().fg(self.twitter)
    }

    /// Bluesky network style
    #[must_use]
    pub fn network_bluesky(&self) -> Style {
        Style::default().fg(self.bluesky)
    }

    /// Sign-in button style
    #[must_use]
    pub fn button(&self) -> Style {
        Style::default()
            .bg(self.twitter)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// Title style
    #[must_use]
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }
}
