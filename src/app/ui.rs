//! UI rendering for the TUI

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::state::{AppState, Mode, ViewState};
use crate::models::Post;
use crate::theme::ThemeColors;

/// Crossperch icon
const ICON: &str = "🐦";

/// Header shown above every state
pub const TITLE: &str = "Twitter to Bluesky Cross-Poster";

/// Shown while the fetch is in flight
pub const LOADING_TEXT: &str = "Loading your latest tweet...";

/// Heading over a loaded post
pub const LOADED_HEADING: &str = "Your Latest Tweet";

/// Label of the sign-in button
pub const SIGN_IN_LABEL: &str = "Sign in with Twitter";

/// Main render function
pub fn render(frame: &mut Frame, state: &AppState) {
    let colors = state.theme.colors();

    // Set background
    let area = frame.area();
    let bg_block = Block::default().style(Style::default().bg(colors.bg));
    frame.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, &colors, chunks[0]);
    match &state.view {
        ViewState::Loading => render_loading(frame, &colors, chunks[1]),
        ViewState::Loaded(post) => render_post(frame, &colors, post, chunks[1]),
        ViewState::Error(message) => render_error(frame, state, &colors, message, chunks[1]),
    }
    render_status_bar(frame, state, &colors, chunks[2]);

    if state.mode == Mode::Help {
        render_help_popup(frame, state, &colors);
    }
}

fn render_header(frame: &mut Frame, colors: &ThemeColors, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("Twitter", colors.network_twitter().add_modifier(Modifier::BOLD)),
        Span::styled(" → ", colors.text_muted()),
        Span::styled("Bluesky", colors.network_bluesky().add_modifier(Modifier::BOLD)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(colors.block())
            .title(format!(" {ICON} {TITLE} "))
            .title_style(colors.title()),
    );

    frame.render_widget(header, area);
}

fn main_block<'a>(colors: &ThemeColors, title: String) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(colors.text_primary())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(colors.block_focus())
}

fn render_loading(frame: &mut Frame, colors: &ThemeColors, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ⏳ ", Style::default()),
            Span::styled(LOADING_TEXT, colors.text_muted()),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(main_block(colors, " 📰 Latest ".to_string()));
    frame.render_widget(paragraph, area);
}

fn render_post(frame: &mut Frame, colors: &ThemeColors, post: &Post, area: Rect) {
    let mut content = vec![Line::from("")];

    if let Some(handle) = post.author_handle() {
        let mut author = vec![Span::styled("  ", Style::default())];
        if let Some(name) = post.user.as_ref().and_then(|u| u.name.as_deref()) {
            author.push(Span::styled(
                format!("{name} "),
                colors.text_primary().add_modifier(Modifier::BOLD),
            ));
        }
        author.push(Span::styled(format!("@{handle}"), colors.text_muted()));
        if let Some(time) = post.relative_time() {
            author.push(Span::styled(format!(" · {time}"), colors.text_muted()));
        }
        content.push(Line::from(author));
        content.push(Line::from(""));
    }

    // Preserve line breaks from the tweet
    for line in post.display_text().lines() {
        content.push(Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(line.to_string(), colors.text()),
        ]));
    }

    let paragraph = Paragraph::new(content)
        .block(main_block(colors, format!(" 📝 {LOADED_HEADING} ")))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_error(
    frame: &mut Frame,
    state: &AppState,
    colors: &ThemeColors,
    message: &str,
    area: Rect,
) {
    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ⚠ ", colors.text_warning()),
            Span::styled(message.to_string(), colors.text_error()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(format!(" {SIGN_IN_LABEL} "), colors.button()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", colors.text_muted()),
            Span::styled("[Enter]", colors.key_hint()),
            Span::styled(" to open ", colors.text_muted()),
            Span::styled(state.config.sign_in_url().to_string(), colors.text_info()),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(main_block(colors, " 🔒 Not signed in ".to_string()))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, state: &AppState, colors: &ThemeColors, area: Rect) {
    // Spinner animation frames
    const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

    let loading_indicator = if state.loading() {
        let frame_idx = (state.current_tick() / 2) as usize % SPINNER.len();
        format!("{} ", SPINNER[frame_idx])
    } else {
        String::new()
    };

    let content = if !state.status.is_empty() {
        vec![
            Span::styled(" ", Style::default()),
            Span::styled(loading_indicator, colors.text_secondary()),
            Span::styled(state.status.as_str(), colors.text_secondary()),
        ]
    } else {
        let mut hints = vec![
            Span::styled(" ", Style::default()),
            Span::styled(loading_indicator, colors.text_secondary()),
        ];
        if state.view.shows_sign_in() {
            hints.push(Span::styled("Enter", colors.key_hint()));
            hints.push(Span::styled(": sign in  ", colors.text_muted()));
        }
        hints.extend([
            Span::styled("?", colors.key_hint()),
            Span::styled(": help  ", colors.text_muted()),
            Span::styled("t", colors.key_hint()),
            Span::styled(": theme  ", colors.text_muted()),
            Span::styled("q", colors.key_hint()),
            Span::styled(": quit", colors.text_muted()),
        ]);
        hints
    };

    let status =
        Paragraph::new(Line::from(content)).style(Style::default().bg(colors.bg_secondary));
    frame.render_widget(status, area);
}

fn render_help_popup(frame: &mut Frame, state: &AppState, colors: &ThemeColors) {
    let popup_area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, popup_area);

    let key_line = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), colors.key_hint()),
            Span::styled(desc, colors.text()),
        ])
    };

    let content = vec![
        Line::from(""),
        key_line("Enter / s", "Sign in (when not signed in)"),
        key_line("t", "Next theme"),
        key_line("Esc", "Clear status"),
        key_line("?", "Toggle this help"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Backend: ", colors.text_muted()),
            Span::styled(state.config.backend_url.clone(), colors.text_info()),
        ]),
        Line::from(vec![
            Span::styled("  Theme:   ", colors.text_muted()),
            Span::styled(state.theme.name(), colors.text_info()),
        ]),
    ];

    let help = Paragraph::new(content)
        .block(
            Block::default()
                .title(" ❓ Help ")
                .title_style(colors.text_primary())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(colors.block_focus())
                .style(Style::default().bg(colors.bg_secondary)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(help, popup_area);
}

const fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_width = (r.width as u32 * percent_x as u32 / 100) as u16;
    let popup_height = (r.height as u32 * percent_y as u32 / 100) as u16;
    Rect {
        x: r.x + (r.width.saturating_sub(popup_width)) / 2,
        y: r.y + (r.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    }
}
