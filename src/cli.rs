//! Non-interactive commands

use anyhow::{Result, anyhow};

use crate::api::PostSource;
use crate::models::Post;

/// Fetch the latest post and lay it out for plain terminal output.
///
/// On failure the error carries the same message the TUI shows.
pub async fn latest_report<S: PostSource>(source: &S, width: usize) -> Result<String> {
    match source.latest_post().await {
        Ok(post) => Ok(format_post(&post, width)),
        Err(e) => {
            tracing::warn!("Latest post fetch failed: {e}");
            Err(anyhow!(e.user_message()))
        }
    }
}

/// Heading, optional author line, rule and wrapped text
pub fn format_post(post: &Post, width: usize) -> String {
    let mut out = String::from("🐦 Your Latest Tweet\n");
    if let Some(handle) = post.author_handle() {
        let time = post.relative_time().unwrap_or_default();
        out.push_str(format!("@{} {}", handle, time).trim_end());
        out.push('\n');
    }
    out.push_str(&"─".repeat(width.min(80)));
    out.push('\n');
    out.push_str(&textwrap::fill(&post.display_text(), width));
    out.push('\n');
    out
}
