//! Post/Tweet model as served by the cross-poster backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Twitter v1.1 `created_at` format, e.g. `Wed Oct 10 20:19:24 +0000 2018`
const TWITTER_TIME_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// The user's latest post
///
/// Only the text is required. The extras are shown when present and
/// readable, and dropped otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPost")]
pub struct Post {
    /// Display text (may contain HTML entities as sent by Twitter)
    pub full_text: String,
    /// Network-specific ID
    pub id_str: Option<String>,
    /// When the post was created
    pub created_at: Option<DateTime<Utc>>,
    /// Author
    pub user: Option<Author>,
}

/// Post author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Handle without the leading `@`
    #[serde(default)]
    pub screen_name: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
}

/// Body as it arrives, before the extras are checked
#[derive(Deserialize)]
struct RawPost {
    #[serde(default)]
    full_text: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    id_str: Option<Value>,
    #[serde(default)]
    created_at: Option<Value>,
    #[serde(default)]
    user: Option<Value>,
}

impl TryFrom<RawPost> for Post {
    type Error = String;

    fn try_from(raw: RawPost) -> Result<Self, Self::Error> {
        let full_text = raw
            .full_text
            .or(raw.text)
            .ok_or_else(|| "missing field `full_text`".to_string())?;

        Ok(Self {
            full_text,
            id_str: raw.id_str.and_then(id_from),
            created_at: raw.created_at.and_then(created_at_from),
            user: raw.user.and_then(author_from),
        })
    }
}

impl Post {
    /// Create a post holding only text
    pub fn new(full_text: impl Into<String>) -> Self {
        Self {
            full_text: full_text.into(),
            id_str: None,
            created_at: None,
            user: None,
        }
    }

    /// Text with HTML entities decoded, ready for display
    pub fn display_text(&self) -> String {
        html_escape::decode_html_entities(&self.full_text).into_owned()
    }

    /// Author handle, if the backend sent one
    pub fn author_handle(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.screen_name.as_deref())
    }

    /// Get relative time string (e.g., "5m", "2h", "3d")
    pub fn relative_time(&self) -> Option<String> {
        let created_at = self.created_at?;
        let duration = Utc::now().signed_duration_since(created_at);

        let label = if duration.num_seconds() < 60 {
            format!("{}s", duration.num_seconds().max(0))
        } else if duration.num_minutes() < 60 {
            format!("{}m", duration.num_minutes())
        } else if duration.num_hours() < 24 {
            format!("{}h", duration.num_hours())
        } else if duration.num_days() < 7 {
            format!("{}d", duration.num_days())
        } else {
            created_at.format("%b %d").to_string()
        };
        Some(label)
    }
}

fn id_from(value: Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// Twitter format, RFC 3339, or Unix seconds
fn created_at_from(value: Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(raw) => parse_created_at(&raw),
        Value::Number(secs) => secs.as_i64().and_then(|s| DateTime::from_timestamp(s, 0)),
        other => {
            tracing::debug!("Ignoring created_at {other}");
            None
        }
    }
}

fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(raw, TWITTER_TIME_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| tracing::debug!("Ignoring created_at {raw:?}: {e}"))
        .ok()
}

/// v1.1 `screen_name` or v2 `username`
fn author_from(value: Value) -> Option<Author> {
    let Value::Object(map) = value else {
        return None;
    };
    let field = |key: &str| map.get(key).and_then(Value::as_str).map(String::from);

    let author = Author {
        screen_name: field("screen_name").or_else(|| field("username")),
        name: field("name"),
    };
    (author.screen_name.is_some() || author.name.is_some()).then_some(author)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_minimal_body() {
        let post: Post = serde_json::from_str(r#"{"full_text": "hello"}"#).unwrap();
        assert_eq!(post.full_text, "hello");
        assert!(post.user.is_none());
        assert!(post.relative_time().is_none());
    }

    #[test]
    fn test_text_alias() {
        let post: Post = serde_json::from_str(r#"{"text": "short form"}"#).unwrap();
        assert_eq!(post.full_text, "short form");
    }

    #[test]
    fn test_missing_text_is_an_error() {
        assert!(serde_json::from_str::<Post>(r#"{"id_str": "1"}"#).is_err());
    }

    #[test]
    fn test_twitter_tweet_shape() {
        let body = r#"{
            "id_str": "1050118621198921728",
            "created_at": "Wed Oct 10 20:19:24 +0000 2018",
            "full_text": "Fish &amp; chips",
            "user": {"screen_name": "jack", "name": "Jack"},
            "retweet_count": 3
        }"#;
        let post: Post = serde_json::from_str(body).unwrap();
        assert_eq!(post.author_handle(), Some("jack"));
        assert_eq!(post.display_text(), "Fish & chips");
        let created = post.created_at.unwrap();
        assert_eq!(created.year(), 2018);
        assert_eq!(created.month(), 10);
        assert_eq!(post.relative_time().as_deref(), Some("Oct 10"));
    }

    #[test]
    fn test_both_text_fields_prefers_full_text() {
        let post: Post =
            serde_json::from_str(r#"{"full_text": "long form", "text": "long…"}"#).unwrap();
        assert_eq!(post.full_text, "long form");
    }

    #[test]
    fn test_v2_author_shape() {
        let body = r#"{"full_text": "hello", "user": {"username": "jack", "id": 12}}"#;
        let post: Post = serde_json::from_str(body).unwrap();
        assert_eq!(post.author_handle(), Some("jack"));

        let odd = r#"{"full_text": "hello", "user": "jack"}"#;
        let post: Post = serde_json::from_str(odd).unwrap();
        assert!(post.user.is_none());
    }

    #[test]
    fn test_non_string_extras() {
        let body = r#"{"full_text": "hello", "created_at": 1700000000, "id_str": 5}"#;
        let post: Post = serde_json::from_str(body).unwrap();
        assert_eq!(post.id_str.as_deref(), Some("5"));
        assert_eq!(post.created_at.map(|t| t.timestamp()), Some(1_700_000_000));

        let body = r#"{"full_text": "hello", "created_at": {"when": "now"}, "id_str": [1]}"#;
        let post: Post = serde_json::from_str(body).unwrap();
        assert!(post.id_str.is_none());
        assert!(post.created_at.is_none());
    }

    #[test]
    fn test_serialized_post_reads_back() {
        let body = r#"{"full_text": "hi", "created_at": "Wed Oct 10 20:19:24 +0000 2018", "user": {"screen_name": "jack"}}"#;
        let post: Post = serde_json::from_str(body).unwrap();
        let back: Post = serde_json::from_str(&serde_json::to_string(&post).unwrap()).unwrap();
        assert_eq!(back, post);
    }

    #[test]
    fn test_bad_timestamp_is_dropped() {
        let post: Post =
            serde_json::from_str(r#"{"full_text": "x", "created_at": "yesterday"}"#).unwrap();
        assert!(post.created_at.is_none());
    }
}
