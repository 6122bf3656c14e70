//! # Domain Model
//!
//! A [`Snippet`] is a block of user text plus a title derived from it and two timestamps.
//!
//! ## Title Derivation
//!
//! The title is a one-way projection of the content, recomputed on every save and never
//! edited on its own:
//!
//! 1. Take the first line of the content and trim it.
//! 2. If that is non-empty, it is the title; otherwise the whole (trimmed) content is used.
//! 3. Anything longer than [`TITLE_MAX_CHARS`] characters is cut there and gets a `…`.
//!
//! ```text
//! "Hello\nworld"     -> "Hello"
//! "\n\nbody text"    -> "body text"
//! "aaaa…(60 chars)"  -> "aaaa…(50 chars)…"
//! ```
//!
//! ## Wire Format
//!
//! Snippets serialize with camelCase keys and ISO-8601 timestamps at millisecond
//! precision (`2024-05-01T10:20:30.123Z`). Timestamps are truncated to milliseconds when
//! they are taken, so what is written is exactly what is read back.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

/// Maximum number of characters kept from the source line before the ellipsis.
pub const TITLE_MAX_CHARS: usize = 50;

pub const ELLIPSIS: char = '…';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Snippet {
    /// Builds a new snippet with a fresh id. The caller is responsible for rejecting
    /// empty content before getting here.
    pub fn new(content: &str) -> Self {
        Self::with_id(generate_id(), content)
    }

    pub fn with_id(id: String, content: &str) -> Self {
        let content = content.trim().to_string();
        let now = now();
        Self {
            id,
            title: derive_title(&content),
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the content and re-derives the title. `id` and `created_at` are untouched.
    pub fn set_content(&mut self, content: &str) {
        self.content = content.trim().to_string();
        self.title = derive_title(&self.content);
        self.updated_at = now();
    }

    /// Case-insensitive substring match on title or content.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

/// Derives a snippet title from its content.
pub fn derive_title(content: &str) -> String {
    let first_line = content.split('\n').next().unwrap_or_default().trim();
    if first_line.is_empty() {
        truncate_title(content.trim())
    } else {
        truncate_title(first_line)
    }
}

fn truncate_title(text: &str) -> String {
    if text.chars().count() > TITLE_MAX_CHARS {
        let mut truncated: String = text.chars().take(TITLE_MAX_CHARS).collect();
        truncated.push(ELLIPSIS);
        truncated
    } else {
        text.to_string()
    }
}

/// Generates a snippet id: a millisecond timestamp followed by random bits (UUIDv7),
/// rendered as 32 lowercase hex characters.
///
/// Ids sort by creation time. They are not checked for uniqueness here; see
/// [`crate::store::snippet_store::SnippetStore::create`].
pub fn generate_id() -> String {
    Uuid::now_v7().simple().to_string()
}

/// Current time, truncated to the precision of the persisted format.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

fn serialize_timestamp<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_first_line() {
        assert_eq!(derive_title("Hello\nworld"), "Hello");
    }

    #[test]
    fn title_first_line_is_trimmed() {
        assert_eq!(derive_title("   padded line  \nrest"), "padded line");
    }

    #[test]
    fn title_truncates_long_line() {
        let content = "a".repeat(60);
        let title = derive_title(&content);
        assert_eq!(title, format!("{}…", "a".repeat(50)));
        assert_eq!(title.chars().count(), 51);
    }

    #[test]
    fn title_keeps_exactly_fifty_chars() {
        let content = "b".repeat(50);
        assert_eq!(derive_title(&content), content);
    }

    #[test]
    fn title_falls_back_when_first_line_blank() {
        assert_eq!(derive_title("\n\nbody text"), "body text");
    }

    #[test]
    fn title_counts_chars_not_bytes() {
        let content = "é".repeat(55);
        let title = derive_title(&content);
        assert_eq!(title.chars().count(), 51);
        assert!(title.ends_with('…'));
    }

    #[test]
    fn title_handles_crlf() {
        assert_eq!(derive_title("Windows line\r\nnext"), "Windows line");
    }

    #[test]
    fn new_snippet_trims_content_and_sets_timestamps() {
        let snippet = Snippet::new("  some text \n");
        assert_eq!(snippet.content, "some text");
        assert_eq!(snippet.title, "some text");
        assert_eq!(snippet.created_at, snippet.updated_at);
        assert!(!snippet.id.is_empty());
    }

    #[test]
    fn set_content_rederives_title_and_keeps_identity() {
        let mut snippet = Snippet::new("first");
        let id = snippet.id.clone();
        let created = snippet.created_at;

        snippet.set_content("second line one\nline two");

        assert_eq!(snippet.id, id);
        assert_eq!(snippet.created_at, created);
        assert_eq!(snippet.title, "second line one");
        assert!(snippet.updated_at >= created);
    }

    #[test]
    fn matches_title_or_content_case_insensitively() {
        let snippet = Snippet::new("Greeting\nHello World");
        assert!(snippet.matches("greet"));
        assert!(snippet.matches("world"));
        assert!(!snippet.matches("absent"));
    }

    #[test]
    fn generated_ids_are_distinct_and_hex() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn serializes_with_camel_case_and_millis() {
        let mut snippet = Snippet::with_id("abc".into(), "text");
        snippet.created_at = DateTime::parse_from_rfc3339("2024-05-01T10:20:30.123Z")
            .unwrap()
            .with_timezone(&Utc);
        snippet.updated_at = snippet.created_at;

        let json = serde_json::to_value(&snippet).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["createdAt"], "2024-05-01T10:20:30.123Z");
        assert_eq!(json["updatedAt"], "2024-05-01T10:20:30.123Z");
    }

    #[test]
    fn deserializes_foreign_ids_and_timestamps() {
        let json = r#"{
            "id": "lx3k2ab9q8r7",
            "title": "t",
            "content": "t",
            "createdAt": "2024-01-02T03:04:05.006Z",
            "updatedAt": "2024-01-02T03:04:05.006Z"
        }"#;
        let snippet: Snippet = serde_json::from_str(json).unwrap();
        assert_eq!(snippet.id, "lx3k2ab9q8r7");
        assert_eq!(
            snippet.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            "2024-01-02T03:04:05.006Z"
        );
    }
}
