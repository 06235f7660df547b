//! Core types for the clipbox service

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::{detect_content, format_json};

/// Content-type tag attached to a stored clipboard item.
///
/// Serialized as a lowercase string (`"json"`, `"html"`, ...). The tag is a
/// presentation hint for syntax highlighting, not a parse guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Json,
    Html,
    Xml,
    Sql,
    Javascript,
    Typescript,
    Python,
    Css,
    Yaml,
    Markdown,
    Shell,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Html => "html",
            Self::Xml => "xml",
            Self::Sql => "sql",
            Self::Javascript => "javascript",
            Self::Typescript => "typescript",
            Self::Python => "python",
            Self::Css => "css",
            Self::Yaml => "yaml",
            Self::Markdown => "markdown",
            Self::Shell => "shell",
        }
    }

    /// Highlighter language hint. Equal to the kind name except for plain
    /// text (no hint) and shell scripts (highlighted as bash).
    pub fn language(&self) -> Option<&'static str> {
        match self {
            Self::Text => None,
            Self::Shell => Some("bash"),
            other => Some(other.as_str()),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single stored clipboard record.
///
/// Zero or one of these exists in storage at any time, under one well-known
/// key. Clearing stores a record with empty content rather than deleting, so
/// "no item" and "empty item" are the same observable state to readers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipboardItem {
    /// Raw user-supplied payload (pretty-printed first when valid JSON)
    pub content: String,
    /// Detected content type
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// Highlighter hint; `null` for plain text
    pub language: Option<String>,
    /// Time of last write, epoch milliseconds
    pub timestamp: i64,
}

impl ClipboardItem {
    /// Build a record from raw content: classify it, pretty-print it when it
    /// is valid JSON, and stamp it with the current time.
    pub fn from_content(content: String) -> Self {
        let detection = detect_content(&content);
        let content = if detection.is_valid_json {
            format_json(&content)
        } else {
            content
        };
        Self {
            content,
            kind: detection.kind,
            language: detection.language.map(str::to_string),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// The record synthesized when storage holds nothing (or the read path
    /// is unavailable). Absence of data is not a failure.
    pub fn empty() -> Self {
        Self {
            content: String::new(),
            kind: ContentKind::Text,
            language: None,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ContentKind::Javascript).unwrap(),
            "\"javascript\""
        );
        assert_eq!(
            serde_json::from_str::<ContentKind>("\"yaml\"").unwrap(),
            ContentKind::Yaml
        );
    }

    #[test]
    fn language_hint_matches_kind() {
        assert_eq!(ContentKind::Json.language(), Some("json"));
        assert_eq!(ContentKind::Shell.language(), Some("bash"));
        assert_eq!(ContentKind::Text.language(), None);
    }

    #[test]
    fn from_content_pretty_prints_json() {
        let item = ClipboardItem::from_content("{\"a\":1}".to_string());
        assert_eq!(item.kind, ContentKind::Json);
        assert_eq!(item.content, "{\n  \"a\": 1\n}");
        assert_eq!(item.language.as_deref(), Some("json"));
    }

    #[test]
    fn from_content_leaves_non_json_alone() {
        let item = ClipboardItem::from_content("plain words".to_string());
        assert_eq!(item.kind, ContentKind::Text);
        assert_eq!(item.content, "plain words");
        assert!(item.language.is_none());
    }

    #[test]
    fn empty_record_is_plain_text() {
        let item = ClipboardItem::empty();
        assert_eq!(item.content, "");
        assert_eq!(item.kind, ContentKind::Text);
        assert!(item.language.is_none());
    }

    #[test]
    fn wire_format_uses_type_field() {
        let item = ClipboardItem {
            content: "x".to_string(),
            kind: ContentKind::Text,
            language: None,
            timestamp: 1234,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "text");
        assert!(json["language"].is_null());
        assert_eq!(json["timestamp"], 1234);
    }
}
