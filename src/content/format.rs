//! JSON pretty-printing

use serde_json::Value;

/// Reformat `content` with 2-space indentation if it parses as JSON,
/// otherwise return it unchanged. Key order is preserved as parsed, not
/// sorted. Never fails: malformed input is echoed back.
pub fn format_json(content: &str) -> String {
    match serde_json::from_str::<Value>(content) {
        Ok(parsed) => serde_json::to_string_pretty(&parsed).unwrap_or_else(|_| content.to_string()),
        Err(_) => content.to_string(),
    }
}
