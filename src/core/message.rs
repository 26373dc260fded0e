//! Helpers for chat payload content extraction.

use serde_json::Value;

/// Fields that carry the response text in concierge backend payloads, in lookup order.
const TEXT_FIELDS: &[&str] = &["content", "response", "message"];

/// Extract text content from a chat message payload.
/// Handles string content, array-of-blocks content, and `response`/`message` fields.
pub fn extract_content(msg: &Value) -> Option<String> {
    for field in TEXT_FIELDS {
        let Some(content) = msg.get(*field) else {
            continue;
        };
        if let Some(s) = content.as_str() {
            return Some(s.to_string());
        }
        if let Some(arr) = content.as_array() {
            for block in arr {
                if let Some(text) = block.get("text").and_then(|t| t.as_str()) {
                    return Some(text.to_string());
                }
            }
        }
    }
    None
}
