//! Decoding of chat-completion replies whose message content is itself a
//! JSON document holding the fortune triple.

use crate::domain::model::FortuneText;
use crate::utils::error::RemoteError;
use serde_json::{Map, Value};

pub const DEFAULT_FORTUNE: &str = "A small shift today opens a quiet door tomorrow.";
pub const DEFAULT_SUGGESTION: &str = "Take one slow breath.";
pub const DEFAULT_LUCKY: &str = "7";

/// Parses a raw response body: outer JSON, then `choices[0].message.content`,
/// then the embedded fortune object.
pub fn decode_completion(body: &str) -> Result<FortuneText, RemoteError> {
    let outer: Value = serde_json::from_str(body).map_err(RemoteError::MalformedResponse)?;

    let content = outer
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .ok_or(RemoteError::MissingContent)?;

    decode_fortune_content(content)
}

/// Parses the message content. Missing or blank keys get the defaults.
pub fn decode_fortune_content(content: &str) -> Result<FortuneText, RemoteError> {
    let inner: Map<String, Value> =
        serde_json::from_str(strip_code_fence(content)).map_err(RemoteError::MalformedContent)?;

    Ok(FortuneText {
        fortune: field_or(&inner, "fortune", DEFAULT_FORTUNE),
        suggestion: field_or(&inner, "suggestion", DEFAULT_SUGGESTION),
        lucky: field_or(&inner, "lucky", DEFAULT_LUCKY),
    })
}

// 模型常把 JSON 包在 ```json 區塊裡
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn field_or(object: &Map<String, Value>, key: &str, default: &str) -> String {
    let text = match object.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };

    if text.is_empty() {
        default.to_string()
    } else {
        text
    }
}
