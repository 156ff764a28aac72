//! Extracting a JSON document from a model reply.

use serde_json::Value;

/// Parses a JSON object or array out of a model reply.
///
/// Tries, in order: the whole reply, the body of a fenced code block (```json ... ```),
/// and the span from the first `{` to the last `}`. Scalars are not accepted.
pub fn parse_json_reply(reply: &str) -> Option<Value> {
    let trimmed = reply.trim();

    if let Some(value) = parse_document(trimmed) {
        return Some(value);
    }
    if let Some(value) = strip_code_fence(trimmed).and_then(parse_document) {
        return Some(value);
    }

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end <= start {
        return None;
    }
    parse_document(&trimmed[start..=end])
}

fn parse_document(text: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => Some(value),
        _ => None,
    }
}

fn strip_code_fence(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let rest = &text[start + 3..];
    // Skip the language tag line.
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    let end = body.find("```")?;
    Some(body[..end].trim())
}
