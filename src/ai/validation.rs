//! LLM Response Validation
//!
//! JSON extraction from raw completion text plus the shallow shape check
//! applied to outline responses.
//!
//! Validation is intentionally shallow: the outline check asserts only
//! that the top-level `h2` field is present and is an array. Nested
//! content is passed through as-is; the Markdown serializer is total on
//! missing sequences, so deeper enforcement buys nothing here.

use serde_json::Value;
use tracing::{debug, warn};

use crate::types::{Error, Result};

/// Extract and parse JSON from an LLM response.
///
/// Handles the common failure modes of "JSON only" instructions:
/// markdown code fences around the object, a BOM, and explanatory text
/// before or after the object.
pub fn extract_json_from_response(service: &str, content: &str) -> Result<Value> {
    let cleaned = strip_code_fences(content.trim())
        .trim_start_matches('\u{feff}')
        .trim()
        .to_string();

    if let Ok(value) = serde_json::from_str::<Value>(&cleaned) {
        return Ok(value);
    }

    debug!("Direct JSON parse failed, extracting from mixed content");

    if let Some(extracted) = extract_json_from_mixed(&cleaned)
        && let Ok(value) = serde_json::from_str::<Value>(&extracted)
    {
        warn!("JSON extracted from mixed content");
        return Ok(value);
    }

    Err(Error::schema(
        service,
        format!(
            "response is not valid JSON. Content preview: {}...",
            cleaned.chars().take(200).collect::<String>()
        ),
    ))
}

/// Shallow outline shape check: the response must be a JSON object whose
/// `h2` field is an array. Anything deeper flows through untouched.
pub fn ensure_outline_shape(service: &str, value: &Value) -> Result<()> {
    if !value.is_object() {
        return Err(Error::schema(service, "outline response is not an object"));
    }
    match value.get("h2") {
        Some(Value::Array(_)) => Ok(()),
        Some(other) => Err(Error::schema(
            service,
            format!("'h2' must be an array, got {}", type_name(other)),
        )),
        None => Err(Error::schema(service, "missing required 'h2' field")),
    }
}

/// Strip a surrounding markdown code fence (```json ... ``` or ``` ... ```).
fn strip_code_fences(s: &str) -> String {
    let mut result = s.to_string();

    if result.starts_with("```")
        && let Some(first_newline) = result.find('\n')
    {
        result = result[first_newline + 1..].to_string();
    }

    if result.ends_with("```") {
        result = result[..result.len() - 3].trim_end().to_string();
    }

    result
}

/// Slice out the outermost object from content with surrounding prose.
fn extract_json_from_mixed(s: &str) -> Option<String> {
    let start = s.find('{')?;
    let end = s.rfind('}')?;
    (end > start).then(|| s[start..=end].to_string())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Tests
// =============================================================================
