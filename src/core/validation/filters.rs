//! Reusable payload filters
//!
//! These filters transform field values before deserialization and validation

use serde_json::Value;

/// Filter: trim whitespace from a string
pub fn trim() -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    |_: &str, value: Value| match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        other => other,
    }
}

/// Apply a filter to every top-level field of a JSON object.
///
/// Non-object payloads are returned unchanged.
pub fn apply_to_fields<F>(payload: Value, filter: F) -> Value
where
    F: Fn(&str, Value) -> Value,
{
    match payload {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| {
                    let value = filter(&key, value);
                    (key, value)
                })
                .collect(),
        ),
        other => other,
    }
}

/// Trim every top-level string field of a payload
pub fn trim_strings(payload: Value) -> Value {
    apply_to_fields(payload, trim())
}
