//! Provider formatting helpers.

use serde_json::Value;

/// Convert a tool result JSON value into a string payload.
pub(crate) fn tool_result_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(v) => v.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Gemini requires `functionResponse.response` to be an object.
pub(crate) fn tool_result_to_object(value: &Value) -> Value {
    match value {
        Value::Object(_) => value.clone(),
        other => serde_json::json!({ "result": other }),
    }
}
