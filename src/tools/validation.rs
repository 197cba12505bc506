//! Check tool call arguments against the tool's JSON Schema before execution.

use serde_json::Value;

use crate::error::AgentError;

/// Validate arguments against an object schema.
///
/// Checks the top-level shape, presence of required fields, and property
/// types. Numeric strings satisfy `"number"` since models emit them often
/// enough and [`ToolArguments::get_f64`](super::ToolArguments::get_f64)
/// accepts them.
pub fn validate_arguments(args: &Value, schema: &Value) -> Result<(), AgentError> {
    let invalid = |msg: String| Err(AgentError::InvalidArgument(msg));

    let obj = match args.as_object() {
        Some(obj) => obj,
        None if schema.get("type").and_then(Value::as_str) == Some("object") => {
            return invalid(format!("expected object arguments, got {}", type_name(args)));
        }
        None => return Ok(()),
    };

    let required = schema
        .get("required")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str);
    for name in required {
        if !obj.contains_key(name) {
            return invalid(format!("missing required field '{name}'"));
        }
    }

    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Ok(());
    };
    for (key, value) in obj {
        let expected = properties
            .get(key)
            .and_then(|p| p.get("type"))
            .and_then(Value::as_str);
        if let Some(expected) = expected {
            if !matches_type(value, expected) {
                return invalid(format!(
                    "field '{key}' expected type '{expected}', got {}",
                    type_name(value)
                ));
            }
        }
    }

    Ok(())
}

fn matches_type(value: &Value, expected: &str) -> bool {
    match expected {
        "string" => value.is_string(),
        "number" => {
            value.is_number()
                || value
                    .as_str()
                    .is_some_and(|s| s.trim().parse::<f64>().is_ok())
        }
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        _ => true,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
