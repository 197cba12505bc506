//! Typed access to tool call arguments.

use crate::error::AgentError;

/// Wrapper around tool call arguments providing typed extraction.
#[derive(Debug, Clone)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    /// Get a string argument by key.
    pub fn get_str(&self, key: &str) -> Result<&str, AgentError> {
        self.value
            .get(key)
            .and_then(|v| v.as_str())
            .ok_or_else(|| AgentError::InvalidArgument(format!("Missing string argument: {key}")))
    }

    /// Get a numeric argument as `f64`.
    ///
    /// Models occasionally send numbers as strings (`"12.5"`); those are accepted.
    pub fn get_f64(&self, key: &str) -> Result<f64, AgentError> {
        let value = self.value.get(key);
        value
            .and_then(|v| v.as_f64())
            .or_else(|| value.and_then(|v| v.as_str()).and_then(|s| s.trim().parse().ok()))
            .ok_or_else(|| AgentError::InvalidArgument(format!("Missing number argument: {key}")))
    }

    /// Deserialize the entire arguments into a typed struct.
    pub fn deserialize<T: serde::de::DeserializeOwned>(&self) -> Result<T, AgentError> {
        serde_json::from_value(self.value.clone()).map_err(|e| {
            AgentError::InvalidArgument(format!("Failed to deserialize arguments: {e}"))
        })
    }
}
