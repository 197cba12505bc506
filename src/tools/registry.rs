//! Registry of the tools an agent may call.

use std::sync::Arc;

use tracing::warn;

use super::arguments::ToolArguments;
use super::tool::Tool;
use super::validation::validate_arguments;
use crate::error::{AgentError, Result};
use crate::provider::ToolDefinition;
use crate::types::{AgentToolCall, AgentToolResult};

/// Ordered set of tools with unique names.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of tools, rejecting duplicate names.
    pub fn from_tools(tools: impl IntoIterator<Item = Arc<dyn Tool>>) -> Result<Self> {
        let mut registry = Self::new();
        for tool in tools {
            registry.register(tool)?;
        }
        Ok(registry)
    }

    /// Add a tool. Names must be unique within the registry.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<()> {
        if self.get(tool.name()).is_some() {
            return Err(AgentError::InvalidArgument(format!(
                "tool '{}' is already registered",
                tool.name()
            )));
        }
        if tool.description().trim().is_empty() {
            warn!(tool = tool.name(), "registering tool without a description");
        }
        self.tools.push(tool);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Tool>> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Descriptors for every registered tool, in registration order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Execute a model-requested call.
    ///
    /// Unknown tools, invalid arguments, and tool failures come back as an
    /// error result so the model can observe them and recover.
    pub async fn call(&self, call: &AgentToolCall) -> AgentToolResult {
        let outcome = match self.get(&call.name) {
            Some(tool) => match validate_arguments(&call.arguments, &tool.parameters().schema) {
                Ok(()) => tool.execute(&ToolArguments::new(call.arguments.clone())).await,
                Err(e) => Err(e),
            },
            None => Err(AgentError::ToolExecution {
                tool_name: call.name.clone(),
                message: format!("Tool '{}' not found", call.name),
            }),
        };

        match outcome {
            Ok(result) => AgentToolResult {
                tool_call_id: call.id.clone(),
                result,
                is_error: false,
            },
            Err(e) => {
                warn!(tool = call.name, error = %e, "Tool execution failed");
                AgentToolResult {
                    tool_call_id: call.id.clone(),
                    result: serde_json::json!({ "error": e.to_string() }),
                    is_error: true,
                }
            }
        }
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
