//! The boundary between the demo driver and whatever runs the agent loop.

use async_trait::async_trait;

use crate::error::{AgentError, Result};
use crate::types::AgentResponse;

/// Snapshot of the prompt an agent sends to its model.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptInspection {
    /// Fixed instructions that precede the tool block.
    pub system_header: String,
    /// Rendered description of every tool available to the model.
    pub tool_descriptions: String,
}

impl PromptInspection {
    /// The system prompt exactly as sent.
    pub fn system_prompt(&self) -> String {
        format!("{}\n\n## Available tools\n{}", self.system_header, self.tool_descriptions)
    }
}

/// An agent that answers a query, calling tools as it sees fit.
#[async_trait]
pub trait AgentDelegate: Send {
    /// Run one chat turn to completion.
    async fn chat(&mut self, message: &str) -> Result<AgentResponse>;

    /// Expose the prompt-construction state for debugging.
    ///
    /// Delegates that cannot provide it keep the default, which reports
    /// [`AgentError::UnsupportedOperation`].
    fn inspect_prompt(&self) -> Result<PromptInspection> {
        Err(AgentError::UnsupportedOperation(
            "this agent does not expose its prompt".into(),
        ))
    }
}
