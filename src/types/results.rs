//! Results of agent runs.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AgentToolCall, AgentToolResult, FinishReason, Usage};

/// One model round trip inside an agent run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationStep {
    /// Text the model produced alongside (or instead of) tool calls.
    pub text: String,
    pub tool_calls: Vec<AgentToolCall>,
    pub tool_results: Vec<AgentToolResult>,
    pub usage: Usage,
    pub finish_reason: Option<FinishReason>,
}

/// Final response of a chat turn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentResponse {
    pub text: String,
    pub steps: Vec<GenerationStep>,
    pub usage: Usage,
}

impl AgentResponse {
    /// Names of the tools invoked during this turn, in call order.
    pub fn tools_used(&self) -> Vec<&str> {
        self.steps
            .iter()
            .flat_map(|s| s.tool_calls.iter().map(|c| c.name.as_str()))
            .collect()
    }
}

impl fmt::Display for AgentResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
