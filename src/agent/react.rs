//! ReAct agent: reason, call tools, observe, repeat until the model answers.

use std::io::Write;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::conversation::Conversation;
use super::delegate::{AgentDelegate, PromptInspection};
use super::prompt::{render_tool_descriptions, REACT_SYSTEM_HEADER};
use crate::error::{AgentError, Result};
use crate::provider::format::tool_result_to_string;
use crate::provider::{ModelProvider, ProviderRequest};
use crate::tools::ToolRegistry;
use crate::types::*;

/// Default bound on model round trips per chat turn.
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Tool-using agent backed by a [`ModelProvider`] with native function calling.
pub struct ReActAgent {
    provider: Box<dyn ModelProvider>,
    tools: ToolRegistry,
    settings: GenerationSettings,
    system_header: String,
    verbose: bool,
    trace_out: Box<dyn Write + Send>,
    max_iterations: usize,
    conversation: Conversation,
}

impl ReActAgent {
    /// Create an agent with no tools.
    pub fn new(provider: Box<dyn ModelProvider>) -> Self {
        Self {
            provider,
            tools: ToolRegistry::new(),
            settings: GenerationSettings::default(),
            system_header: REACT_SYSTEM_HEADER.to_string(),
            verbose: false,
            trace_out: Box::new(std::io::stdout()),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            conversation: Conversation::new(),
        }
    }

    /// Create an agent over a tool registry and a model.
    pub fn from_tools(tools: ToolRegistry, provider: Box<dyn ModelProvider>, verbose: bool) -> Self {
        Self::new(provider).with_tools(tools).with_verbose(verbose)
    }

    pub fn with_tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    /// Print Thought/Action/Observation steps to stdout.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Send the verbose trace somewhere other than stdout.
    pub fn with_trace_writer(mut self, out: impl Write + Send + 'static) -> Self {
        self.trace_out = Box::new(out);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Replace the instructions placed before the tool block.
    pub fn with_system_header(mut self, header: impl Into<String>) -> Self {
        self.system_header = header.into();
        self
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Forget previous turns.
    pub fn reset(&mut self) {
        self.conversation.clear();
    }

    fn prompt(&self) -> PromptInspection {
        PromptInspection {
            system_header: self.system_header.clone(),
            tool_descriptions: render_tool_descriptions(&self.tools.definitions()),
        }
    }

    fn trace(&mut self, line: String) {
        if !self.verbose {
            debug!("{line}");
            return;
        }
        if let Err(e) = writeln!(self.trace_out, "{line}").and_then(|()| self.trace_out.flush()) {
            warn!(error = %e, "failed to write agent trace");
        }
    }
}

#[async_trait]
impl AgentDelegate for ReActAgent {
    async fn chat(&mut self, message: &str) -> Result<AgentResponse> {
        let user = ModelMessage::user(message);

        let mut messages = Vec::with_capacity(self.conversation.len() + 2);
        messages.push(ModelMessage::system(self.prompt().system_prompt()));
        messages.extend(self.conversation.messages().iter().cloned());
        messages.push(user.clone());

        let tool_defs = if self.tools.is_empty() {
            None
        } else {
            Some(self.tools.definitions())
        };

        let mut steps = Vec::new();
        let mut total_usage = Usage::default();

        self.trace(format!("> Running step with input: {message}"));

        for iteration in 0..self.max_iterations {
            let request = ProviderRequest {
                messages: messages.clone(),
                settings: self.settings.clone(),
                tools: tool_defs.clone(),
            };

            debug!(
                iteration,
                provider = self.provider.provider_name(),
                model = self.provider.model_id(),
                "react: calling provider"
            );
            let response = self.provider.generate_text(&request).await?;
            total_usage.merge(&response.usage);

            let mut step = GenerationStep {
                text: response.text.clone(),
                tool_calls: response.tool_calls.clone(),
                tool_results: Vec::new(),
                usage: response.usage.clone(),
                finish_reason: response.finish_reason,
            };

            if response.tool_calls.is_empty() {
                if response.text.trim().is_empty() {
                    return Err(AgentError::InvalidState(
                        "model returned neither an answer nor a tool call".into(),
                    ));
                }
                self.trace(format!("Answer: {}", response.text));
                steps.push(step);
                self.conversation
                    .add_exchange(user, ModelMessage::assistant(response.text.clone()));
                return Ok(AgentResponse {
                    text: response.text,
                    steps,
                    usage: total_usage,
                });
            }

            if !response.text.trim().is_empty() {
                self.trace(format!("Thought: {}", response.text.trim()));
            }
            messages.push(ModelMessage::assistant_tool_calls(&response.text, &response.tool_calls));

            for call in &response.tool_calls {
                self.trace(format!("Action: {}", call.name));
                self.trace(format!("Action Input: {}", call.arguments));

                let result = self.tools.call(call).await;
                self.trace(format!("Observation: {}", tool_result_to_string(&result.result)));

                messages.push(ModelMessage::tool_result(result.clone()));
                step.tool_results.push(result);
            }

            steps.push(step);
        }

        Err(AgentError::MaxIterations(self.max_iterations))
    }

    fn inspect_prompt(&self) -> Result<PromptInspection> {
        Ok(self.prompt())
    }
}
