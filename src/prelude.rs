//! Convenience re-exports for common use.

pub use crate::agent::{AgentDelegate, PromptInspection, ReActAgent};
pub use crate::config::AgentConfig;
pub use crate::error::{AgentError, Result};
pub use crate::models::GoogleModel;
pub use crate::provider::{ModelProvider, ToolDefinition};
pub use crate::tools::{AgentTool, AgentToolParameters, Tool, ToolArguments, ToolRegistry};
pub use crate::types::{AgentResponse, FinishReason, GenerationSettings, ModelMessage, Role, Usage};
