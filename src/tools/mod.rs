//! Tool system for function calling.

pub mod arguments;
pub mod demo;
pub mod registry;
pub mod tool;
pub mod types;
pub mod validation;

pub use crate::provider::ToolDefinition;
pub use arguments::ToolArguments;
pub use registry::ToolRegistry;
pub use tool::{AgentTool, Tool};
pub use types::AgentToolParameters;
