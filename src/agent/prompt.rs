//! System prompt for the ReAct agent.

use crate::provider::ToolDefinition;

/// Instructions placed before the tool block of every request.
pub const REACT_SYSTEM_HEADER: &str = "\
You are designed to help with a variety of tasks, from answering questions to providing \
summaries to other types of analyses.

## Tools
You have access to a set of tools. You are responsible for using them in whatever sequence \
you deem appropriate to complete the task at hand. This may require breaking the task into \
subtasks and using a different tool for each one.

## Approach
Work in a loop of Thought, Action, and Observation:
- Thought: state briefly what you need to find out next.
- Action: call one tool with arguments that match its schema.
- Observation: read the tool result before deciding the next step.
Never compute or recall an answer yourself when a tool can provide it.
When you have enough information, reply with the final answer only, in the same language \
as the question.";

/// Render tool descriptors the way they appear in the system prompt.
///
/// ```text
/// > Tool Name: add_numbers
/// Tool Description: Adds two numbers, a and b. ...
/// Tool Args: {"type":"object",...}
/// ```
pub fn render_tool_descriptions(tools: &[ToolDefinition]) -> String {
    tools
        .iter()
        .map(|t| {
            format!(
                "> Tool Name: {}\nTool Description: {}\nTool Args: {}\n",
                t.name, t.description, t.parameters
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
