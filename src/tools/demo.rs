//! The three demonstration tools: `multiply_numbers`, `add_numbers`, and
//! `wikipedia_search` (a fake, hardcoded encyclopedia).
//!
//! The plain functions print a diagnostic line before computing so a run
//! shows exactly when the agent invoked them.
//!
//! ```
//! use react_agent::tools::demo::{add, demo_tools, search_wikipedia};
//!
//! assert_eq!(add(5.0, 12.5), 17.5);
//! assert!(search_wikipedia("llama").contains("camelid"));
//! assert_eq!(demo_tools().unwrap().len(), 3);
//! ```

use std::sync::Arc;

use super::registry::ToolRegistry;
use super::tool::{AgentTool, Tool};
use super::types::AgentToolParameters;
use crate::error::Result;

pub const MULTIPLY_TOOL: &str = "multiply_numbers";
pub const ADD_TOOL: &str = "add_numbers";
pub const WIKIPEDIA_TOOL: &str = "wikipedia_search";

const MULTIPLY_DESCRIPTION: &str = "Multiplies two numbers, a and b. Use this for multiplication tasks.\n\
Args:\n    a (float): The first number.\n    b (float): The second number.";

const ADD_DESCRIPTION: &str = "Adds two numbers, a and b. Use this for addition tasks.\n\
Args:\n    a (float): The first number.\n    b (float): The second number.";

const WIKIPEDIA_DESCRIPTION: &str = "Looks up a query on a FAKE Wikipedia. Use this to find information about people, places, or concepts.\n\
Args:\n    query (str): The search term to look up.";

/// Fake encyclopedia, checked in order; first substring match wins.
const FAKE_WIKIPEDIA: [(&str, &str); 3] = [
    (
        "alan turing",
        "Alan Turing was a British mathematician, computer scientist, logician, cryptanalyst, \
         philosopher, and theoretical biologist. He was highly influential in the development of \
         theoretical computer science.",
    ),
    (
        "llama",
        "A llama is a domesticated South American camelid, widely used as a meat and pack animal \
         by Andean cultures since the Pre-Columbian era.",
    ),
    (
        "react agent",
        "A ReAct Agent combines Reasoning and Acting within large language models. It generates \
         verbal reasoning traces and actions pertaining to a task, allowing for dynamic reasoning, \
         tool use, and information gathering.",
    ),
];

pub fn multiply(a: f64, b: f64) -> f64 {
    println!("--- Calling Multiply Tool with: a={a}, b={b} ---");
    a * b
}

pub fn add(a: f64, b: f64) -> f64 {
    println!("--- Calling Add Tool with: a={a}, b={b} ---");
    a + b
}

/// Case-insensitive lookup against the fake encyclopedia.
pub fn search_wikipedia(query: &str) -> String {
    println!("--- Calling Wikipedia Tool with query: {query} ---");
    let needle = query.to_lowercase();
    FAKE_WIKIPEDIA
        .iter()
        .find(|(key, _)| needle.contains(key))
        .map(|(_, entry)| entry.to_string())
        .unwrap_or_else(|| format!("Couldn't find information about '{query}' on Fake Wikipedia."))
}

fn number_pair() -> AgentToolParameters {
    AgentToolParameters::object()
        .number("a", "The first number.", true)
        .number("b", "The second number.", true)
        .build()
}

pub fn multiply_tool() -> Arc<dyn Tool> {
    Arc::new(AgentTool::from_fn(
        MULTIPLY_TOOL,
        MULTIPLY_DESCRIPTION,
        number_pair(),
        |args| Ok(serde_json::json!(multiply(args.get_f64("a")?, args.get_f64("b")?))),
    ))
}

pub fn add_tool() -> Arc<dyn Tool> {
    Arc::new(AgentTool::from_fn(
        ADD_TOOL,
        ADD_DESCRIPTION,
        number_pair(),
        |args| Ok(serde_json::json!(add(args.get_f64("a")?, args.get_f64("b")?))),
    ))
}

pub fn wikipedia_tool() -> Arc<dyn Tool> {
    Arc::new(AgentTool::from_fn(
        WIKIPEDIA_TOOL,
        WIKIPEDIA_DESCRIPTION,
        AgentToolParameters::object()
            .string("query", "The search term to look up.", true)
            .build(),
        |args| Ok(serde_json::json!(search_wikipedia(args.get_str("query")?))),
    ))
}

/// Registry holding the three demo tools, in the order the agent sees them.
pub fn demo_tools() -> Result<ToolRegistry> {
    ToolRegistry::from_tools([multiply_tool(), add_tool(), wikipedia_tool()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolArguments;
    use serde_json::json;

    #[test]
    fn arithmetic_matches_operators() {
        for (a, b) in [(0.0, 0.0), (5.0, 12.5), (-3.25, 4.0), (1e10, -2e-3)] {
            assert_eq!(add(a, b), a + b);
            assert_eq!(multiply(a, b), a * b);
        }
    }

    #[test]
    fn search_matches_case_insensitively() {
        assert!(search_wikipedia("Who was ALAN TURING?").contains("British mathematician"));
        assert!(search_wikipedia("Llama").contains("camelid"));
        assert!(search_wikipedia("what is a ReAct Agent").contains("Reasoning and Acting"));
    }

    #[test]
    fn search_first_match_wins() {
        let result = search_wikipedia("llama and alan turing");
        assert!(result.contains("British mathematician"));
        assert!(!result.contains("camelid"));
    }

    #[test]
    fn search_miss_echoes_query() {
        let result = search_wikipedia("Anything Else");
        assert_eq!(
            result,
            "Couldn't find information about 'Anything Else' on Fake Wikipedia."
        );
    }

    #[test]
    fn registry_has_expected_names_and_descriptions() {
        let registry = demo_tools().unwrap();
        assert_eq!(registry.names(), vec![MULTIPLY_TOOL, ADD_TOOL, WIKIPEDIA_TOOL]);
        for tool in registry.iter() {
            assert!(!tool.description().is_empty(), "{} has no description", tool.name());
        }
    }

    #[test]
    fn number_tools_declare_a_then_b() {
        let def = add_tool().definition();
        assert_eq!(
            def.parameter_list(),
            vec![
                ("a".to_string(), "number".to_string()),
                ("b".to_string(), "number".to_string()),
            ]
        );
        assert!(def.description.starts_with("Adds two numbers"));
    }

    #[tokio::test]
    async fn tools_execute_with_json_arguments() {
        let result = multiply_tool()
            .execute(&ToolArguments::new(json!({"a": 3, "b": 7})))
            .await
            .unwrap();
        assert_eq!(result, json!(21.0));

        let result = wikipedia_tool()
            .execute(&ToolArguments::new(json!({"query": "llama"})))
            .await
            .unwrap();
        assert!(result.as_str().unwrap().contains("camelid"));
    }

    #[tokio::test]
    async fn tool_rejects_missing_argument() {
        let err = add_tool()
            .execute(&ToolArguments::new(json!({"a": 1})))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Missing number argument: b"));
    }
}
