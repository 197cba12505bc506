//! Tests for the tool system.

use std::sync::Arc;

use react_agent::error::AgentError;
use react_agent::tools::demo::{add, multiply, search_wikipedia};
use react_agent::tools::*;
use react_agent::types::AgentToolCall;
use serde_json::json;

fn echo_tool(name: &str) -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        name,
        "Echo the text back",
        AgentToolParameters::object()
            .string("text", "Text to echo", true)
            .build(),
        |args| async move { Ok::<_, AgentError>(json!({ "echo": args.get_str("text")? })) },
    ))
}

#[test]
fn parameter_builder_constructs_schema() {
    let params = AgentToolParameters::object()
        .string("query", "Search query", true)
        .number("limit", "Max results", false)
        .boolean("verbose", "Enable verbose output", false)
        .build();

    let schema = &params.schema;
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["properties"]["query"]["type"], "string");
    assert_eq!(schema["properties"]["limit"]["type"], "number");
    assert_eq!(schema["required"], json!(["query"]));
}

#[test]
fn empty_parameters() {
    let params = AgentToolParameters::empty();
    assert_eq!(params.schema["type"], "object");
    assert_eq!(params.schema["properties"], json!({}));
}

#[test]
fn registry_rejects_duplicate_names() {
    let mut registry = ToolRegistry::new();
    registry.register(echo_tool("echo")).unwrap();

    let err = registry.register(echo_tool("echo")).unwrap_err();

    assert!(matches!(err, AgentError::InvalidArgument(ref m) if m.contains("already registered")));
    assert_eq!(registry.len(), 1);
}

#[test]
fn registry_definitions_follow_registration_order() {
    let registry = ToolRegistry::from_tools([echo_tool("b"), echo_tool("a")]).unwrap();
    let names: Vec<String> = registry.definitions().into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[tokio::test]
async fn registry_call_returns_tool_output() {
    let registry = ToolRegistry::from_tools([echo_tool("echo")]).unwrap();
    let call = AgentToolCall {
        id: "call-1".into(),
        name: "echo".into(),
        arguments: json!({"text": "hi"}),
    };

    let result = registry.call(&call).await;

    assert_eq!(result.tool_call_id, "call-1");
    assert!(!result.is_error);
    assert_eq!(result.result, json!({"echo": "hi"}));
}

#[tokio::test]
async fn registry_call_reports_failures_as_error_results() {
    let failing: Arc<dyn Tool> = Arc::new(AgentTool::from_fn(
        "broken",
        "Always fails",
        AgentToolParameters::empty(),
        |_| {
            Err(AgentError::ToolExecution {
                tool_name: "broken".into(),
                message: "disk on fire".into(),
            })
        },
    ));
    let registry = ToolRegistry::from_tools([failing]).unwrap();
    let call = AgentToolCall {
        id: "call-2".into(),
        name: "broken".into(),
        arguments: json!({}),
    };

    let result = registry.call(&call).await;

    assert!(result.is_error);
    assert!(result.result["error"].as_str().unwrap().contains("disk on fire"));
}

#[test]
fn demo_functions_behave_like_the_operators() {
    assert_eq!(add(5.0, 12.5), 17.5);
    assert_eq!(multiply(3.0, 7.0), 21.0);
    assert!(search_wikipedia("Alan Turing").contains("British mathematician"));
    assert!(search_wikipedia("llama").contains("camelid"));
    assert!(search_wikipedia("react agent").contains("Reasoning and Acting"));

    let miss = search_wikipedia("anything else");
    assert!(miss.contains("anything else"));
    assert!(miss.contains("Couldn't find information"));
}
