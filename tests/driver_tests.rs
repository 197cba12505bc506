//! End-to-end demo run against a mock Gemini endpoint.

use react_agent::driver::{launch_with_lookup, QUESTION};
use react_agent::error::AgentError;
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/models/gemini-2.0-flash-lite:generateContent";

async fn mount_two_step_conversation(server: &MockServer) {
    // First turn: the model asks for both tools.
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_string_contains(QUESTION))
        .and(body_partial_json(json!({"generationConfig": {"temperature": 0.1}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [
                    {"functionCall": {"name": "wikipedia_search", "args": {"query": "Alan Turing"}}},
                    {"functionCall": {"name": "add_numbers", "args": {"a": 5, "b": 12.5}}}
                ]},
                "finishReason": "STOP"
            }]
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(server)
        .await;

    // Second turn: observations are present, the model answers.
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_string_contains("functionResponse"))
        .and(body_string_contains("British mathematician"))
        .and(body_string_contains("17.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [
                    {"text": "Alan Turing was a British mathematician. 5 added to 12.5 is 17.5."}
                ]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn demo_run_prints_answer_and_prompt() {
    let server = MockServer::start().await;
    mount_two_step_conversation(&server).await;
    let uri = server.uri();

    let mut out = Vec::new();
    launch_with_lookup(
        |key| match key {
            "GOOGLE_API_KEY" => Some("test-key".to_string()),
            "GOOGLE_BASE_URL" => Some(uri.clone()),
            _ => None,
        },
        &mut out,
    )
    .await
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("--- Starting Agent ---"));
    assert!(text.contains(
        "--- Final Answer ---\nAlan Turing was a British mathematician. 5 added to 12.5 is 17.5."
    ));
    assert!(text.contains("--- Agent Finished ---"));
    assert!(text.contains("--- System Prompt ---"));
    assert!(text.contains("--- Generated Tool Description (Part of Prompt) ---"));
    for name in ["multiply_numbers", "add_numbers", "wikipedia_search"] {
        assert!(text.contains(&format!("> Tool Name: {name}")), "missing {name}");
    }
}

#[tokio::test]
async fn server_failure_is_reported_and_run_completes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;
    let uri = server.uri();

    let mut out = Vec::new();
    launch_with_lookup(
        |key| match key {
            "GOOGLE_API_KEY" => Some("test-key".to_string()),
            "GOOGLE_BASE_URL" => Some(uri.clone()),
            _ => None,
        },
        &mut out,
    )
    .await
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("--- Agent Error ---\nAPI error (status 500): internal"));
    assert!(text.contains("--- Agent Finished ---"));
    assert!(text.contains("--- System Prompt ---"));
}

#[tokio::test]
async fn blocked_reply_is_reported_as_error_not_blank_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"candidates": [{"finishReason": "SAFETY"}]})),
        )
        .mount(&server)
        .await;
    let uri = server.uri();

    let mut out = Vec::new();
    launch_with_lookup(
        |key| match key {
            "GOOGLE_API_KEY" => Some("test-key".to_string()),
            "GOOGLE_BASE_URL" => Some(uri.clone()),
            _ => None,
        },
        &mut out,
    )
    .await
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("--- Final Answer ---"));
    assert!(text.contains("--- Agent Error ---"));
    assert!(text.contains("finish reason: SAFETY"));
}

#[tokio::test]
async fn network_failure_does_not_print_the_api_key() {
    let key = "SUPER-SECRET-KEY";

    let mut out = Vec::new();
    launch_with_lookup(
        |name| match name {
            "GOOGLE_API_KEY" => Some(key.to_string()),
            // Nothing listens on port 1.
            "GOOGLE_BASE_URL" => Some("http://127.0.0.1:1".to_string()),
            _ => None,
        },
        &mut out,
    )
    .await
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("--- Agent Error ---\nNetwork error"), "{text}");
    assert!(!text.contains(key), "{text}");
}

#[tokio::test]
async fn missing_key_fails_before_contacting_the_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let uri = server.uri();

    let mut out = Vec::new();
    let err = launch_with_lookup(
        |key| match key {
            "GOOGLE_BASE_URL" => Some(uri.clone()),
            _ => None,
        },
        &mut out,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AgentError::Configuration(ref m) if m.contains("GOOGLE_API_KEY")));
    assert!(out.is_empty());
}
