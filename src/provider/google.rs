//! Google Gemini API provider.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::error::AgentError;
use crate::models::GoogleModel;
use crate::types::*;

use super::format::tool_result_to_object;
use super::http::{shared_client, status_to_error};
use super::{ModelProvider, ProviderRequest, ProviderResponse};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GoogleProvider {
    model: GoogleModel,
    api_key: String,
    base_url: String,
}

impl GoogleProvider {
    pub fn new(model: GoogleModel, api_key: String) -> Self {
        Self {
            model,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different endpoint (proxy, mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub(crate) fn build_request_body(&self, request: &ProviderRequest) -> Value {
        let mut system_instruction = None;
        let mut contents: Vec<Value> = Vec::new();
        // Gemini has no call ids; function responses are matched by name.
        let mut call_names: HashMap<&str, &str> = HashMap::new();
        let mut in_tool_turn = false;

        for msg in &request.messages {
            match msg.role {
                Role::System => {
                    system_instruction = Some(json!({ "parts": [{"text": msg.text()}] }));
                    in_tool_turn = false;
                }
                Role::User => {
                    contents.push(json!({
                        "role": "user",
                        "parts": [{"text": msg.text()}],
                    }));
                    in_tool_turn = false;
                }
                Role::Assistant => {
                    let parts: Vec<Value> = msg
                        .content
                        .iter()
                        .filter_map(|part| match part {
                            ContentPart::Text { text } => Some(json!({"text": text})),
                            ContentPart::ToolCall(tc) => {
                                call_names.insert(tc.id.as_str(), tc.name.as_str());
                                Some(json!({
                                    "functionCall": {"name": tc.name, "args": tc.arguments}
                                }))
                            }
                            ContentPart::ToolResult(_) => None,
                        })
                        .collect();
                    contents.push(json!({ "role": "model", "parts": parts }));
                    in_tool_turn = false;
                }
                Role::Tool => {
                    let parts: Vec<Value> = msg
                        .content
                        .iter()
                        .filter_map(|part| match part {
                            ContentPart::ToolResult(tr) => {
                                let name = call_names
                                    .get(tr.tool_call_id.as_str())
                                    .copied()
                                    .unwrap_or(tr.tool_call_id.as_str());
                                Some(json!({
                                    "functionResponse": {
                                        "name": name,
                                        "response": tool_result_to_object(&tr.result),
                                    }
                                }))
                            }
                            _ => None,
                        })
                        .collect();
                    let merged = in_tool_turn
                        && contents
                            .last_mut()
                            .and_then(|c| c.get_mut("parts"))
                            .and_then(|p| p.as_array_mut())
                            .map(|existing| existing.extend(parts.iter().cloned()))
                            .is_some();
                    if !merged {
                        contents.push(json!({ "role": "user", "parts": parts }));
                    }
                    in_tool_turn = true;
                }
            }
        }

        let mut body = Map::new();
        body.insert("contents".into(), Value::Array(contents));

        if let Some(sys) = system_instruction {
            body.insert("systemInstruction".into(), sys);
        }

        let mut gen_config = Map::new();
        if let Some(max) = request.settings.max_tokens {
            gen_config.insert("maxOutputTokens".into(), max.into());
        }
        if let Some(temp) = request.settings.temperature {
            gen_config.insert("temperature".into(), temp.into());
        }
        if !gen_config.is_empty() {
            body.insert("generationConfig".into(), Value::Object(gen_config));
        }

        if let Some(ref tools) = request.tools {
            if !tools.is_empty() {
                let fn_decls: Vec<Value> = tools
                    .iter()
                    .map(|t| {
                        json!({
                            "name": t.name,
                            "description": t.description,
                            "parameters": t.parameters,
                        })
                    })
                    .collect();
                body.insert("tools".into(), json!([{ "functionDeclarations": fn_decls }]));
            }
        }

        Value::Object(body)
    }
}

#[async_trait]
impl ModelProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    fn model_id(&self) -> &str {
        self.model.as_str()
    }

    async fn generate_text(&self, request: &ProviderRequest) -> Result<ProviderResponse, AgentError> {
        let body = self.build_request_body(request);
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url,
            self.model.as_str()
        );

        debug!(model = self.model.as_str(), messages = request.messages.len(), "Google generate_text");

        // Key travels in a header; URLs never carry it into error messages.
        let resp = shared_client()
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| e.without_url())?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: GeminiResponse = resp.json().await.map_err(|e| e.without_url())?;

        let candidate = data
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AgentError::api(200, "No candidates in Gemini response"))?;

        let mut text = String::new();
        let mut tool_calls = Vec::new();

        for part in candidate.content.map(|c| c.parts).unwrap_or_default() {
            if let Some(t) = part.text {
                text.push_str(&t);
            }
            if let Some(fc) = part.function_call {
                tool_calls.push(AgentToolCall {
                    id: uuid::Uuid::new_v4().to_string(),
                    name: fc.name,
                    arguments: fc.args.unwrap_or_else(|| Value::Object(Map::new())),
                });
            }
        }

        if text.trim().is_empty() && tool_calls.is_empty() {
            let reason = candidate.finish_reason.as_deref().unwrap_or("UNSPECIFIED");
            return Err(AgentError::api(
                200,
                format!("Gemini returned no content (finish reason: {reason})"),
            ));
        }

        let finish_reason = if !tool_calls.is_empty() {
            Some(FinishReason::ToolCalls)
        } else {
            match candidate.finish_reason.as_deref() {
                Some("STOP") => Some(FinishReason::Stop),
                Some("MAX_TOKENS") => Some(FinishReason::Length),
                Some("SAFETY") | Some("RECITATION") | Some("BLOCKLIST") => {
                    Some(FinishReason::ContentFilter)
                }
                Some(_) => Some(FinishReason::Error),
                None => None,
            }
        };

        let usage = data
            .usage_metadata
            .map(|u| Usage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            })
            .unwrap_or_default();

        Ok(ProviderResponse {
            text,
            usage,
            tool_calls,
            finish_reason,
        })
    }
}

// Internal Gemini response types

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPart {
    text: Option<String>,
    function_call: Option<GeminiFunctionCall>,
}

#[derive(Deserialize)]
struct GeminiFunctionCall {
    name: String,
    args: Option<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}
