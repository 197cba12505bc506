//! Model provider trait and the Gemini implementation.

pub mod format;
pub mod google;
pub mod http;

use async_trait::async_trait;

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::types::{AgentToolCall, FinishReason, GenerationSettings, ModelMessage, Usage};

/// A request sent to a model provider.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    pub messages: Vec<ModelMessage>,
    pub settings: GenerationSettings,
    pub tools: Option<Vec<ToolDefinition>>,
}

/// Tool descriptor sent to the provider API.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema object; `properties` keep declaration order.
    pub parameters: serde_json::Value,
}

impl ToolDefinition {
    /// Ordered `(name, type)` pairs of the declared parameters.
    pub fn parameter_list(&self) -> Vec<(String, String)> {
        self.parameters
            .get("properties")
            .and_then(|p| p.as_object())
            .map(|props| {
                props
                    .iter()
                    .map(|(name, schema)| {
                        let ty = schema
                            .get("type")
                            .and_then(|t| t.as_str())
                            .unwrap_or("any")
                            .to_string();
                        (name.clone(), ty)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Response from a provider.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub text: String,
    pub usage: Usage,
    pub tool_calls: Vec<AgentToolCall>,
    pub finish_reason: Option<FinishReason>,
}

/// Core trait implemented by model providers.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Provider name (e.g., "google").
    fn provider_name(&self) -> &str;

    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Generate a single (non-streaming) completion.
    async fn generate_text(&self, request: &ProviderRequest)
        -> Result<ProviderResponse, AgentError>;
}

/// Create the provider described by the config.
pub fn create_provider(config: &AgentConfig) -> Box<dyn ModelProvider> {
    let mut provider = google::GoogleProvider::new(config.model().clone(), config.api_key().to_string());
    if let Some(url) = config.base_url() {
        provider = provider.with_base_url(url);
    }
    Box::new(provider)
}
