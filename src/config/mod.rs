//! Configuration loaded from the process environment.

use std::fmt;

use crate::error::{AgentError, Result};
use crate::models::GoogleModel;

/// Required credential for the Gemini API.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
/// Optional model id override.
pub const MODEL_VAR: &str = "GOOGLE_MODEL";
/// Optional endpoint override.
pub const BASE_URL_VAR: &str = "GOOGLE_BASE_URL";

/// Immutable runtime configuration, built once at startup.
#[derive(Clone)]
pub struct AgentConfig {
    api_key: String,
    model: GoogleModel,
    base_url: Option<String>,
}

impl fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl AgentConfig {
    /// Build a config with an explicit key and the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: GoogleModel::default(),
            base_url: None,
        }
    }

    pub fn with_model(mut self, model: GoogleModel) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Load `.env` if present, then read the process environment.
    ///
    /// Fails with [`AgentError::Configuration`] when `GOOGLE_API_KEY` is
    /// unset or empty.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty(API_KEY_VAR).ok_or_else(|| AgentError::missing_env(API_KEY_VAR))?;

        let mut config = Self::new(api_key);
        if let Some(model) = non_empty(MODEL_VAR) {
            config.model = model
                .trim()
                .parse()
                .map_err(|e| AgentError::Configuration(format!("{MODEL_VAR}: {e}")))?;
        }
        config.base_url = non_empty(BASE_URL_VAR);
        Ok(config)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &GoogleModel {
        &self.model
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}
