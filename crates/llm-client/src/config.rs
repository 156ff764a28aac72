//! LLM configuration: trait and env-based implementation.

use std::env;

use crate::openai_llm::DEFAULT_MODEL;

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn json_mode(&self) -> bool;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    /// OPENAI_API_KEY; may be empty, completions then fail before any request is sent
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub llm_model: String,
    /// LLM_JSON_MODE
    pub llm_json_mode: bool,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.openai_api_key
    }
    fn base_url(&self) -> &str {
        &self.openai_base_url
    }
    fn model(&self) -> &str {
        &self.llm_model
    }
    fn json_mode(&self) -> bool {
        self.llm_json_mode
    }
}

impl EnvLlmConfig {
    /// Load from environment variables.
    pub fn from_env() -> Self {
        let openai_api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        let openai_base_url = env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "https://api.openai.com/v1".to_string());
        let llm_model = env::var("MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let llm_json_mode = env::var("LLM_JSON_MODE")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(true);
        Self {
            openai_api_key,
            openai_base_url,
            llm_model,
            llm_json_mode,
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.openai_api_key.trim().is_empty()
    }
}
