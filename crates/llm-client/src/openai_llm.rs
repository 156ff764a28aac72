//! OpenAI implementation of [`LlmClient`] on top of openai-client.

use anyhow::{bail, Result};
use async_trait::async_trait;
use openai_client::ChatOptions;
use prompt::ChatMessage;
use tracing::instrument;

use super::{chat_message_to_openai, CompletionOptions, LlmClient};
use crate::config::LlmConfig;

pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    model: String,
    /// Whether `json_mode` requests are forwarded as `response_format: json_object`.
    json_mode_supported: bool,
    /// Blank keys fail every call before a request is built.
    has_api_key: bool,
}

impl OpenAILlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            has_api_key: !api_key.trim().is_empty(),
            client: openai_client::OpenAIClient::new(api_key),
            model: DEFAULT_MODEL.to_string(),
            json_mode_supported: true,
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            has_api_key: !api_key.trim().is_empty(),
            client: openai_client::OpenAIClient::with_base_url(api_key, base_url),
            model: DEFAULT_MODEL.to_string(),
            json_mode_supported: true,
        }
    }

    /// Builds a client from any [`LlmConfig`] (key, base URL, model, JSON mode).
    pub fn from_config(config: &dyn LlmConfig) -> Self {
        Self::with_base_url(config.api_key().to_string(), config.base_url().to_string())
            .with_model(config.model().to_string())
            .with_json_mode(config.json_mode())
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_json_mode(mut self, supported: bool) -> Self {
        self.json_mode_supported = supported;
        self
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages), fields(model = %self.model))]
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
        options: CompletionOptions,
    ) -> Result<String> {
        if !self.has_api_key {
            bail!("OPENAI_API_KEY is not set");
        }
        let openai_messages = messages
            .iter()
            .map(chat_message_to_openai)
            .collect::<Result<Vec<_>>>()?;
        let chat_options = ChatOptions {
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            json_object: options.json_mode && self.json_mode_supported,
        };
        self.client
            .chat_completion(&self.model, openai_messages, &chat_options)
            .await
    }

    fn model(&self) -> &str {
        &self.model
    }
}
