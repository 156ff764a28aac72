//! # OpenAI API client
//!
//! Thin wrapper around [async-openai] for chat completion.
//! Provides token masking for safe logging and a simple request/response API.

use async_openai::types::{CreateChatCompletionRequestArgs, ResponseFormat};
use async_openai::Client;
use std::sync::Arc;
use tracing;

pub use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
/// Exposed for tests and for callers who need to log API keys safely.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// Per-request sampling settings. `None` leaves the server default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatOptions {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    /// Ask for a `json_object` response format.
    pub json_object: bool,
}

/// OpenAI chat client. Wraps async-openai client; optionally holds API key for masked logging.
#[derive(Clone)]
pub struct OpenAIClient {
    /// Shared async-openai client used for all API calls.
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    /// API key stored only for logging (masked). None when created via `with_client()`.
    api_key_for_logging: Option<String>,
}

impl OpenAIClient {
    /// Builds a client using the given API key and default API base URL.
    pub fn new(api_key: String) -> Self {
        let api_key_for_logging = Some(api_key.clone());
        let config = async_openai::config::OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Arc::new(Client::with_config(config)),
            api_key_for_logging,
        }
    }

    /// Builds a client with a custom base URL (e.g. for proxies or compatible endpoints).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let api_key_for_logging = Some(api_key.clone());
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            api_key_for_logging,
        }
    }

    /// Builds a client from an existing async-openai client (no API key stored for logging).
    pub fn with_client(client: Client<async_openai::config::OpenAIConfig>) -> Self {
        Self {
            client: Arc::new(client),
            api_key_for_logging: None,
        }
    }

    /// Sends a chat completion request and returns the full assistant reply as a string.
    ///
    /// Logs masked API key, request JSON, and token usage. Returns the first choice's content
    /// or an error if the response has no choices.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
        options: &ChatOptions,
    ) -> anyhow::Result<String> {
        let message_count = messages.len();
        let masked = self
            .api_key_for_logging
            .as_deref()
            .map(mask_token)
            .unwrap_or_else(|| "***".to_string());

        tracing::info!(
            model = %model,
            message_count = message_count,
            temperature = ?options.temperature,
            max_tokens = ?options.max_tokens,
            json_object = options.json_object,
            api_key = %masked,
            "OpenAI chat_completion request"
        );

        let mut builder = CreateChatCompletionRequestArgs::default();
        builder.model(model).messages(messages);
        if let Some(temperature) = options.temperature {
            builder.temperature(temperature);
        }
        if let Some(max_tokens) = options.max_tokens {
            builder.max_completion_tokens(max_tokens);
        }
        if options.json_object {
            builder.response_format(ResponseFormat::JsonObject);
        }
        let request = builder.build()?;

        if let Ok(json) = serde_json::to_string_pretty(&request) {
            tracing::debug!(request_json = %json, "OpenAI chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat_completion usage"
            );
        }

        if let Some(choice) = response.choices.first() {
            Ok(choice.message.content.clone().unwrap_or_default())
        } else {
            anyhow::bail!("No response from OpenAI");
        }
    }
}
