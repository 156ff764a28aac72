//! Tests for [`llm_client::OpenAILlmClient`] against a mock HTTP server.

use llm_client::{CompletionOptions, LlmClient, OpenAILlmClient};
use prompt::ChatMessage;
use serde_json::json;

fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 3, "completion_tokens": 2, "total_tokens": 5}
    })
    .to_string()
}

/// **Test: A blank API key fails with a config error and sends nothing.**
///
/// **Setup:** Mock `/chat/completions` that must never be hit; client built with an empty key.
/// **Action:** `get_llm_response_with_messages`.
/// **Expected:** Error mentions OPENAI_API_KEY; the mock saw zero requests.
#[tokio::test]
async fn test_blank_api_key_fails_without_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("unused"))
        .expect(0)
        .create_async()
        .await;

    for key in ["", "   "] {
        let client = OpenAILlmClient::with_base_url(key.to_string(), server.url());
        let err = client
            .get_llm_response_with_messages(
                vec![ChatMessage::user("hello")],
                CompletionOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    mock.assert_async().await;
}

/// **Test: With a key set the completion goes through.**
#[tokio::test]
async fn test_api_key_set_sends_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("pong"))
        .expect(1)
        .create_async()
        .await;

    let client = OpenAILlmClient::with_base_url("sk-test-key-123456".to_string(), server.url());
    let reply = client
        .get_llm_response_with_messages(
            vec![ChatMessage::user("ping")],
            CompletionOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(reply, "pong");
    mock.assert_async().await;
}
