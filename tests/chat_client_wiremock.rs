// tests/chat_client_wiremock.rs
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use autoblog_core::application::ports::generation::{GenerationError, TextGenerator};
use autoblog_core::infrastructure::generation::{ChatCompletionsClient, ChatCompletionsSettings};

fn client_for(server: &MockServer, timeout: Duration) -> ChatCompletionsClient {
    ChatCompletionsClient::new(ChatCompletionsSettings {
        endpoint: format!("{}/v1/chat/completions", server.uri()),
        model: "test/model".into(),
        api_key: Some("hf_test".into()),
        timeout,
    })
    .expect("client builds")
}

fn completion(content: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }
        ]
    })
}

/// リクエスト形状（モデル名・単一ユーザーメッセージ・トークン上限・Bearer）を確認する
#[tokio::test]
async fn sends_bearer_authenticated_single_turn_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer hf_test"))
        .and(body_partial_json(json!({
            "model": "test/model",
            "max_tokens": 200,
            "messages": [{
                "role": "user",
                "content": "Write a short blog article about: quantum sensors. Keep it concise (2-3 paragraphs)."
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!("Title\nBody"))))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server, Duration::from_secs(5))
        .generate("quantum sensors", 200)
        .await
        .unwrap();

    assert_eq!(text, "Title\nBody");
}

#[tokio::test]
async fn non_success_status_is_upstream_error_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("model is loading"))
        .mount(&server)
        .await;

    let err = client_for(&server, Duration::from_secs(5))
        .generate("topic", 200)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        GenerationError::Upstream {
            status: 503,
            body: "model is loading".into()
        }
    );
}

#[tokio::test]
async fn missing_choices_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server, Duration::from_secs(5))
        .generate("topic", 200)
        .await
        .unwrap_err();

    assert_eq!(err, GenerationError::EmptyResponse);
}

#[tokio::test]
async fn null_content_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!(null))))
        .mount(&server)
        .await;

    let err = client_for(&server, Duration::from_secs(5))
        .generate("topic", 200)
        .await
        .unwrap_err();

    assert_eq!(err, GenerationError::EmptyResponse);
}

#[tokio::test]
async fn empty_string_content_is_returned_as_is() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!(""))))
        .mount(&server)
        .await;

    let text = client_for(&server, Duration::from_secs(5))
        .generate("topic", 200)
        .await
        .unwrap();

    assert_eq!(text, "");
}

/// タイムアウトは NetworkError として扱う
#[tokio::test]
async fn slow_upstream_times_out_as_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion(json!("late")))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = client_for(&server, Duration::from_millis(200))
        .generate("topic", 200)
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_is_network_error() {
    let client = ChatCompletionsClient::new(ChatCompletionsSettings {
        endpoint: "http://127.0.0.1:9/v1/chat/completions".into(),
        model: "test/model".into(),
        api_key: Some("hf_test".into()),
        timeout: Duration::from_secs(2),
    })
    .unwrap();

    let err = client.generate("topic", 200).await.unwrap_err();

    assert!(matches!(err, GenerationError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn empty_prompt_is_rejected_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!("x"))))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server, Duration::from_secs(5))
        .generate("  ", 200)
        .await
        .unwrap_err();

    assert_eq!(err, GenerationError::InvalidPrompt);
}
