//! Integration tests for the generateContent client against a mock server.

use google_genai_sdk::{Client, ClientConfig, GenAiError, GenerateContentRequest};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::new(ClientConfig::with_api_key("test-key").base_url(server.uri()))
        .expect("failed to create test client")
}

#[tokio::test]
async fn generate_content_parses_success_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"text": "Hello"}], "role": "user"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [{"text": "Hi!"}], "role": "model"},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 3, "candidatesTokenCount": 2, "totalTokenCount": 5}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = GenerateContentRequest::from_prompt("Hello");
    let response = client
        .generate_content("gemini-2.5-flash", &request)
        .await
        .expect("request failed");

    assert_eq!(response.text(), Some("Hi!".to_string()));
    let usage = response.usage_metadata.expect("missing usage");
    assert_eq!(usage.total_token_count, Some(5));
}

#[tokio::test]
async fn generate_content_extracts_error_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "code": 429,
                "message": "Resource has been exhausted (e.g. check quota).",
                "status": "RESOURCE_EXHAUSTED"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = GenerateContentRequest::from_prompt("Hello");
    let error = client
        .generate_content("gemini-2.5-pro", &request)
        .await
        .expect_err("expected an error");

    match error {
        GenAiError::Api { status, message } => {
            assert_eq!(status, 429);
            assert!(message.contains("exhausted"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn generate_content_keeps_raw_body_without_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = GenerateContentRequest::from_prompt("Hello");
    let error = client
        .generate_content("gemini-2.5-flash", &request)
        .await
        .expect_err("expected an error");

    match error {
        GenAiError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "upstream overloaded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn generate_content_reports_connection_failure_as_network() {
    // Nothing is listening on this port.
    let client = Client::new(ClientConfig::with_api_key("test-key").base_url("http://127.0.0.1:9"))
        .expect("failed to create test client");

    let request = GenerateContentRequest::from_prompt("Hello");
    let error = client
        .generate_content("gemini-2.5-flash", &request)
        .await
        .expect_err("expected an error");

    assert!(matches!(error, GenAiError::Network(_)), "got {error:?}");
}
