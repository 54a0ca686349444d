//! Cascade behavior tests against a mock Gemini upstream.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vidbrief_generate::{
    AttemptOutcome, Client, ClientConfig, FailureKind, GenerateClient, GenerateError,
    GenerateOptions, MODEL_CASCADE,
};

fn client_for(server: &MockServer) -> GenerateClient {
    let sdk = Client::new(ClientConfig::with_api_key("test-key").base_url(server.uri()))
        .expect("failed to create SDK client");
    GenerateClient::new(sdk)
}

fn model_path(model: &str) -> String {
    format!("/models/{model}:generateContent")
}

fn success_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"parts": [{"text": text}], "role": "model"},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 7, "totalTokenCount": 19}
    })
}

fn error_body(code: u16, message: &str, status: &str) -> serde_json::Value {
    json!({"error": {"code": code, "message": message, "status": status}})
}

async fn mount_response(server: &MockServer, model: &str, response: ResponseTemplate, hits: u64) {
    Mock::given(method("POST"))
        .and(path(model_path(model)))
        .respond_with(response)
        .expect(hits)
        .mount(server)
        .await;
}

async fn request_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .iter()
        .map(|r| r.url.path().to_string())
        .collect()
}

#[tokio::test]
async fn retryable_failures_advance_the_cascade_in_order() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        "gemini-2.5-flash-lite",
        ResponseTemplate::new(503).set_body_json(error_body(
            503,
            "The model is overloaded. Please try again later.",
            "UNAVAILABLE",
        )),
        1,
    )
    .await;
    mount_response(
        &server,
        "gemini-2.5-flash",
        ResponseTemplate::new(429).set_body_json(error_body(
            429,
            "Resource has been exhausted (e.g. check quota).",
            "RESOURCE_EXHAUSTED",
        )),
        1,
    )
    .await;
    mount_response(
        &server,
        "gemini-2.5-pro",
        ResponseTemplate::new(200).set_body_json(success_body("third time lucky")),
        1,
    )
    .await;

    let client = client_for(&server);
    let generation = client
        .generate_detailed("summarize", GenerateOptions::new())
        .await
        .expect("generation failed");

    assert_eq!(generation.text, "third time lucky");
    assert_eq!(generation.model, "gemini-2.5-pro");
    assert_eq!(generation.attempts.len(), 3);
    assert_eq!(
        generation.attempts[0].outcome,
        AttemptOutcome::Failed(FailureKind::Overloaded)
    );
    assert_eq!(
        generation.attempts[1].outcome,
        AttemptOutcome::Failed(FailureKind::RateLimited)
    );
    assert_eq!(generation.attempts[2].outcome, AttemptOutcome::Success);

    let paths: Vec<String> = MODEL_CASCADE.iter().map(|m| model_path(m)).collect();
    assert_eq!(request_paths(&server).await, paths);
}

#[tokio::test]
async fn authentication_failure_aborts_without_fallback() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        "gemini-2.5-flash-lite",
        ResponseTemplate::new(401).set_body_json(error_body(
            401,
            "API key not valid. Please pass a valid API key.",
            "UNAUTHENTICATED",
        )),
        1,
    )
    .await;
    mount_response(
        &server,
        "gemini-2.5-flash",
        ResponseTemplate::new(200).set_body_json(success_body("never reached")),
        0,
    )
    .await;
    mount_response(
        &server,
        "gemini-2.5-pro",
        ResponseTemplate::new(200).set_body_json(success_body("never reached")),
        0,
    )
    .await;

    let client = client_for(&server);
    let error = client
        .generate("summarize", GenerateOptions::new())
        .await
        .expect_err("expected an error");

    assert!(
        matches!(error, GenerateError::Authentication(_)),
        "got {error:?}"
    );
    assert_eq!(request_paths(&server).await.len(), 1);
}

#[tokio::test]
async fn invalid_request_aborts_without_fallback() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        "gemini-2.5-flash-lite",
        ResponseTemplate::new(400).set_body_json(error_body(
            400,
            "Invalid JSON payload received.",
            "INVALID_ARGUMENT",
        )),
        1,
    )
    .await;

    let client = client_for(&server);
    let error = client
        .generate("summarize", GenerateOptions::new())
        .await
        .expect_err("expected an error");

    assert!(
        matches!(error, GenerateError::InvalidRequest(_)),
        "got {error:?}"
    );
    assert_eq!(request_paths(&server).await.len(), 1);
}

#[tokio::test]
async fn empty_responses_exhaust_every_model() {
    let server = MockServer::start().await;
    for model in MODEL_CASCADE {
        mount_response(
            &server,
            model,
            ResponseTemplate::new(200).set_body_json(success_body("   ")),
            1,
        )
        .await;
    }

    let client = client_for(&server);
    let error = client
        .generate("summarize", GenerateOptions::new())
        .await
        .expect_err("expected an error");

    match error {
        GenerateError::ExhaustedCascade { attempted, last } => {
            assert_eq!(attempted, MODEL_CASCADE.to_vec());
            assert_eq!(last, FailureKind::Empty);
        }
        other => panic!("expected ExhaustedCascade, got {other:?}"),
    }
}

#[tokio::test]
async fn rate_limited_everywhere_reports_last_classification() {
    let server = MockServer::start().await;
    for model in MODEL_CASCADE {
        mount_response(
            &server,
            model,
            ResponseTemplate::new(429).set_body_json(error_body(
                429,
                "Resource has been exhausted (e.g. check quota).",
                "RESOURCE_EXHAUSTED",
            )),
            1,
        )
        .await;
    }

    let client = client_for(&server);
    let error = client
        .generate("summarize", GenerateOptions::new())
        .await
        .expect_err("expected an error");

    match error {
        GenerateError::ExhaustedCascade { attempted, last } => {
            assert_eq!(attempted, MODEL_CASCADE.to_vec());
            assert_eq!(last, FailureKind::RateLimited);
        }
        other => panic!("expected ExhaustedCascade, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_attempt_times_out_and_cascade_advances() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        "gemini-2.5-flash-lite",
        ResponseTemplate::new(200)
            .set_body_json(success_body("too late"))
            .set_delay(Duration::from_secs(2)),
        1,
    )
    .await;
    mount_response(
        &server,
        "gemini-2.5-flash",
        ResponseTemplate::new(200).set_body_json(success_body("fast enough")),
        1,
    )
    .await;
    mount_response(
        &server,
        "gemini-2.5-pro",
        ResponseTemplate::new(200).set_body_json(success_body("never reached")),
        0,
    )
    .await;

    let client = client_for(&server);
    let options = GenerateOptions::new().with_per_attempt_timeout(Duration::from_millis(50));
    let generation = client
        .generate_detailed("summarize", options)
        .await
        .expect("generation failed");

    assert_eq!(generation.text, "fast enough");
    assert_eq!(generation.model, "gemini-2.5-flash");
    assert_eq!(
        generation.attempts[0].outcome,
        AttemptOutcome::Failed(FailureKind::Timeout)
    );
}

#[tokio::test]
async fn timeouts_on_every_model_exhaust_the_cascade() {
    let server = MockServer::start().await;
    for model in MODEL_CASCADE {
        mount_response(
            &server,
            model,
            ResponseTemplate::new(200)
                .set_body_json(success_body("too late"))
                .set_delay(Duration::from_secs(2)),
            1,
        )
        .await;
    }

    let client = client_for(&server);
    let options = GenerateOptions::new().with_per_attempt_timeout(Duration::from_millis(50));
    let error = client
        .generate("summarize", options)
        .await
        .expect_err("expected an error");

    match error {
        GenerateError::ExhaustedCascade { attempted, last } => {
            assert_eq!(attempted, MODEL_CASCADE.to_vec());
            assert_eq!(last, FailureKind::Timeout);
        }
        other => panic!("expected ExhaustedCascade, got {other:?}"),
    }
}

#[tokio::test]
async fn preferred_model_is_tried_first() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        "gemini-2.5-pro",
        ResponseTemplate::new(200).set_body_json(success_body("from the pro model")),
        1,
    )
    .await;
    mount_response(
        &server,
        "gemini-2.5-flash-lite",
        ResponseTemplate::new(200).set_body_json(success_body("never reached")),
        0,
    )
    .await;
    mount_response(
        &server,
        "gemini-2.5-flash",
        ResponseTemplate::new(200).set_body_json(success_body("never reached")),
        0,
    )
    .await;

    let client = client_for(&server);
    let options = GenerateOptions::new().with_preferred_model("gemini-2.5-pro");
    let generation = client
        .generate_detailed("summarize", options)
        .await
        .expect("generation failed");

    assert_eq!(generation.model, "gemini-2.5-pro");
    assert_eq!(generation.attempts.len(), 1);
}

#[tokio::test]
async fn invalid_preferred_model_uses_default_order() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        "gemini-2.5-flash-lite",
        ResponseTemplate::new(200).set_body_json(success_body("default order")),
        1,
    )
    .await;

    let client = client_for(&server);
    let options = GenerateOptions::new().with_preferred_model("gpt-4o");
    let generation = client
        .generate_detailed("summarize", options)
        .await
        .expect("generation failed");

    assert_eq!(generation.model, "gemini-2.5-flash-lite");
}

#[tokio::test]
async fn output_contract_reaches_the_provider() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(model_path("gemini-2.5-flash-lite")))
        .and(body_partial_json(json!({
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "required": ["title"]
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("{\"title\":\"x\"}")))
        .expect(1)
        .mount(&server)
        .await;

    let contract = json!({
        "type": "object",
        "required": ["title"],
        "properties": {"title": {"type": "string"}}
    });

    let client = client_for(&server);
    let options = GenerateOptions::new().with_output_contract(contract);
    let text = client
        .generate("summarize", options)
        .await
        .expect("generation failed");

    assert_eq!(text, "{\"title\":\"x\"}");
}

#[tokio::test]
async fn identical_inputs_take_the_same_control_flow_path() {
    let server = MockServer::start().await;
    mount_response(
        &server,
        "gemini-2.5-flash-lite",
        ResponseTemplate::new(503).set_body_json(error_body(
            503,
            "The model is overloaded. Please try again later.",
            "UNAVAILABLE",
        )),
        2,
    )
    .await;
    mount_response(
        &server,
        "gemini-2.5-flash",
        ResponseTemplate::new(200).set_body_json(success_body("stable answer")),
        2,
    )
    .await;

    let client = client_for(&server);

    let first = client
        .generate_detailed("summarize", GenerateOptions::new())
        .await
        .expect("first run failed");
    let second = client
        .generate_detailed("summarize", GenerateOptions::new())
        .await
        .expect("second run failed");

    assert_eq!(first.model, second.model);
    assert_eq!(first.attempts.len(), second.attempts.len());
    let first_outcomes: Vec<AttemptOutcome> =
        first.attempts.iter().map(|a| a.outcome).collect();
    let second_outcomes: Vec<AttemptOutcome> =
        second.attempts.iter().map(|a| a.outcome).collect();
    assert_eq!(first_outcomes, second_outcomes);
}

#[tokio::test]
async fn connection_failure_is_a_fatal_network_error() {
    // Nothing is listening on this port; the connection is refused.
    let sdk = Client::new(ClientConfig::with_api_key("test-key").base_url("http://127.0.0.1:9"))
        .expect("failed to create SDK client");
    let client = GenerateClient::new(sdk);

    let error = client
        .generate("summarize", GenerateOptions::new())
        .await
        .expect_err("expected an error");

    assert!(matches!(error, GenerateError::Network(_)), "got {error:?}");
}
