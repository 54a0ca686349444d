use super::*;
use google_genai_sdk::ClientConfig;

fn sdk_with_key(key: &str) -> Client {
    Client::new(ClientConfig::with_api_key(key)).expect("failed to create SDK client")
}

#[test]
fn test_options_builders() {
    let options = GenerateOptions::new()
        .with_preferred_model("gemini-2.5-pro")
        .with_per_attempt_timeout(Duration::from_secs(5))
        .with_output_contract(serde_json::json!({"type": "object"}));

    assert_eq!(options.preferred_model.as_deref(), Some("gemini-2.5-pro"));
    assert_eq!(options.per_attempt_timeout, Some(Duration::from_secs(5)));
    assert!(options.output_contract.is_some());
}

#[test]
fn test_config_defaults_and_builder() {
    let config = GenerateConfig::default();
    assert!(config.attempt_timeout.is_none());

    let config = GenerateConfig::default().with_attempt_timeout(Duration::from_secs(30));
    assert_eq!(config.attempt_timeout, Some(Duration::from_secs(30)));
}

#[test]
fn test_config_serde_human_readable_timeout() {
    let config: GenerateConfig =
        serde_json::from_str(r#"{"attempt_timeout": "30s"}"#).expect("deserialization failed");
    assert_eq!(config.attempt_timeout, Some(Duration::from_secs(30)));

    let config: GenerateConfig = serde_json::from_str("{}").expect("deserialization failed");
    assert!(config.attempt_timeout.is_none());
}

#[tokio::test]
async fn test_blank_credential_fails_preflight() {
    let client = GenerateClient::new(sdk_with_key("  "));
    let result = client.generate("hello", GenerateOptions::new()).await;
    assert!(matches!(result, Err(GenerateError::Configuration(_))));
}

#[tokio::test]
async fn test_malformed_contract_fails_preflight() {
    let client = GenerateClient::new(sdk_with_key("test-key"));
    let options = GenerateOptions::new().with_output_contract(serde_json::json!("not a schema"));
    let result = client.generate("hello", options).await;
    assert!(matches!(result, Err(GenerateError::SchemaConversion(_))));
}

#[test]
fn test_debug_output() {
    let client = GenerateClient::new(sdk_with_key("secret-key"));
    let rendered = format!("{client:?}");
    assert!(rendered.contains("GenerateClient"));
    assert!(!rendered.contains("secret-key"));
}
