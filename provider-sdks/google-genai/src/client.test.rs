use super::*;

#[test]
fn test_client_config_default() {
    let config = ClientConfig::default();
    assert!(config.api_key.is_none());
    assert!(config.base_url.is_none());
    assert_eq!(config.timeout_secs, Some(600));
}

#[test]
fn test_client_config_with_api_key() {
    let config = ClientConfig::with_api_key("test-key");
    assert_eq!(config.api_key, Some("test-key".to_string()));
}

#[test]
fn test_new_requires_api_key() {
    let result = Client::new(ClientConfig::default());
    assert!(matches!(result, Err(GenAiError::MissingApiKey)));
}

#[test]
fn test_model_url() {
    let client =
        Client::new(ClientConfig::with_api_key("test")).expect("failed to create test client");

    assert_eq!(
        client.model_url("gemini-2.5-flash", "generateContent"),
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
    );

    assert_eq!(
        client.model_url("models/gemini-2.5-flash", "generateContent"),
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
    );
}

#[test]
fn test_model_url_custom_base() {
    let client = Client::new(
        ClientConfig::with_api_key("test").base_url("http://127.0.0.1:9000/v1beta"),
    )
    .expect("failed to create test client");

    assert_eq!(
        client.model_url("gemini-2.5-pro", "generateContent"),
        "http://127.0.0.1:9000/v1beta/models/gemini-2.5-pro:generateContent"
    );
}

#[test]
fn test_debug_omits_api_key() {
    let client = Client::new(ClientConfig::with_api_key("super-secret"))
        .expect("failed to create test client");
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("super-secret"));
}
