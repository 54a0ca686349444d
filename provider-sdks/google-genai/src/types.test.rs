use super::*;

#[test]
fn test_request_serialization_structure() {
    let request = GenerateContentRequest::from_prompt("Hello").with_generation_config(
        GenerationConfig {
            temperature: Some(0.7),
            max_output_tokens: Some(1024),
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(Schema::string()),
        },
    );

    let json = serde_json::to_value(&request).expect("serialization failed");

    assert!(json.get("contents").is_some());
    assert!(json.get("generationConfig").is_some());

    let gen_config = json.get("generationConfig").unwrap();
    let temp = gen_config.get("temperature").unwrap().as_f64().unwrap();
    assert!((temp - 0.7).abs() < 0.001);
    assert_eq!(
        gen_config.get("maxOutputTokens"),
        Some(&serde_json::json!(1024))
    );
    assert_eq!(
        gen_config.get("responseMimeType"),
        Some(&serde_json::json!("application/json"))
    );
    assert_eq!(
        gen_config.get("responseSchema"),
        Some(&serde_json::json!({"type": "STRING"}))
    );

    let contents = json.get("contents").unwrap().as_array().unwrap();
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0].get("role"), Some(&serde_json::json!("user")));
}

#[test]
fn test_schema_serialization_field_names() {
    let schema = Schema {
        schema_type: Some(SchemaType::Array),
        items: Some(Box::new(Schema {
            pattern: Some("^[a-z]+$".to_string()),
            ..Schema::string()
        })),
        min_items: Some(1),
        max_items: Some(5),
        ..Default::default()
    };

    let json = serde_json::to_value(&schema).expect("serialization failed");
    assert_eq!(json.get("type"), Some(&serde_json::json!("ARRAY")));
    assert_eq!(json.get("minItems"), Some(&serde_json::json!(1)));
    assert_eq!(json.get("maxItems"), Some(&serde_json::json!(5)));
    assert_eq!(
        json.pointer("/items/pattern"),
        Some(&serde_json::json!("^[a-z]+$"))
    );
    // Absent options must not appear on the wire
    assert!(json.get("nullable").is_none());
    assert!(json.get("properties").is_none());
}

#[test]
fn test_response_deserialization() {
    let json = r#"{
        "candidates": [{
            "content": {
                "parts": [{"text": "Hello!"}],
                "role": "model"
            },
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 10,
            "candidatesTokenCount": 20,
            "totalTokenCount": 30
        }
    }"#;

    let response: GenerateContentResponse =
        serde_json::from_str(json).expect("deserialization failed");

    assert_eq!(response.text(), Some("Hello!".to_string()));
    assert_eq!(response.finish_reason(), Some(FinishReason::Stop));

    let usage = response.usage_metadata.unwrap();
    assert_eq!(usage.prompt_token_count, Some(10));
    assert_eq!(usage.candidates_token_count, Some(20));
    assert_eq!(usage.total_token_count, Some(30));
}

#[test]
fn test_response_text_concatenates_parts() {
    let response = GenerateContentResponse {
        candidates: Some(vec![Candidate {
            content: Some(Content {
                role: Some("model".to_string()),
                parts: Some(vec![Part::text("Hello, "), Part::text("world")]),
            }),
            ..Default::default()
        }]),
        ..Default::default()
    };
    assert_eq!(response.text(), Some("Hello, world".to_string()));
}

#[test]
fn test_response_text_absent() {
    let response = GenerateContentResponse::default();
    assert_eq!(response.text(), None);

    let response = GenerateContentResponse {
        candidates: Some(vec![Candidate::default()]),
        ..Default::default()
    };
    assert_eq!(response.text(), None);
}

#[test]
fn test_unknown_finish_reason_deserializes() {
    let json = r#"{
        "candidates": [{
            "content": {"parts": [{"text": "x"}], "role": "model"},
            "finishReason": "BLOCKLIST"
        }]
    }"#;

    let response: GenerateContentResponse =
        serde_json::from_str(json).expect("deserialization failed");
    assert_eq!(response.finish_reason(), Some(FinishReason::Other));
}

#[test]
fn test_error_envelope_deserialization() {
    let json = r#"{
        "error": {
            "code": 429,
            "message": "Resource has been exhausted (e.g. check quota).",
            "status": "RESOURCE_EXHAUSTED"
        }
    }"#;

    let envelope: ApiErrorResponse = serde_json::from_str(json).expect("deserialization failed");
    assert_eq!(envelope.error.code, Some(429));
    assert_eq!(envelope.error.status, Some("RESOURCE_EXHAUSTED".to_string()));
}
