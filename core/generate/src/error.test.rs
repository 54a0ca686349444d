use super::*;

fn api_error(status: u16, message: &str) -> GenAiError {
    GenAiError::Api {
        status,
        message: message.to_string(),
    }
}

#[test]
fn test_classify_by_status() {
    assert_eq!(classify(&api_error(503, "")), FailureKind::Overloaded);
    assert_eq!(classify(&api_error(429, "")), FailureKind::RateLimited);
    assert_eq!(classify(&api_error(401, "")), FailureKind::Authentication);
    assert_eq!(classify(&api_error(400, "")), FailureKind::InvalidRequest);
    assert_eq!(classify(&api_error(500, "")), FailureKind::Unknown);
}

#[test]
fn test_classify_by_message_substring() {
    assert_eq!(
        classify(&api_error(500, "The model is overloaded")),
        FailureKind::Overloaded
    );
    assert_eq!(
        classify(&api_error(500, "Rate limit exceeded for project")),
        FailureKind::RateLimited
    );
    assert_eq!(
        classify(&api_error(500, "API key not valid")),
        FailureKind::Authentication
    );
    assert_eq!(
        classify(&api_error(403, "Request had invalid authentication: unauthorized")),
        FailureKind::Authentication
    );
}

#[test]
fn test_classify_transport_errors() {
    assert_eq!(
        classify(&GenAiError::Network("connection refused".to_string())),
        FailureKind::Network
    );
    assert_eq!(
        classify(&GenAiError::Timeout("deadline".to_string())),
        FailureKind::Timeout
    );
    assert_eq!(
        classify(&GenAiError::Parse("bad json".to_string())),
        FailureKind::Unknown
    );
    assert_eq!(classify(&GenAiError::MissingApiKey), FailureKind::Authentication);
}

#[test]
fn test_retryable_kinds() {
    assert!(FailureKind::Overloaded.is_retryable());
    assert!(FailureKind::RateLimited.is_retryable());
    assert!(FailureKind::Timeout.is_retryable());
    assert!(FailureKind::Empty.is_retryable());

    assert!(!FailureKind::Authentication.is_retryable());
    assert!(!FailureKind::InvalidRequest.is_retryable());
    assert!(!FailureKind::Network.is_retryable());
    assert!(!FailureKind::Unknown.is_retryable());
}

#[test]
fn test_fatal_error_mapping() {
    let error = GenAiError::Network("host unreachable".to_string());
    let fatal = GenerateError::fatal(FailureKind::Network, &error);
    assert!(matches!(fatal, GenerateError::Network(_)));

    let error = api_error(401, "API key not valid");
    let fatal = GenerateError::fatal(FailureKind::Authentication, &error);
    assert!(matches!(fatal, GenerateError::Authentication(_)));

    let error = api_error(418, "teapot");
    let fatal = GenerateError::fatal(FailureKind::Unknown, &error);
    assert!(matches!(fatal, GenerateError::Provider(_)));
}

#[test]
fn test_exhausted_display_enumerates_models() {
    let err = GenerateError::ExhaustedCascade {
        attempted: vec![
            "gemini-2.5-flash-lite".to_string(),
            "gemini-2.5-flash".to_string(),
        ],
        last: FailureKind::RateLimited,
    };
    let rendered = err.to_string();
    assert!(rendered.contains("gemini-2.5-flash-lite, gemini-2.5-flash"));
    assert!(rendered.contains("rate limited"));
}
