use super::*;

#[test]
fn test_status_only_on_api_errors() {
    let err = GenAiError::Api {
        status: 429,
        message: "rate limit exceeded".to_string(),
    };
    assert_eq!(err.status(), Some(429));

    assert_eq!(GenAiError::Network("reset".to_string()).status(), None);
    assert_eq!(GenAiError::MissingApiKey.status(), None);
}

#[test]
fn test_is_transport() {
    assert!(GenAiError::Network("dns failure".to_string()).is_transport());
    assert!(GenAiError::Timeout("deadline".to_string()).is_transport());
    assert!(
        !GenAiError::Api {
            status: 503,
            message: "overloaded".to_string()
        }
        .is_transport()
    );
    assert!(!GenAiError::Parse("bad json".to_string()).is_transport());
}

#[test]
fn test_display_includes_status_and_message() {
    let err = GenAiError::Api {
        status: 400,
        message: "invalid argument".to_string(),
    };
    assert_eq!(err.to_string(), "API error (HTTP 400): invalid argument");
}
