use super::*;

#[test]
fn test_default_order_without_preference() {
    assert_eq!(effective_cascade(None), MODEL_CASCADE.to_vec());
}

#[test]
fn test_valid_preferred_model_moves_to_front() {
    for preferred in MODEL_CASCADE {
        let cascade = effective_cascade(Some(preferred));

        assert_eq!(cascade[0], preferred);
        assert_eq!(cascade.len(), MODEL_CASCADE.len());

        // Permutation: every cascade member appears exactly once.
        for model in MODEL_CASCADE {
            assert_eq!(cascade.iter().filter(|m| **m == model).count(), 1);
        }
    }
}

#[test]
fn test_preferred_preserves_relative_order_of_rest() {
    let cascade = effective_cascade(Some("gemini-2.5-flash"));
    assert_eq!(
        cascade,
        vec!["gemini-2.5-flash", "gemini-2.5-flash-lite", "gemini-2.5-pro"]
    );
}

#[test]
fn test_invalid_preferred_model_uses_default_order() {
    assert_eq!(effective_cascade(Some("gpt-4o")), MODEL_CASCADE.to_vec());
    assert_eq!(effective_cascade(Some("")), MODEL_CASCADE.to_vec());
    // Membership is exact, not prefix-based.
    assert_eq!(
        effective_cascade(Some("gemini-2.5")),
        MODEL_CASCADE.to_vec()
    );
}

#[test]
fn test_is_cascade_model() {
    assert!(is_cascade_model("gemini-2.5-flash-lite"));
    assert!(is_cascade_model("gemini-2.5-pro"));
    assert!(!is_cascade_model("gemini-1.5-flash"));
}
