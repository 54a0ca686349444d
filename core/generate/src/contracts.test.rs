use super::*;
use crate::schema::{contract_for, translate};
use google_genai_sdk::SchemaType;

#[test]
fn test_video_analysis_contract_translates() {
    let contract = contract_for::<VideoAnalysis>();
    let schema = translate(&contract).expect("translation failed");

    assert_eq!(schema.schema_type, Some(SchemaType::Object));

    let required = schema.required.expect("missing required list");
    assert!(required.contains(&"topics".to_string()));

    let properties = schema.properties.expect("missing properties");

    // Field names follow the wire convention.
    let topics = &properties["topics"];
    assert_eq!(topics.schema_type, Some(SchemaType::Array));
    let item = topics.items.as_ref().expect("missing topic item schema");
    assert_eq!(item.schema_type, Some(SchemaType::Object));

    // Optional fields become nullable, typed by their non-null variant.
    let summary = &properties["summary"];
    assert_eq!(summary.schema_type, Some(SchemaType::String));
    assert_eq!(summary.nullable, Some(true));

    let questions = &properties["suggestedQuestions"];
    assert_eq!(questions.schema_type, Some(SchemaType::Array));
    assert_eq!(questions.nullable, Some(true));
}

#[test]
fn test_suggested_questions_bounds_carry_through() {
    let contract = contract_for::<SuggestedQuestions>();
    let schema = translate(&contract).expect("translation failed");

    let properties = schema.properties.expect("missing properties");
    let questions = &properties["questions"];
    assert_eq!(questions.schema_type, Some(SchemaType::Array));
    assert_eq!(questions.min_items, Some(3));
    assert_eq!(questions.max_items, Some(6));
    assert_eq!(
        questions
            .items
            .as_ref()
            .expect("missing item schema")
            .schema_type,
        Some(SchemaType::String)
    );
}

#[test]
fn test_round_trip_serde() {
    let analysis = VideoAnalysis {
        topics: vec![Topic {
            title: "Intro".to_string(),
            summary: "Opening remarks".to_string(),
        }],
        summary: None,
        suggested_questions: Some(vec!["What happens next?".to_string()]),
    };

    let json = serde_json::to_value(&analysis).expect("serialization failed");
    assert!(json.get("suggestedQuestions").is_some());

    let back: VideoAnalysis = serde_json::from_value(json).expect("deserialization failed");
    assert_eq!(back, analysis);
}
