use super::*;
use google_genai_sdk::SchemaType;
use serde_json::json;

#[test]
fn test_object_with_required_and_nullable_fields() {
    let contract = json!({
        "type": "object",
        "required": ["x"],
        "properties": {
            "x": {"type": "string"},
            "y": {"type": ["string", "null"]}
        }
    });

    let schema = translate(&contract).expect("translation failed");
    assert_eq!(schema.schema_type, Some(SchemaType::Object));
    assert_eq!(schema.required, Some(vec!["x".to_string()]));

    let properties = schema.properties.expect("missing properties");
    let x = &properties["x"];
    assert_eq!(x.schema_type, Some(SchemaType::String));
    assert!(x.nullable.is_none());

    let y = &properties["y"];
    assert_eq!(y.schema_type, Some(SchemaType::String));
    assert_eq!(y.nullable, Some(true));
}

#[test]
fn test_null_union_becomes_nullable() {
    let contract = json!({
        "anyOf": [
            {"type": "integer"},
            {"type": "null"}
        ]
    });

    let schema = translate(&contract).expect("translation failed");
    assert_eq!(schema.schema_type, Some(SchemaType::Number));
    assert_eq!(schema.nullable, Some(true));
}

#[test]
fn test_multi_variant_union_narrows_to_first() {
    let contract = json!({
        "oneOf": [
            {"type": "boolean"},
            {"type": "string"},
            {"type": "null"}
        ]
    });

    // Several non-null variants: narrowed to the first, not marked nullable.
    let schema = translate(&contract).expect("translation failed");
    assert_eq!(schema.schema_type, Some(SchemaType::Boolean));
    assert!(schema.nullable.is_none());
}

#[test]
fn test_array_bounds_and_item_default() {
    let contract = json!({
        "type": "array",
        "items": {"type": "integer"},
        "minItems": 3,
        "maxItems": 6
    });

    let schema = translate(&contract).expect("translation failed");
    assert_eq!(schema.schema_type, Some(SchemaType::Array));
    assert_eq!(schema.min_items, Some(3));
    assert_eq!(schema.max_items, Some(6));
    assert_eq!(
        schema.items.expect("missing items").schema_type,
        Some(SchemaType::Number)
    );

    // Missing item schema defaults to a bare string item.
    let schema = translate(&json!({"type": "array"})).expect("translation failed");
    assert_eq!(
        schema.items.expect("missing items").schema_type,
        Some(SchemaType::String)
    );
}

#[test]
fn test_string_pattern_carried() {
    let contract = json!({"type": "string", "pattern": "^PT\\d+S$"});
    let schema = translate(&contract).expect("translation failed");
    assert_eq!(schema.pattern, Some("^PT\\d+S$".to_string()));
}

#[test]
fn test_number_and_integer_collapse() {
    let number = translate(&json!({"type": "number"})).expect("translation failed");
    let integer = translate(&json!({"type": "integer"})).expect("translation failed");
    assert_eq!(number.schema_type, Some(SchemaType::Number));
    assert_eq!(integer.schema_type, Some(SchemaType::Number));
}

#[test]
fn test_unrecognized_node_falls_back_to_string() {
    let schema = translate(&json!({"format": "date-time"})).expect("translation failed");
    assert_eq!(schema.schema_type, Some(SchemaType::String));

    let schema = translate(&json!({"type": "unicorn"})).expect("translation failed");
    assert_eq!(schema.schema_type, Some(SchemaType::String));
}

#[test]
fn test_object_without_required_gets_empty_list() {
    let contract = json!({
        "type": "object",
        "properties": {"x": {"type": "string"}}
    });
    let schema = translate(&contract).expect("translation failed");
    assert_eq!(schema.required, Some(Vec::new()));
}

#[test]
fn test_non_object_contract_is_malformed() {
    assert!(matches!(
        translate(&json!("string")),
        Err(SchemaError::MalformedContract(_))
    ));
    assert!(matches!(
        translate(&json!([1, 2, 3])),
        Err(SchemaError::MalformedContract(_))
    ));
}

#[test]
fn test_nested_structures() {
    let contract = json!({
        "type": "object",
        "required": ["topics"],
        "properties": {
            "topics": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["title"],
                    "properties": {
                        "title": {"type": "string"},
                        "weight": {"type": "number"}
                    }
                }
            }
        }
    });

    let schema = translate(&contract).expect("translation failed");
    let properties = schema.properties.expect("missing properties");
    let topics = &properties["topics"];
    assert_eq!(topics.schema_type, Some(SchemaType::Array));

    let item = topics.items.as_ref().expect("missing items");
    assert_eq!(item.schema_type, Some(SchemaType::Object));
    assert_eq!(item.required, Some(vec!["title".to_string()]));
}
