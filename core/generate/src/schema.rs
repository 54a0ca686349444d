//! Translation of JSON Schema output contracts into the provider's
//! constrained-output schema format.
//!
//! The input is a JSON Schema document (`serde_json::Value`), typically
//! derived from a Rust type with [`contract_for`]. The output is the
//! OpenAPI-subset [`Schema`] that Gemini enforces at generation time.
//!
//! Known limitation, preserved deliberately: the provider cannot express
//! true union output, so a union of several non-null variants is narrowed to
//! its first variant. Callers depend on this narrowing; do not "fix" it into
//! an error.

use serde_json::Value;
use thiserror::Error;

use google_genai_sdk::Schema;

/// Errors from contract translation.
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    /// The contract document is not usable as a schema.
    #[error("malformed output contract: {0}")]
    MalformedContract(String),
}

/// Derive a JSON Schema output contract from a Rust type.
///
/// Subschemas are inlined so the translator never sees `$ref` nodes.
pub fn contract_for<T: schemars::JsonSchema>() -> Value {
    let mut settings = schemars::r#gen::SchemaSettings::draft07();
    settings.inline_subschemas = true;
    let root = settings.into_generator().into_root_schema_for::<T>();
    serde_json::to_value(root.schema).unwrap_or_default()
}

/// Translate a JSON Schema contract into the provider schema.
///
/// Pure and side-effect free. Fails only when the contract root is not a
/// JSON object; unrecognized interior nodes fall back to a string schema
/// rather than erroring.
pub fn translate(contract: &Value) -> Result<Schema, SchemaError> {
    if !contract.is_object() {
        return Err(SchemaError::MalformedContract(format!(
            "contract root must be a JSON object, got {contract}"
        )));
    }
    Ok(translate_node(contract))
}

fn translate_node(node: &Value) -> Schema {
    let Some(obj) = node.as_object() else {
        return Schema::string();
    };

    // Unions: strip the null variant. Exactly one non-null variant left
    // becomes that variant marked nullable; several left narrow to the first.
    if let Some(variants) = obj
        .get("anyOf")
        .or_else(|| obj.get("oneOf"))
        .and_then(Value::as_array)
    {
        let non_null: Vec<&Value> = variants.iter().filter(|v| !is_null_schema(v)).collect();
        if non_null.len() == 1 && non_null.len() < variants.len() {
            return translate_node(non_null[0]).with_nullable();
        }
        if let Some(first) = non_null.first() {
            return translate_node(first);
        }
        // All variants were null; fall through to the string fallback.
    }

    // `type: [T, "null"]` is the other common nullable encoding.
    if let Some(types) = obj.get("type").and_then(Value::as_array) {
        let non_null: Vec<&str> = types
            .iter()
            .filter_map(Value::as_str)
            .filter(|t| *t != "null")
            .collect();
        let had_null = non_null.len() < types.len();
        if let Some(first) = non_null.first() {
            let schema = translate_typed(first, obj);
            return if had_null && non_null.len() == 1 {
                schema.with_nullable()
            } else {
                schema
            };
        }
        return Schema::string();
    }

    match obj.get("type").and_then(Value::as_str) {
        Some(type_name) => translate_typed(type_name, obj),
        None => Schema::string(),
    }
}

fn translate_typed(type_name: &str, obj: &serde_json::Map<String, Value>) -> Schema {
    match type_name {
        "object" => {
            let properties = obj
                .get("properties")
                .and_then(Value::as_object)
                .map(|props| {
                    props
                        .iter()
                        .map(|(key, value)| (key.clone(), translate_node(value)))
                        .collect()
                })
                .unwrap_or_default();

            // Presence is enforced by the provider at generation time; the
            // list is carried verbatim, defaulting to empty.
            let required = obj
                .get("required")
                .and_then(Value::as_array)
                .map(|names| {
                    names
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();

            Schema::object(properties).with_required(required)
        }
        "array" => {
            let items = obj
                .get("items")
                .map(translate_node)
                .unwrap_or_else(Schema::string);
            let mut schema = Schema::array(items);
            schema.min_items = obj.get("minItems").and_then(Value::as_i64).map(|n| n as i32);
            schema.max_items = obj.get("maxItems").and_then(Value::as_i64).map(|n| n as i32);
            schema
        }
        "string" => {
            let mut schema = Schema::string();
            schema.pattern = obj
                .get("pattern")
                .and_then(Value::as_str)
                .map(str::to_string);
            schema
        }
        // The provider does not distinguish numbers from integers.
        "number" | "integer" => Schema::number(),
        "boolean" => Schema::boolean(),
        // Permissive fallback for unrecognized nodes.
        _ => Schema::string(),
    }
}

fn is_null_schema(node: &Value) -> bool {
    node.get("type").and_then(Value::as_str) == Some("null")
}

#[cfg(test)]
#[path = "schema.test.rs"]
mod tests;
