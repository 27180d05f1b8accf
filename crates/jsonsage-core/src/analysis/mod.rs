//! Shallow JSON structure analysis.
//!
//! Inspects the top level of a value only. Objects report their keys and
//! which of them hold nested containers; arrays report their length and the
//! kinds seen in the first few elements.

pub mod model;

use serde::Deserialize;
use serde_json::Value;

use model::{AnalysisResult, JsonKind, Structure};

/// Number of leading array elements inspected for `sample_types`.
pub const SAMPLE_SIZE: usize = 5;

pub const EMPTY_OBJECT: &str = "Empty object detected";
pub const EMPTY_ARRAY: &str = "Empty array detected";
pub const UNIFORM_OBJECTS: &str = "Array contains uniform objects";
pub const NESTED_PREFIX: &str = "Nested structures found in: ";

/// Analyze a decoded JSON value. Total over every value.
pub fn analyze(value: &Value) -> AnalysisResult {
    let value_type = JsonKind::of(value);
    let mut insights = Vec::new();

    let structure = match value {
        Value::Object(map) => {
            if map.is_empty() {
                insights.push(EMPTY_OBJECT.to_string());
            } else {
                let nested: Vec<&str> = map
                    .iter()
                    .filter(|(_, v)| JsonKind::of(v).is_container())
                    .map(|(k, _)| k.as_str())
                    .collect();
                if !nested.is_empty() {
                    insights.push(format!("{}{}", NESTED_PREFIX, nested.join(", ")));
                }
            }

            Structure::Object {
                property_count: map.len(),
                keys: map.keys().cloned().collect(),
            }
        }
        Value::Array(items) => {
            if items.is_empty() {
                insights.push(EMPTY_ARRAY.to_string());
            } else if items.iter().all(Value::is_object) {
                insights.push(UNIFORM_OBJECTS.to_string());
            }

            Structure::Array {
                length: items.len(),
                sample_types: items.iter().take(SAMPLE_SIZE).map(JsonKind::of).collect(),
            }
        }
        _ => Structure::Scalar {},
    };

    tracing::trace!(%value_type, insights = insights.len(), "Analyzed JSON value");

    AnalysisResult {
        value_type,
        structure,
        insights,
    }
}

/// Decode a JSON document of any nesting depth.
///
/// The recursion limit is lifted and the parser grows its stack on the
/// heap, so deeply nested input decodes instead of failing or overflowing.
pub fn parse_document(input: &[u8]) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_slice(input);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Resolve the analysis input: a JSON string is itself decoded as a JSON
/// document, any other value is used as-is.
pub fn decode_embedded(value: Value) -> Result<Value, serde_json::Error> {
    match value {
        Value::String(text) => parse_document(text.as_bytes()),
        other => Ok(other),
    }
}

/// Drop a value without recursing, one container level at a time.
pub fn release(value: Value) {
    let mut pending = vec![value];
    while let Some(value) = pending.pop() {
        match value {
            Value::Array(items) => pending.extend(items),
            Value::Object(map) => pending.extend(map.into_iter().map(|(_, v)| v)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeSet;

    #[test]
    fn test_empty_object() {
        let result = analyze(&json!({}));
        assert_eq!(result.value_type, JsonKind::Object);
        assert_eq!(
            result.structure,
            Structure::Object {
                property_count: 0,
                keys: vec![]
            }
        );
        assert_eq!(result.insights, vec![EMPTY_OBJECT]);
    }

    #[test]
    fn test_empty_array() {
        let result = analyze(&json!([]));
        assert_eq!(result.value_type, JsonKind::Array);
        assert_eq!(
            result.structure,
            Structure::Array {
                length: 0,
                sample_types: BTreeSet::new()
            }
        );
        assert_eq!(result.insights, vec![EMPTY_ARRAY]);
    }

    #[test]
    fn test_nested_keys_reported() {
        let result = analyze(&json!({"a": [1, 2], "b": 1}));
        assert_eq!(result.insights, vec!["Nested structures found in: a"]);
    }

    #[test]
    fn test_nested_keys_keep_insertion_order() {
        let value: Value =
            serde_json::from_str(r#"{"zeta": {}, "plain": 1, "alpha": [], "mid": {"x": 1}}"#).unwrap();
        let result = analyze(&value);

        assert_eq!(
            result.structure,
            Structure::Object {
                property_count: 4,
                keys: vec!["zeta".into(), "plain".into(), "alpha".into(), "mid".into()],
            }
        );
        assert_eq!(result.insights, vec!["Nested structures found in: zeta, alpha, mid"]);
    }

    #[test]
    fn test_flat_object_has_no_insights() {
        let result = analyze(&json!({"name": "JsonSage", "version": "1.0"}));
        assert!(result.insights.is_empty());
    }

    #[test]
    fn test_uniform_objects() {
        let result = analyze(&json!([{"x": 1}, {"y": 2}]));
        assert_eq!(result.insights, vec![UNIFORM_OBJECTS]);
        assert_eq!(
            result.structure,
            Structure::Array {
                length: 2,
                sample_types: BTreeSet::from([JsonKind::Object])
            }
        );
    }

    #[test]
    fn test_mixed_array() {
        let result = analyze(&json!([{"x": 1}, 2, "three", null]));
        assert!(result.insights.is_empty());
        assert_eq!(
            result.structure,
            Structure::Array {
                length: 4,
                sample_types: BTreeSet::from([
                    JsonKind::Object,
                    JsonKind::Number,
                    JsonKind::String,
                    JsonKind::Null
                ]),
            }
        );
    }

    #[test]
    fn test_sample_limited_to_first_five() {
        let result = analyze(&json!([1, 2, 3, 4, 5, "late", true]));
        match result.structure {
            Structure::Array {
                length,
                sample_types,
            } => {
                assert_eq!(length, 7);
                assert_eq!(sample_types, BTreeSet::from([JsonKind::Number]));
            }
            other => panic!("expected array structure, got {other:?}"),
        }
    }

    #[test]
    fn test_uniform_check_covers_whole_array() {
        // Sample is all objects but a later element is not.
        let result = analyze(&json!([{}, {}, {}, {}, {}, 6]));
        assert!(result.insights.is_empty());
    }

    #[test]
    fn test_scalars() {
        for (value, kind) in [
            (json!(42), JsonKind::Number),
            (json!(1.5), JsonKind::Number),
            (json!("s"), JsonKind::String),
            (json!(true), JsonKind::Boolean),
            (json!(null), JsonKind::Null),
        ] {
            let result = analyze(&value);
            assert_eq!(result.value_type, kind);
            assert!(result.structure.is_scalar());
            assert!(result.insights.is_empty());
        }
    }

    #[test]
    fn test_serialized_shape() {
        let object = serde_json::to_value(analyze(&json!({"a": {}}))).unwrap();
        assert_eq!(
            object,
            json!({
                "value_type": "object",
                "structure": {"property_count": 1, "keys": ["a"]},
                "insights": ["Nested structures found in: a"]
            })
        );

        let array = serde_json::to_value(analyze(&json!([true, 1, true]))).unwrap();
        assert_eq!(array["structure"], json!({"length": 3, "sample_types": ["number", "boolean"]}));

        let scalar = serde_json::to_value(analyze(&json!("s"))).unwrap();
        assert_eq!(scalar["structure"], json!({}));
        assert_eq!(scalar["value_type"], json!("string"));
    }

    #[test]
    fn test_decode_embedded_round_trip() {
        let direct = json!({"users": [{"id": 1}], "settings": {"lang": "en"}});
        let encoded = Value::String(direct.to_string());

        let decoded = decode_embedded(encoded).unwrap();
        assert_eq!(analyze(&decoded), analyze(&direct));
    }

    #[test]
    fn test_decode_embedded_passes_non_strings() {
        assert_eq!(decode_embedded(json!([1])).unwrap(), json!([1]));
        assert_eq!(decode_embedded(json!(null)).unwrap(), json!(null));
    }

    #[test]
    fn test_decode_embedded_rejects_bad_json() {
        assert!(decode_embedded(json!("{bad")).is_err());
        assert!(decode_embedded(json!("[1] 2")).is_err());
    }

    #[test]
    fn test_decode_embedded_rejects_out_of_range_number() {
        let err = decode_embedded(json!("1e400")).unwrap_err();
        assert!(err.to_string().contains("number out of range"), "{err}");
    }

    fn nested_array(depth: usize) -> String {
        format!("{}{}", "[".repeat(depth), "]".repeat(depth))
    }

    #[test]
    fn test_parse_document_deep_nesting() {
        let value = parse_document(nested_array(200).as_bytes()).unwrap();
        let result = analyze(&value);
        assert_eq!(result.value_type, JsonKind::Array);
        assert_eq!(
            result.structure,
            Structure::Array {
                length: 1,
                sample_types: BTreeSet::from([JsonKind::Array])
            }
        );
        release(value);
    }

    #[test]
    fn test_parse_and_release_very_deep_nesting() {
        let value = parse_document(nested_array(100_000).as_bytes()).unwrap();
        assert_eq!(analyze(&value).value_type, JsonKind::Array);
        release(value);
    }

    #[test]
    fn test_decode_embedded_deep_string() {
        let decoded = decode_embedded(Value::String(nested_array(200))).unwrap();
        assert_eq!(analyze(&decoded).value_type, JsonKind::Array);
        release(decoded);
    }
}
