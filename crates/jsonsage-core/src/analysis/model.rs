//! Analysis domain models.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

/// Kind of a decoded JSON value.
///
/// Variant order is the sort order used for `sample_types`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl JsonKind {
    /// Classify a value by its variant.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => JsonKind::Object,
            Value::Array(_) => JsonKind::Array,
            Value::String(_) => JsonKind::String,
            Value::Number(_) => JsonKind::Number,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Null => JsonKind::Null,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonKind::Object => "object",
            JsonKind::Array => "array",
            JsonKind::String => "string",
            JsonKind::Number => "number",
            JsonKind::Boolean => "boolean",
            JsonKind::Null => "null",
        }
    }

    /// Objects and arrays.
    pub fn is_container(&self) -> bool {
        matches!(self, JsonKind::Object | JsonKind::Array)
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape facts for the top-level value. Scalars serialize as `{}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Structure {
    Object {
        property_count: usize,
        keys: Vec<String>,
    },
    Array {
        length: usize,
        sample_types: BTreeSet<JsonKind>,
    },
    Scalar {},
}

impl Structure {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Structure::Scalar {})
    }
}

/// Result of analyzing one JSON value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub value_type: JsonKind,
    pub structure: Structure,
    pub insights: Vec<String>,
}
