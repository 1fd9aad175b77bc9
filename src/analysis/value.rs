//! Schema-typed decode of the dynamic property map
//!
//! Incoming objects carry their properties as a JSON map. Before
//! analysis, each present value is decoded against its declared kind
//! into a tagged [`PropertyValue`], so the analyzer dispatches
//! statically instead of re-inspecting dynamic values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CuttleError, Result};
use crate::schema::PropertyKind;

/// A single cross-reference
///
/// Only the count of a reference set is indexed; the target URI is
/// carried for upstream use and never analyzed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub target: String,
}

impl Reference {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// A property value after schema-typed decode
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Text(String),
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    RefSet(Vec<Reference>),
}

impl PropertyValue {
    /// Decode `raw` as the declared `kind`, failing with a mismatch
    /// that names the property and both types.
    pub fn from_json(kind: PropertyKind, raw: &Value, property: &str) -> Result<Self> {
        let mismatch = || CuttleError::SchemaMismatch {
            property: property.to_string(),
            detail: format!(
                "expected {}, got {}",
                kind.type_name(),
                json_type_name(raw)
            ),
        };

        match kind {
            PropertyKind::Text => raw
                .as_str()
                .map(|s| PropertyValue::Text(s.to_string()))
                .ok_or_else(mismatch),
            PropertyKind::String => raw
                .as_str()
                .map(|s| PropertyValue::String(s.to_string()))
                .ok_or_else(mismatch),
            PropertyKind::Int => raw.as_i64().map(PropertyValue::Int).ok_or_else(mismatch),
            PropertyKind::Float => raw.as_f64().map(PropertyValue::Float).ok_or_else(mismatch),
            PropertyKind::Bool => raw.as_bool().map(PropertyValue::Bool).ok_or_else(mismatch),
            PropertyKind::Ref => match raw {
                Value::Array(_) => serde_json::from_value(raw.clone())
                    .map(PropertyValue::RefSet)
                    .map_err(|_| mismatch()),
                _ => Err(mismatch()),
            },
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
