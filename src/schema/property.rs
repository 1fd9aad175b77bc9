//! Property type definitions
//!
//! Defines how different property types are analyzed and keyed.

use serde::{Deserialize, Serialize};

/// Property data type
///
/// Determines how a property value is converted into indexable terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// Full-text property
    ///
    /// Split on any rune that is neither a Unicode letter nor a digit,
    /// lowercased, duplicates aggregated into term frequencies.
    Text,

    /// Whitespace-split property
    ///
    /// Split on Unicode whitespace only; casing is preserved.
    String,

    /// 64-bit signed integer, keyed by an order-preserving encoding
    Int,

    /// 64-bit float, keyed by an order-preserving encoding
    Float,

    /// Boolean value
    Bool,

    /// Reference set
    ///
    /// Only the number of references is indexed, with zero being an
    /// explicitly allowed value.
    Ref,
}

impl PropertyKind {
    /// Whether analyzed items carry a term frequency. This determines
    /// the on-disk row layout for the property.
    pub fn has_frequency(&self) -> bool {
        matches!(self, PropertyKind::Text | PropertyKind::String)
    }

    /// Type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyKind::Text => "text",
            PropertyKind::String => "string",
            PropertyKind::Int => "int",
            PropertyKind::Float => "float",
            PropertyKind::Bool => "bool",
            PropertyKind::Ref => "ref",
        }
    }
}

/// One declared property of a class
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertySpec {
    pub name: String,
    pub kind: PropertyKind,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// A class schema: the ordered property list the indexing pipeline
/// consumes. Row mutations are applied in this declaration order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassSchema {
    pub name: String,
    pub properties: Vec<PropertySpec>,
}

impl ClassSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Append a declared property
    pub fn with_property(mut self, name: impl Into<String>, kind: PropertyKind) -> Self {
        self.properties.push(PropertySpec::new(name, kind));
        self
    }

    /// Look up a declared property by name
    pub fn property(&self, name: &str) -> Option<&PropertySpec> {
        self.properties.iter().find(|spec| spec.name == name)
    }
}
