//! Schema and property type system
//!
//! Defines the property kinds the analyzer can handle, the per-class
//! property lists the pipeline consumes, and the class-name lookup.

mod property;
mod registry;

pub use property::{ClassSchema, PropertyKind, PropertySpec};
pub use registry::SchemaRegistry;
