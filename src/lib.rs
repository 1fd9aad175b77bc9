//! cuttle: a per-shard inverted index for a schema-aware object store
//!
//! Typed property values are analyzed into byte-keyed terms, and each
//! term maps to a checksum-guarded posting row inside that property's
//! bucket. Scalar values are keyed with order-preserving encodings so
//! the bucket key space supports range scans.

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod persistence;
pub mod postings;
pub mod schema;
pub mod shard;

pub use analysis::{Analyzer, Countable, Property};
pub use config::ShardConfig;
pub use error::{CuttleError, Result};
pub use models::{DocId, StoredObject};
pub use schema::{ClassSchema, PropertyKind, PropertySpec, SchemaRegistry};
pub use shard::Shard;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
