//! Value analysis
//!
//! Converts typed property values into sequences of indexable
//! byte-keyed terms:
//! - text and string values are tokenized and aggregated into term
//!   frequencies
//! - scalar values are encoded under fixed-width order-preserving keys
//! - reference sets are indexed by their count only

mod analyzer;
mod sortable;
mod value;

pub use analyzer::{Analyzer, Countable, Property};
pub use sortable::{
    decode_float64, decode_int64, decode_uint32, encode_float64, encode_int64, encode_uint32,
};
pub use value::{PropertyValue, Reference};
