//! Bucket seam and property-bucket stores
//!
//! The row code only ever sees the [`Bucket`] get/put surface; the
//! fjall-backed [`PropertyStore`] and the in-memory [`MemoryStore`]
//! both provide it.

mod bucket;
mod store;

pub use bucket::{Bucket, MemoryBucket, MemoryStore, PropertyBuckets};
pub use store::{bucket_name_for_prop, PropertyBucket, PropertyStore};
