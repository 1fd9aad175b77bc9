//! Posting-list rows: binary codec and maintenance
//!
//! Each term of each property maps to one row inside that property's
//! bucket. A row enumerates the document ids containing the term, plus
//! their term frequencies for text-like properties, guarded by a
//! checksum.

mod mutate;
mod row;

pub use mutate::{delete, insert, insert_with_frequency};
pub use row::{DocEntry, Row, ROW_HEADER_LEN};
