//! Posting-row maintenance
//!
//! Insert and delete of document ids within a row. Each mutation is
//! one bucket read plus one bucket write; transaction scope belongs to
//! the caller, and no locking happens here.

use super::row::{Row, ROW_HEADER_LEN};
use crate::error::{CuttleError, Result};
use crate::persistence::Bucket;

/// Append `doc_id` with its term frequency to the row under `term`
///
/// The row is not deduplicated: callers updating an object must delete
/// its previous entry before re-inserting.
pub fn insert_with_frequency<B: Bucket>(
    bucket: &mut B,
    term: &[u8],
    doc_id: u32,
    frequency: f32,
) -> Result<()> {
    extend_row(bucket, term, doc_id, frequency, true)
}

/// Append `doc_id` to the no-frequency row under `term`
pub fn insert<B: Bucket>(bucket: &mut B, term: &[u8], doc_id: u32) -> Result<()> {
    extend_row(bucket, term, doc_id, 0.0, false)
}

/// Remove every entry for `doc_id` from the row under `term`
///
/// An absent or empty row succeeds unchanged. A present row that does
/// not contain `doc_id` is rewritten as-is, so deletion is idempotent.
pub fn delete<B: Bucket>(bucket: &mut B, term: &[u8], doc_id: u32, has_frequency: bool) -> Result<()> {
    let Some(data) = bucket.get(term)? else {
        return Ok(());
    };
    if data.is_empty() {
        return Ok(());
    }

    let mut row = Row::decode(&data, has_frequency, term)?;
    row.remove(doc_id);
    store_row(bucket, term, &row)
}

fn extend_row<B: Bucket>(
    bucket: &mut B,
    term: &[u8],
    doc_id: u32,
    frequency: f32,
    has_frequency: bool,
) -> Result<()> {
    let mut row = match bucket.get(term)? {
        Some(data) if !data.is_empty() => Row::decode(&data, has_frequency, term)?,
        _ => Row::empty(has_frequency),
    };

    row.push(doc_id, frequency);
    store_row(bucket, term, &row)
}

fn store_row<B: Bucket>(bucket: &mut B, term: &[u8], row: &Row) -> Result<()> {
    let encoded = row.encode();

    // Sanity check before the write reaches the bucket
    let width = Row::entry_width(row.has_frequency());
    if (encoded.len() - ROW_HEADER_LEN) % width != 0 {
        return Err(CuttleError::corrupt_row(
            term,
            format!(
                "updated row length {} incoherent with entry width {}",
                encoded.len(),
                width
            ),
        ));
    }

    bucket.put(term, &encoded)
}
