//! Binary row format
//!
//! ```text
//! row             := crc32(4) || doc_count:u32(4) || entry × doc_count
//! entry (freq)    := doc_id:u32(4) || tf:f32(4)
//! entry (no-freq) := doc_id:u32(4)
//! ```
//!
//! All fields little-endian. The checksum is CRC-32/IEEE over the
//! `doc_count || entries` suffix only.

use crc32fast::Hasher;

use crate::error::{CuttleError, Result};

/// Checksum plus doc count
pub const ROW_HEADER_LEN: usize = 8;

/// One posting: a document id and, for frequency rows, the term
/// frequency of the term within that document
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DocEntry {
    pub doc_id: u32,
    pub frequency: f32,
}

/// A decoded posting-list row. Entry order is insertion order; the
/// codec never reorders or deduplicates.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    has_frequency: bool,
    entries: Vec<DocEntry>,
}

impl Row {
    pub fn empty(has_frequency: bool) -> Self {
        Self {
            has_frequency,
            entries: Vec::new(),
        }
    }

    /// Stored width of one entry: doc id plus, in frequency mode, the tf
    pub fn entry_width(has_frequency: bool) -> usize {
        if has_frequency {
            8
        } else {
            4
        }
    }

    pub fn has_frequency(&self) -> bool {
        self.has_frequency
    }

    pub fn doc_count(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[DocEntry] {
        &self.entries
    }

    /// Append an entry. Duplicate doc ids are kept as-is.
    pub fn push(&mut self, doc_id: u32, frequency: f32) {
        self.entries.push(DocEntry { doc_id, frequency });
    }

    /// Drop every entry for `doc_id`. A miss leaves the row unchanged.
    pub fn remove(&mut self, doc_id: u32) {
        self.entries.retain(|entry| entry.doc_id != doc_id);
    }

    /// Decode and verify a stored row
    ///
    /// `term` only names the offending key in errors. Fails with a
    /// corruption error on checksum mismatch, on a truncated header,
    /// and on any payload length incoherent with the advertised count.
    pub fn decode(data: &[u8], has_frequency: bool, term: &[u8]) -> Result<Self> {
        if data.len() < ROW_HEADER_LEN {
            return Err(CuttleError::corrupt_row(
                term,
                format!("row shorter than its header ({} bytes)", data.len()),
            ));
        }

        let stored_crc = read_u32_le(data, 0);
        let computed_crc = checksum(&data[4..]);
        if stored_crc != computed_crc {
            return Err(CuttleError::corrupt_row(term, "checksum mismatch"));
        }

        let doc_count = read_u32_le(data, 4) as usize;
        let width = Self::entry_width(has_frequency);
        let payload = &data[ROW_HEADER_LEN..];
        if payload.len() != doc_count * width {
            return Err(CuttleError::corrupt_row(
                term,
                format!(
                    "{} docs advertised but {} payload bytes at entry width {}",
                    doc_count,
                    payload.len(),
                    width
                ),
            ));
        }

        let mut entries = Vec::with_capacity(doc_count);
        for chunk in payload.chunks_exact(width) {
            entries.push(DocEntry {
                doc_id: read_u32_le(chunk, 0),
                frequency: if has_frequency {
                    read_f32_le(chunk, 4)
                } else {
                    0.0
                },
            });
        }

        Ok(Self {
            has_frequency,
            entries,
        })
    }

    /// Serialize with a freshly computed checksum
    pub fn encode(&self) -> Vec<u8> {
        let width = Self::entry_width(self.has_frequency);
        let mut body = Vec::with_capacity(4 + self.entries.len() * width);
        body.extend_from_slice(&self.doc_count().to_le_bytes());
        for entry in &self.entries {
            body.extend_from_slice(&entry.doc_id.to_le_bytes());
            if self.has_frequency {
                body.extend_from_slice(&entry.frequency.to_le_bytes());
            }
        }

        let mut out = Vec::with_capacity(4 + body.len());
        out.extend_from_slice(&checksum(&body).to_le_bytes());
        out.extend_from_slice(&body);
        out
    }
}

fn checksum(body: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(body);
    hasher.finalize()
}

fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(bytes)
}

fn read_f32_le(data: &[u8], offset: usize) -> f32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[offset..offset + 4]);
    f32::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_with_frequency() {
        let mut row = Row::empty(true);
        row.push(7, 0.5);
        row.push(9, 0.25);

        let encoded = row.encode();
        assert_eq!(encoded.len(), ROW_HEADER_LEN + 2 * 8);

        let decoded = Row::decode(&encoded, true, b"k").unwrap();
        assert_eq!(decoded, row);
        assert_eq!(decoded.entries()[0].doc_id, 7);
        assert_eq!(decoded.entries()[1].frequency, 0.25);
    }

    #[test]
    fn test_roundtrip_without_frequency() {
        let mut row = Row::empty(false);
        row.push(1, 0.0);
        row.push(2, 0.0);
        row.push(3, 0.0);

        let encoded = row.encode();
        assert_eq!(encoded.len(), ROW_HEADER_LEN + 3 * 4);
        assert_eq!(Row::decode(&encoded, false, b"k").unwrap(), row);
    }

    #[test]
    fn test_empty_row_is_legal() {
        let encoded = Row::empty(true).encode();
        assert_eq!(encoded.len(), ROW_HEADER_LEN);

        let decoded = Row::decode(&encoded, true, b"k").unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_insertion_order_and_duplicates_preserved() {
        let mut row = Row::empty(false);
        row.push(9, 0.0);
        row.push(3, 0.0);
        row.push(9, 0.0);

        let decoded = Row::decode(&row.encode(), false, b"k").unwrap();
        let ids: Vec<u32> = decoded.entries().iter().map(|e| e.doc_id).collect();
        assert_eq!(ids, vec![9, 3, 9]);
    }

    #[test]
    fn test_checksum_mismatch_detected() {
        let mut row = Row::empty(true);
        row.push(7, 0.5);
        let encoded = row.encode();

        for i in 0..encoded.len() {
            let mut corrupted = encoded.clone();
            corrupted[i] ^= 0x01;
            assert!(
                Row::decode(&corrupted, true, b"k").is_err(),
                "flip at byte {} went undetected",
                i
            );
        }
    }

    #[test]
    fn test_truncated_row_detected() {
        let mut row = Row::empty(false);
        row.push(1, 0.0);
        let encoded = row.encode();

        assert!(Row::decode(&encoded[..3], false, b"k").is_err());
        assert!(Row::decode(&encoded[..encoded.len() - 1], false, b"k").is_err());
    }

    #[test]
    fn test_count_payload_incoherence_detected() {
        let mut row = Row::empty(false);
        row.push(1, 0.0);
        row.push(2, 0.0);
        let mut encoded = row.encode();

        // Advertise 3 docs but keep the 2-doc payload, with a valid crc
        encoded[4..8].copy_from_slice(&3u32.to_le_bytes());
        let crc = {
            let mut hasher = Hasher::new();
            hasher.update(&encoded[4..]);
            hasher.finalize()
        };
        encoded[0..4].copy_from_slice(&crc.to_le_bytes());

        let err = Row::decode(&encoded, false, b"k").unwrap_err();
        assert!(err.to_string().contains("3 docs advertised"));
    }
}
