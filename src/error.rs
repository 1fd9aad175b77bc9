use thiserror::Error;

/// Main error type for cuttle operations
#[derive(Error, Debug)]
pub enum CuttleError {
    #[error("property '{property}': {detail}")]
    SchemaMismatch { property: String, detail: String },

    #[error("no bucket for property '{0}'")]
    MissingBucket(String),

    #[error("corrupt row for term '{term}': {detail}")]
    CorruptRow { term: String, detail: String },

    #[error("value cannot be encoded: {0}")]
    Encode(String),

    #[error("unknown class '{0}'")]
    UnknownClass(String),

    #[error("store error: {0}")]
    Store(#[from] fjall::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for cuttle operations
pub type Result<T> = std::result::Result<T, CuttleError>;

impl CuttleError {
    pub(crate) fn corrupt_row(term: &[u8], detail: impl Into<String>) -> Self {
        CuttleError::CorruptRow {
            term: display_term(term),
            detail: detail.into(),
        }
    }
}

/// Render a term key for error messages: UTF-8 when the bytes allow it,
/// hex otherwise. Raw byte offsets never appear in user-visible errors.
pub(crate) fn display_term(term: &[u8]) -> String {
    match std::str::from_utf8(term) {
        Ok(s) => s.to_string(),
        Err(_) => term.iter().map(|b| format!("{b:02x}")).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CuttleError::MissingBucket("title".to_string());
        assert_eq!(err.to_string(), "no bucket for property 'title'");
    }

    #[test]
    fn test_corrupt_row_names_term_as_utf8() {
        let err = CuttleError::corrupt_row(b"hello", "checksum mismatch");
        assert_eq!(
            err.to_string(),
            "corrupt row for term 'hello': checksum mismatch"
        );
    }

    #[test]
    fn test_corrupt_row_names_term_as_hex() {
        let err = CuttleError::corrupt_row(&[0x80, 0x00, 0xff], "truncated");
        assert!(err.to_string().contains("8000ff"));
    }
}
