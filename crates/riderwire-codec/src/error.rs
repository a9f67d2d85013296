/// Errors that can occur while decoding records.
///
/// Encoding never fails: a well-formed record can only hold values its
/// fields can represent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The input span does not have the record's declared size.
    #[error("{record}: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        record: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An enumerated field holds a value outside its declared set.
    #[error("unknown {tag} wire value {value:#x}")]
    UnknownTag { tag: &'static str, value: u64 },

    /// A tag name did not match any declared member.
    #[error("unknown {tag} name: {name}")]
    UnknownName { tag: &'static str, name: String },

    /// A text payload is not valid UTF-8.
    #[error("{record}: payload is not valid UTF-8 text")]
    InvalidText { record: &'static str },
}

impl CodecError {
    /// Build a size-mismatch error for `record`.
    pub fn size_mismatch(record: &'static str, expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            record,
            expected,
            actual,
        }
    }

    /// True for framing problems (wrong byte count).
    pub fn is_size_mismatch(&self) -> bool {
        matches!(self, Self::SizeMismatch { .. })
    }

    /// True when a tag value fell outside its declared set.
    pub fn is_unknown_tag(&self) -> bool {
        matches!(self, Self::UnknownTag { .. })
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
