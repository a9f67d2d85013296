use riderwire_codec::CodecError;
use riderwire_message::DataType;

/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The header or payload bytes are malformed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The type code is valid but no payload record is registered for it.
    #[error("no handler for data type {0}")]
    NoHandler(DataType),

    /// The bytes after the header disagree with the header's length field.
    #[error("header declares {declared} payload bytes, frame carries {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    /// A frame's header names a different type code than its payload.
    #[error("header declares data type {declared}, payload is {actual}")]
    TypeMismatch { declared: DataType, actual: DataType },

    /// The payload exceeds the configured or protocol maximum.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before a complete frame was received.
    #[error("connection closed (incomplete frame)")]
    ConnectionClosed,
}

impl FrameError {
    /// True for errors caused by the frame's bytes rather than the stream.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::Codec(_)
                | Self::LengthMismatch { .. }
                | Self::TypeMismatch { .. }
                | Self::PayloadTooLarge { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
