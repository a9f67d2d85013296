use bytes::{Buf, Bytes, BytesMut};
use riderwire_codec::Record;
use riderwire_message::{DeviceType, Header, HEADER_SIZE};
use tracing::{debug, trace};

use crate::catalog::{decode_payload, Payload};
use crate::error::{FrameError, Result};

/// Largest payload the one-byte length field can describe.
pub const PROTOCOL_MAX_PAYLOAD: usize = u8::MAX as usize;

/// A decoded frame: header plus typed payload.
///
/// Deserializing checks that the header's type code and length agree with
/// the payload.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedFrame")
)]
pub struct Frame {
    pub header: Header,
    pub payload: Payload,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedFrame {
    header: Header,
    payload: Payload,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedFrame> for Frame {
    type Error = FrameError;

    fn try_from(frame: UncheckedFrame) -> Result<Self> {
        let UncheckedFrame { header, payload } = frame;
        let actual = payload.data_type();
        if header.data_type != actual {
            return Err(FrameError::TypeMismatch {
                declared: header.data_type,
                actual,
            });
        }
        let declared = usize::from(header.length);
        if declared != payload.size() {
            return Err(FrameError::LengthMismatch {
                declared,
                actual: payload.size(),
            });
        }
        Ok(Self { header, payload })
    }
}

impl Frame {
    /// Build a frame whose header matches `payload`.
    pub fn new(from: DeviceType, to: DeviceType, payload: impl Into<Payload>) -> Result<Self> {
        let payload = payload.into();
        let header = header_for(from, to, &payload)?;
        Ok(Self { header, payload })
    }

    /// The total wire size of this frame (header + payload).
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.payload.size()
    }

    /// Encode with a header recomputed from the payload.
    pub fn encode(&self) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(self.wire_size());
        encode_frame(self.header.from, self.header.to, &self.payload, &mut buf)?;
        Ok(buf.freeze())
    }
}

/// A frame split off a stream whose payload has not been decoded yet.
///
/// `payload.len()` always equals `header.length`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFrame {
    pub header: Header,
    pub payload: Bytes,
}

impl RawFrame {
    /// Decode the payload through the catalog.
    pub fn decode(&self) -> Result<Frame> {
        let payload = decode_payload(self.header.data_type, &self.payload)?;
        Ok(Frame {
            header: self.header.clone(),
            payload,
        })
    }

    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }
}

fn header_for(from: DeviceType, to: DeviceType, payload: &Payload) -> Result<Header> {
    let size = payload.size();
    let length = u8::try_from(size).map_err(|_| FrameError::PayloadTooLarge {
        size,
        max: PROTOCOL_MAX_PAYLOAD,
    })?;
    Ok(Header::new(payload.data_type(), length, from, to))
}

/// Encode a frame into the wire format.
///
/// The header's type code and length are taken from `payload`, so they
/// cannot disagree with it. Returns the header that was written.
///
/// Wire format:
/// ```text
/// ┌───────────┬──────────┬──────────┬──────────┬──────────────────┐
/// │ DataType  │ Length   │ From     │ To       │ Payload          │
/// │ (1B)      │ (1B)     │ (1B)     │ (1B)     │ (Length bytes)   │
/// └───────────┴──────────┴──────────┴──────────┴──────────────────┘
/// ```
pub fn encode_frame(
    from: DeviceType,
    to: DeviceType,
    payload: &Payload,
    dst: &mut BytesMut,
) -> Result<Header> {
    let header = header_for(from, to, payload)?;
    dst.reserve(HEADER_SIZE + payload.size());
    header.encode_into(dst);
    payload.encode_into(dst);
    trace!(
        data_type = %header.data_type,
        length = header.length,
        from = %header.from,
        to = %header.to,
        "encoded frame"
    );
    Ok(header)
}

/// Decode a frame from a buffer.
///
/// Returns `Ok(None)` if the buffer doesn't contain a complete frame yet.
/// On success, consumes the frame bytes from the buffer. A malformed header
/// is an error and leaves the buffer untouched.
pub fn decode_frame(src: &mut BytesMut, config: &FrameConfig) -> Result<Option<RawFrame>> {
    if src.len() < HEADER_SIZE {
        return Ok(None);
    }

    let header = Header::decode(&src[..HEADER_SIZE]).inspect_err(|err| {
        debug!(%err, "rejected frame header");
    })?;

    let payload_len = usize::from(header.length);
    if payload_len > config.max_payload_size {
        debug!(
            data_type = %header.data_type,
            size = payload_len,
            max = config.max_payload_size,
            "rejected oversized frame"
        );
        return Err(FrameError::PayloadTooLarge {
            size: payload_len,
            max: config.max_payload_size,
        });
    }

    let total = HEADER_SIZE + payload_len;
    if src.len() < total {
        return Ok(None);
    }

    src.advance(HEADER_SIZE);
    let payload = src.split_to(payload_len).freeze();
    trace!(data_type = %header.data_type, length = payload_len, "split frame");

    Ok(Some(RawFrame { header, payload }))
}

/// Decode one complete frame from `src`.
///
/// With `strict_length` the bytes after the header must number exactly
/// `header.length`; otherwise they are handed to the catalog as they are.
pub fn parse_frame(src: &[u8], config: &FrameConfig) -> Result<Frame> {
    let header = Header::decode(&src[..src.len().min(HEADER_SIZE)]).inspect_err(|err| {
        debug!(%err, "rejected frame header");
    })?;
    let payload = &src[HEADER_SIZE..];
    let declared = usize::from(header.length);

    if declared > config.max_payload_size {
        debug!(size = declared, max = config.max_payload_size, "rejected oversized frame");
        return Err(FrameError::PayloadTooLarge {
            size: declared,
            max: config.max_payload_size,
        });
    }
    if config.strict_length && payload.len() != declared {
        debug!(declared, actual = payload.len(), "rejected frame length");
        return Err(FrameError::LengthMismatch {
            declared,
            actual: payload.len(),
        });
    }

    let payload = decode_payload(header.data_type, payload).inspect_err(|err| {
        debug!(data_type = %header.data_type, %err, "rejected payload");
    })?;
    trace!(data_type = %header.data_type, record = payload.name(), "decoded frame");

    Ok(Frame { header, payload })
}

/// Configuration for the frame codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameConfig {
    /// Maximum payload size in bytes. Default: 255, the protocol maximum.
    pub max_payload_size: usize,
    /// Require the header length to match the bytes present. Default: true.
    pub strict_length: bool,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_payload_size: PROTOCOL_MAX_PAYLOAD,
            strict_length: true,
        }
    }
}
