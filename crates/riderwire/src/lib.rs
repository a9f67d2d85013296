//! Codec for the CodingRider drone wire protocol.
//!
//! Every frame is a 4-byte header (type code, payload length, source,
//! destination) followed by one fixed-layout little-endian payload record.
//!
//! # Crate Structure
//!
//! - [`codec`] — scalar, tag and composite record codecs
//! - [`message`] — the header, tag vocabularies and payload records
//! - [`frame`] — frame encode/decode, the message catalog, stream adapters
//!
//! ```
//! use riderwire::frame::{parse_frame, Frame, FrameConfig};
//! use riderwire::message::common::Ping;
//! use riderwire::message::DeviceType;
//!
//! let frame = Frame::new(DeviceType::Controller, DeviceType::Drone, Ping { system_time: 1 })?;
//! let bytes = frame.encode()?;
//! assert_eq!(&bytes[..4], &[0x01, 0x08, 0x02, 0x01]);
//! assert_eq!(parse_frame(&bytes, &FrameConfig::default())?, frame);
//! # Ok::<(), riderwire::frame::FrameError>(())
//! ```

/// Re-export codec primitives.
pub mod codec {
    pub use riderwire_codec::*;
}

/// Re-export header, vocabularies and payload records.
pub mod message {
    pub use riderwire_message::*;
}

/// Re-export frame types.
pub mod frame {
    pub use riderwire_frame::*;
}
