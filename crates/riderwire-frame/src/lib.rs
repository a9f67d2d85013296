//! Frame encode/decode and the message catalog.
//!
//! A frame is a 4-byte [`Header`] followed by `Header::length` payload
//! bytes:
//! - [`encode_frame`] builds the header from the payload so the type code
//!   and length always agree with it,
//! - [`parse_frame`] decodes one complete frame from a byte span,
//! - [`decode_frame`] splits frames off a growing buffer,
//! - [`FrameReader`] / [`FrameWriter`] do the same over `Read` / `Write`.
//!
//! The payload record is chosen by [`catalog`] from the header's type code
//! and, for codes with several layouts, the payload length.
//!
//! [`Header`]: riderwire_message::Header

pub mod catalog;
pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use catalog::{decode_payload, lookup, CatalogEntry, Payload, Variant};
pub use codec::{
    decode_frame, encode_frame, parse_frame, Frame, FrameConfig, RawFrame, PROTOCOL_MAX_PAYLOAD,
};
pub use error::{FrameError, Result};
pub use reader::FrameReader;
pub use writer::FrameWriter;
