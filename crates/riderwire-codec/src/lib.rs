//! Fixed-size record codec primitives for the CodingRider wire protocol.
//!
//! This is the lowest layer of riderwire. Every message payload is a
//! [`Record`]: a value with a known byte size that encodes to exactly that
//! many bytes and decodes from a span of exactly that length.
//!
//! - Scalars are little-endian, protocol-wide.
//! - Enumerated fields are closed sets declared with [`wire_tag!`].
//! - Composite records are declared with [`record!`]; the field list is the
//!   wire layout, decoded by one generic [`Slicer`] walk.
//!
//! No partial decodes: a record either decodes completely or the call
//! returns an error.

pub mod error;
pub mod record;
pub mod scalar;
pub mod tag;

pub use error::{CodecError, Result};
pub use record::{Component, Record, Slicer};

#[doc(hidden)]
pub use bytes;
