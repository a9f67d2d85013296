//! Envelope header and payload records of the CodingRider wire protocol.
//!
//! Every frame on the link is a 4-byte [`Header`] followed by one payload
//! record. The payload carries no tag of its own; its type is chosen by
//! [`Header::data_type`].
//!
//! Records are grouped the way the protocol groups them:
//! - [`common`] — ping/ack/error, requests, device information, commands
//! - [`control`] — stick and position control
//! - [`light`] — LED modes, events and colours
//! - [`buzzer`] — buzzer control
//! - [`input`] — buttons and joysticks
//! - [`sensor`] — state, attitude and sensor readings
//! - [`device`] — motor control
//! - [`assembled`] — bundled telemetry snapshots
//!
//! Enumerated vocabularies shared across groups live in [`kind`] and
//! [`system`].

/// Declare a tag type, adding serde derives when the `serde` feature is on.
macro_rules! tag {
    ($(#[$meta:meta])* $vis:vis enum $($rest:tt)*) => {
        riderwire_codec::wire_tag! {
            $(#[$meta])*
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            $vis enum $($rest)*
        }
    };
}

/// Declare a fixed-size payload record, adding serde derives when the
/// `serde` feature is on.
macro_rules! payload {
    ($(#[$meta:meta])* $vis:vis struct $($rest:tt)*) => {
        riderwire_codec::record! {
            $(#[$meta])*
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            $vis struct $($rest)*
        }
    };
}

pub mod assembled;
pub mod buzzer;
pub mod common;
pub mod control;
pub mod device;
pub mod header;
pub mod input;
pub mod kind;
pub mod light;
pub mod sensor;
pub mod system;

pub use header::{Header, HEADER_SIZE};
pub use kind::{CommandType, DataType, DeviceType};
pub use riderwire_codec::{CodecError, Component, Record, Result};
