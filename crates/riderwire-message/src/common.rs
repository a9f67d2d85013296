//! Link housekeeping, device information and command records.

use std::cmp::Ordering;

use bytes::BufMut;
use riderwire_codec::{CodecError, Record, Result};

use crate::kind::{CommandType, DataType};
use crate::light::{Color, Colors, LightEvent};
use crate::system::{ModeUpdate, ModelNumber};

payload! {
    /// Link liveness probe.
    pub struct Ping {
        pub system_time: u64,
    }
}

payload! {
    /// Receipt for a frame of `data_type`.
    ///
    /// `crc16` is echoed as an opaque value; it is never computed or checked
    /// here.
    pub struct Ack {
        pub system_time: u64,
        pub data_type: DataType,
        pub crc16: u16,
    }
}

payload! {
    pub struct Error {
        pub system_time: u64,
        pub error_flags_for_sensor: u32,
        pub error_flags_for_state: u32,
    }
}

payload! {
    /// Ask the peer to send a record of `data_type`.
    pub struct Request {
        pub data_type: DataType,
    }
}

payload! {
    pub struct RequestOption {
        pub data_type: DataType,
        pub option: u32,
    }
}

/// Free-form text; the only record whose size follows its content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Record for Message {
    const NAME: &'static str = "Message";
    const FIXED_SIZE: Option<usize> = None;

    fn size(&self) -> usize {
        self.message.len()
    }

    fn encode_into<B: BufMut>(&self, dst: &mut B) {
        dst.put_slice(self.message.as_bytes());
    }

    /// Empty input is an empty message, not a failure.
    fn decode(src: &[u8]) -> Result<Self> {
        let message = std::str::from_utf8(src).map_err(|_| CodecError::InvalidText {
            record: Self::NAME,
        })?;
        Ok(Self::new(message))
    }
}

payload! {
    /// Firmware image checksums.
    pub struct SystemInformation {
        pub crc32_bootloader: u32,
        pub crc32_application: u32,
    }
}

payload! {
    /// Firmware version as build, minor and major.
    pub struct Version {
        pub build: u16,
        pub minor: u8,
        pub major: u8,
    }
}

impl Version {
    pub fn new(major: u8, minor: u8, build: u16) -> Self {
        Self {
            build,
            minor,
            major,
        }
    }

    /// All three parts packed into one comparable word.
    ///
    /// Always derived from the current fields, so it stays in step with them
    /// after mutation. Equal to the 4 wire bytes read as a little-endian u32.
    pub fn packed(&self) -> u32 {
        u32::from(self.build) | (u32::from(self.minor) << 16) | (u32::from(self.major) << 24)
    }

    pub fn from_packed(v: u32) -> Self {
        Self {
            build: (v & 0xFFFF) as u16,
            minor: ((v >> 16) & 0xFF) as u8,
            major: (v >> 24) as u8,
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.packed().cmp(&other.packed()))
    }
}

payload! {
    /// Model, firmware version and build date of a device.
    pub struct Information {
        pub mode_update: ModeUpdate,
        pub model_number: ModelNumber,
        pub version: Version,
        pub year: u16,
        pub month: u8,
        pub day: u8,
    }
}

payload! {
    pub struct UpdateLocation {
        pub index_block_next: u16,
    }
}

payload! {
    /// 16-byte device address.
    pub struct Address {
        pub address: [u8; 16],
    }
}

payload! {
    pub struct Pairing {
        pub address0: u16,
        pub address1: u16,
        pub address2: u16,
        pub address3: u16,
        pub address4: u16,
        pub channel0: u8,
    }
}

payload! {
    pub struct ResponseRate {
        pub response_rate: u8,
    }
}

payload! {
    pub struct Rssi {
        pub rssi: i8,
    }
}

payload! {
    /// A command and its option byte; the option's meaning depends on the
    /// command type.
    pub struct Command {
        pub command_type: CommandType,
        pub option: u8,
    }
}

impl Command {
    pub fn new(command_type: CommandType, option: u8) -> Self {
        Self {
            command_type,
            option,
        }
    }
}

payload! {
    pub struct CommandLightEvent {
        pub command: Command,
        pub event: LightEvent,
    }
}

payload! {
    pub struct CommandLightEventColor {
        pub command: Command,
        pub event: LightEvent,
        pub color: Color,
    }
}

payload! {
    pub struct CommandLightEventColors {
        pub command: Command,
        pub event: LightEvent,
        pub colors: Colors,
    }
}

#[cfg(test)]
mod tests {
    use riderwire_codec::Component;

    use super::*;

    #[test]
    fn ping_system_time_is_little_endian() {
        let ping = Ping {
            system_time: 123_456_789,
        };
        let bytes = ping.encode();
        assert_eq!(
            bytes.as_ref(),
            &[0x15, 0xCD, 0x5B, 0x07, 0x00, 0x00, 0x00, 0x00]
        );
        assert_eq!(Ping::decode(&bytes).unwrap().system_time, 123_456_789);
    }

    #[test]
    fn fixed_sizes_match_protocol() {
        assert_eq!(Ping::WIDTH, 8);
        assert_eq!(Ack::WIDTH, 11);
        assert_eq!(Error::WIDTH, 16);
        assert_eq!(Request::WIDTH, 1);
        assert_eq!(RequestOption::WIDTH, 5);
        assert_eq!(SystemInformation::WIDTH, 8);
        assert_eq!(Version::WIDTH, 4);
        assert_eq!(Information::WIDTH, 13);
        assert_eq!(UpdateLocation::WIDTH, 2);
        assert_eq!(Address::WIDTH, 16);
        assert_eq!(Pairing::WIDTH, 11);
        assert_eq!(ResponseRate::WIDTH, 1);
        assert_eq!(Rssi::WIDTH, 1);
        assert_eq!(Command::WIDTH, 2);
        assert_eq!(CommandLightEvent::WIDTH, 6);
        assert_eq!(CommandLightEventColor::WIDTH, 9);
        assert_eq!(CommandLightEventColors::WIDTH, 7);
    }

    #[test]
    fn ack_with_unknown_data_type_is_rejected() {
        let ack = Ack {
            system_time: 1,
            data_type: DataType::Ping,
            crc16: 0xBEEF,
        };
        let mut bytes = ack.encode().to_vec();
        assert_eq!(Ack::decode(&bytes).unwrap(), ack);

        bytes[8] = 0x05;
        let err = Ack::decode(&bytes).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnknownTag {
                tag: "DataType",
                value: 0x05,
            }
        );

        let err = Ack::decode(&bytes[..10]).unwrap_err();
        assert!(err.is_size_mismatch());
    }

    #[test]
    fn empty_message_roundtrip() {
        let message = Message::default();
        assert_eq!(message.size(), 0);
        assert!(message.encode().is_empty());
        assert_eq!(Message::decode(&[]).unwrap(), Message::default());
        assert_eq!(<Message as Record>::FIXED_SIZE, None);
    }

    #[test]
    fn message_size_follows_content() {
        let message = Message::new("takeoff ok");
        assert_eq!(message.size(), 10);
        let bytes = message.encode();
        assert_eq!(bytes.as_ref(), b"takeoff ok");
        assert_eq!(Message::decode(&bytes).unwrap(), message);
    }

    #[test]
    fn message_rejects_invalid_utf8() {
        let err = Message::decode(&[0x66, 0xFF, 0x66]).unwrap_err();
        assert_eq!(err, CodecError::InvalidText { record: "Message" });
    }

    #[test]
    fn version_packed_tracks_fields() {
        let mut version = Version::new(1, 2, 300);
        assert_eq!(version.packed(), 0x0102_012C);
        let bytes = version.encode();
        assert_eq!(
            u32::from_le_bytes(bytes.as_ref().try_into().unwrap()),
            version.packed()
        );

        version.minor = 9;
        assert_eq!(version.packed(), 0x0109_012C);
        assert_eq!(Version::from_packed(version.packed()), version);
    }

    #[test]
    fn version_orders_by_major_minor_build() {
        assert!(Version::new(2, 0, 0) > Version::new(1, 9, 999));
        assert!(Version::new(1, 2, 5) < Version::new(1, 3, 0));
        assert!(Version::new(1, 2, 5) > Version::new(1, 2, 4));
    }

    #[test]
    fn information_nests_version() {
        let info = Information {
            mode_update: ModeUpdate::Complete,
            model_number: ModelNumber::Drone8DroneP1,
            version: Version::new(21, 1, 5),
            year: 2024,
            month: 5,
            day: 17,
        };
        let bytes = info.encode();
        assert_eq!(bytes.len(), 13);
        assert_eq!(&bytes[1..5], &[0x01, 0x10, 0x08, 0x00]);
        assert_eq!(&bytes[5..9], &[0x05, 0x00, 0x01, 21]);
        assert_eq!(Information::decode(&bytes).unwrap(), info);
    }

    #[test]
    fn information_rejects_unknown_model() {
        let mut bytes = Information::default().encode().to_vec();
        bytes[1..5].copy_from_slice(&0xDEAD_BEEFu32.to_le_bytes());
        let err = Information::decode(&bytes).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnknownTag {
                tag: "ModelNumber",
                value: 0xDEAD_BEEF,
            }
        );
    }

    #[test]
    fn command_light_event_roundtrip() {
        let record = CommandLightEvent {
            command: Command::new(CommandType::LoadDefaultColor, 3),
            event: LightEvent {
                event: 0x25,
                interval: 500,
                repeat: 4,
            },
        };
        let bytes = record.encode();
        assert_eq!(bytes.len(), Command::WIDTH + LightEvent::WIDTH);
        assert_eq!(bytes.as_ref(), &[0x0C, 0x03, 0x25, 0xF4, 0x01, 0x04]);
        assert_eq!(CommandLightEvent::decode(&bytes).unwrap(), record);
    }

    #[test]
    fn command_light_event_colors_rejects_unknown_colour() {
        let record = CommandLightEventColors {
            command: Command::new(CommandType::Stop, 0),
            event: LightEvent::default(),
            colors: Colors::Red,
        };
        let mut bytes = record.encode().to_vec();
        assert_eq!(bytes[6], 114);
        bytes[6] = 200;
        assert!(CommandLightEventColors::decode(&bytes)
            .unwrap_err()
            .is_unknown_tag());
    }
}
