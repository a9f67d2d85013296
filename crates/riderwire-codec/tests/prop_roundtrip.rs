use proptest::prelude::*;
use riderwire_codec::{record, wire_tag, Component, Record};

wire_tag! {
    #[derive(Default)]
    pub enum Mode: u8 {
        #[default]
        Idle = 0x00,
        Hover = 0x10,
        Cruise = 0x11,
        Land = 0x14,
    }
}

record! {
    pub struct Block {
        pub x: i8,
        pub y: i8,
        pub mode: Mode,
    }
}

record! {
    pub struct Telemetry {
        pub stamp: u64,
        pub blocks: [Block; 2],
        pub heading: i16,
        pub altitude: f32,
        pub flags: u32,
    }
}

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop::sample::select(Mode::ALL.to_vec())
}

fn block_strategy() -> impl Strategy<Value = Block> {
    (any::<i8>(), any::<i8>(), mode_strategy()).prop_map(|(x, y, mode)| Block { x, y, mode })
}

fn telemetry_strategy() -> impl Strategy<Value = Telemetry> {
    (
        any::<u64>(),
        block_strategy(),
        block_strategy(),
        any::<i16>(),
        any::<f32>().prop_filter("NaN never compares equal", |v| !v.is_nan()),
        any::<u32>(),
    )
        .prop_map(|(stamp, a, b, heading, altitude, flags)| Telemetry {
            stamp,
            blocks: [a, b],
            heading,
            altitude,
            flags,
        })
}

proptest! {
    #[test]
    fn prop_scalar_roundtrip(a in any::<u16>(), b in any::<i32>(), c in any::<u64>()) {
        let mut buf = Vec::new();
        a.put(&mut buf);
        b.put(&mut buf);
        c.put(&mut buf);
        prop_assert_eq!(buf.len(), 2 + 4 + 8);
        prop_assert_eq!(u16::take(&buf[..2]).unwrap(), a);
        prop_assert_eq!(i32::take(&buf[2..6]).unwrap(), b);
        prop_assert_eq!(u64::take(&buf[6..]).unwrap(), c);
    }

    #[test]
    fn prop_record_roundtrip(value in telemetry_strategy()) {
        let bytes = value.encode();
        prop_assert_eq!(bytes.len(), Telemetry::WIDTH);
        prop_assert_eq!(bytes.len(), value.size());
        prop_assert_eq!(Telemetry::decode(&bytes).unwrap(), value);
    }

    #[test]
    fn prop_wrong_length_always_fails(value in telemetry_strategy(), cut in 0usize..Telemetry::WIDTH) {
        let bytes = value.encode();
        let err = Telemetry::decode(&bytes[..cut]).unwrap_err();
        prop_assert!(err.is_size_mismatch());
    }

    #[test]
    fn prop_unknown_mode_byte_rejected(raw in any::<u8>()) {
        let result = Mode::take(&[raw]);
        if Mode::from_wire(raw).is_some() {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(result.unwrap_err().is_unknown_tag());
        }
    }
}
