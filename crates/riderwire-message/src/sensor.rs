//! Flight state and sensor readings reported by the drone.

use crate::system::{
    Headless, ModeControlFlight, ModeFlight, ModeMovement, ModeSystem, SensorOrientation,
};

payload! {
    /// Unfiltered accelerometer and gyro samples.
    pub struct RawMotion {
        pub accel_x: i16,
        pub accel_y: i16,
        pub accel_z: i16,
        pub gyro_roll: i16,
        pub gyro_pitch: i16,
        pub gyro_yaw: i16,
    }
}

payload! {
    /// Flight controller modes and battery level.
    pub struct State {
        pub mode_system: ModeSystem,
        pub mode_flight: ModeFlight,
        pub mode_control_flight: ModeControlFlight,
        pub mode_movement: ModeMovement,
        pub headless: Headless,
        pub control_speed: u8,
        pub sensor_orientation: SensorOrientation,
        /// Percent, 0..=100.
        pub battery: u8,
    }
}

payload! {
    /// Orientation in degrees.
    pub struct Attitude {
        pub roll: i16,
        pub pitch: i16,
        pub yaw: i16,
    }
}

payload! {
    /// Position in metres.
    pub struct Position {
        pub x: f32,
        pub y: f32,
        pub z: f32,
    }
}

payload! {
    pub struct Altitude {
        pub temperature: f32,
        pub pressure: f32,
        pub altitude: f32,
        pub range_height: f32,
    }
}

payload! {
    pub struct Motion {
        pub accel_x: i16,
        pub accel_y: i16,
        pub accel_z: i16,
        pub gyro_roll: i16,
        pub gyro_pitch: i16,
        pub gyro_yaw: i16,
        pub angle_roll: i16,
        pub angle_pitch: i16,
        pub angle_yaw: i16,
    }
}

payload! {
    /// Distance sensor readings in millimetres, one per face.
    pub struct Range {
        pub left: i16,
        pub front: i16,
        pub right: i16,
        pub rear: i16,
        pub top: i16,
        pub bottom: i16,
    }
}

payload! {
    pub struct Trim {
        pub roll: i16,
        pub pitch: i16,
        pub yaw: i16,
        pub throttle: i16,
    }
}

payload! {
    /// Optical-flow position estimate.
    pub struct VisionSensor {
        pub x: f32,
        pub y: f32,
        pub z: f32,
    }
}

payload! {
    /// Lifetime flight counters.
    pub struct Count {
        pub time_flight: u64,
        pub count_take_off: u16,
        pub count_landing: u16,
        pub count_accident: u16,
    }
}

payload! {
    pub struct Bias {
        pub accel_x: i16,
        pub accel_y: i16,
        pub accel_z: i16,
        pub gyro_roll: i16,
        pub gyro_pitch: i16,
        pub gyro_yaw: i16,
    }
}

payload! {
    pub struct Weight {
        pub weight: f32,
    }
}

payload! {
    /// Timeouts applied when the controller link drops.
    pub struct LostConnection {
        pub time_neutral: u16,
        pub time_landing: u16,
        pub time_stop: u32,
    }
}

#[cfg(test)]
mod tests {
    use riderwire_codec::{CodecError, Component, Record};

    use super::*;

    #[test]
    fn fixed_sizes_match_protocol() {
        assert_eq!(RawMotion::WIDTH, 12);
        assert_eq!(State::WIDTH, 8);
        assert_eq!(Attitude::WIDTH, 6);
        assert_eq!(Position::WIDTH, 12);
        assert_eq!(Altitude::WIDTH, 16);
        assert_eq!(Motion::WIDTH, 18);
        assert_eq!(Range::WIDTH, 12);
        assert_eq!(Trim::WIDTH, 8);
        assert_eq!(VisionSensor::WIDTH, 12);
        assert_eq!(Count::WIDTH, 14);
        assert_eq!(Bias::WIDTH, 12);
        assert_eq!(Weight::WIDTH, 4);
        assert_eq!(LostConnection::WIDTH, 8);
    }

    #[test]
    fn state_decodes_each_mode() {
        let bytes = [0x12, 0x13, 0x10, 0x02, 0x02, 0x01, 0x01, 87];
        let state = State::decode(&bytes).unwrap();
        assert_eq!(state.mode_system, ModeSystem::Running);
        assert_eq!(state.mode_flight, ModeFlight::Flight);
        assert_eq!(state.mode_control_flight, ModeControlFlight::Attitude);
        assert_eq!(state.mode_movement, ModeMovement::Hovering);
        assert_eq!(state.headless, Headless::Normal);
        assert_eq!(state.control_speed, 1);
        assert_eq!(state.sensor_orientation, SensorOrientation::Normal);
        assert_eq!(state.battery, 87);
        assert_eq!(state.encode().as_ref(), &bytes);
    }

    #[test]
    fn state_with_unknown_flight_mode_is_rejected() {
        let err = State::decode(&[0x12, 0x99, 0x10, 0x02, 0x02, 0x01, 0x01, 87]).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnknownTag {
                tag: "ModeFlight",
                value: 0x99,
            }
        );
    }

    #[test]
    fn attitude_is_signed_little_endian() {
        let attitude = Attitude {
            roll: -2,
            pitch: 300,
            yaw: -180,
        };
        assert_eq!(
            attitude.encode().as_ref(),
            &[0xFE, 0xFF, 0x2C, 0x01, 0x4C, 0xFF]
        );
    }

    #[test]
    fn count_has_wide_flight_time() {
        let count = Count {
            time_flight: u64::MAX,
            count_take_off: 12,
            count_landing: 11,
            count_accident: 1,
        };
        let bytes = count.encode();
        assert_eq!(&bytes[..8], &[0xFF; 8]);
        assert_eq!(Count::decode(&bytes).unwrap(), count);
        assert!(Count::decode(&bytes[..13]).unwrap_err().is_size_mismatch());
    }
}
