//! Flight control inputs.
//!
//! All four records share [`DataType::Control`]; the receiver tells them
//! apart by payload length.

use crate::kind::DataType;

payload! {
    /// Stick positions, each -100..=100.
    pub struct ControlQuad8 {
        pub roll: i8,
        pub pitch: i8,
        pub yaw: i8,
        pub throttle: i8,
    }
}

impl ControlQuad8 {
    pub fn new(roll: i8, pitch: i8, yaw: i8, throttle: i8) -> Self {
        Self {
            roll,
            pitch,
            yaw,
            throttle,
        }
    }
}

payload! {
    /// Stick positions plus a request for a record of `data_type` in reply.
    pub struct ControlQuad8AndRequestData {
        pub roll: i8,
        pub pitch: i8,
        pub yaw: i8,
        pub throttle: i8,
        pub data_type: DataType,
    }
}

payload! {
    /// Move to a relative position; distances in centimetres.
    pub struct ControlPosition16 {
        pub position_x: i16,
        pub position_y: i16,
        pub position_z: i16,
        pub velocity: i16,
        pub heading: i16,
        pub rotational_velocity: i16,
    }
}

payload! {
    /// Move to a relative position; distances in metres.
    pub struct ControlPosition {
        pub position_x: f32,
        pub position_y: f32,
        pub position_z: f32,
        pub velocity: f32,
        pub heading: i16,
        pub rotational_velocity: i16,
    }
}
