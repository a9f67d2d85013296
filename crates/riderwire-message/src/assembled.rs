//! Telemetry snapshots that bundle several readings into one frame.

payload! {
    /// Snapshot streamed to the controller.
    pub struct InformationAssembledForController {
        pub angle_roll: i16,
        pub angle_pitch: i16,
        pub angle_yaw: i16,

        pub rpm: u16,

        pub position_x: i16,
        pub position_y: i16,
        pub position_z: i16,

        pub speed_x: i8,
        pub speed_y: i8,

        pub range_height: u8,

        pub rssi: i8,
    }
}

payload! {
    /// Snapshot for entry-level clients.
    pub struct InformationAssembledForEntry {
        pub angle_roll: i16,
        pub angle_pitch: i16,
        pub angle_yaw: i16,

        pub position_x: i16,
        pub position_y: i16,
        pub position_z: i16,

        pub range_height: i16,
        pub altitude: f32,
    }
}
