//! Message-type codes, command codes and endpoint identifiers.

tag! {
    /// Message-type code carried in every header.
    ///
    /// `EndOfType` bounds the code range and never names a real message.
    #[derive(Default)]
    pub enum DataType: u8 {
        #[default]
        None = 0x00,
        Ping = 0x01,
        Ack = 0x02,
        Error = 0x03,
        Request = 0x04,
        Information = 0x07,
        Control = 0x10,

        Command = 0x11,
        Pairing = 0x12,
        ResponseRate = 0x13,

        LightManual = 0x20,
        LightMode = 0x21,
        LightEvent = 0x22,

        RawMotion = 0x30,

        State = 0x40,
        Altitude = 0x43,
        Motion = 0x44,
        VisionSensor = 0x47,

        Count = 0x50,
        Bias = 0x51,
        Trim = 0x52,
        LostConnection = 0x54,

        Motor = 0x60,
        Buzzer = 0x62,
        Battery = 0x64,

        Button = 0x70,
        Joystick = 0x71,

        InformationAssembledForController = 0xA0,

        EndOfType = 0xDC,
    }
}

impl DataType {
    /// True for the range sentinel and the empty code.
    pub const fn is_structural(self) -> bool {
        matches!(self, Self::None | Self::EndOfType)
    }
}

tag! {
    /// Command selector carried by [`Command`](crate::common::Command).
    #[derive(Default)]
    pub enum CommandType: u8 {
        #[default]
        None = 0x00,

        Stop = 0x01,

        ModeControlFlight = 0x02,
        Headless = 0x03,
        ControlSpeed = 0x04,

        ClearBias = 0x05,
        ClearTrim = 0x06,

        FlightEvent = 0x07,

        SetDefault = 0x08,
        /// Controller operating mode (0x10 control, 0x80 link).
        ModeController = 0x0A,
        /// Link role (0 client, 1 server, 2 start pairing).
        Link = 0x0B,
        LoadDefaultColor = 0x0C,

        Trim = 0x0D,
        SetSwarm = 0x0F,

        /// Factory test lock.
        ModeTest = 0xF0,

        EndOfType = 0xEC,
    }
}

tag! {
    /// Endpoint identifier used for header source and destination.
    #[derive(Default)]
    pub enum DeviceType: u8 {
        #[default]
        None = 0x00,

        Drone = 0x01,
        Controller = 0x02,

        LinkClient = 0x03,
        LinkServer = 0x04,
        BleClient = 0x05,
        BleServer = 0x06,

        Range = 0x07,
        Tester = 0x08,
        Monitor = 0x09,
        Updater = 0x0A,

        Broadcasting = 0xFF,
    }
}
