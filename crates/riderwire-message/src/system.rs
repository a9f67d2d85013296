//! Device mode vocabularies reported in state and information records.

tag! {
    #[derive(Default)]
    pub enum ModeSystem: u8 {
        #[default]
        None = 0x00,
        Boot = 0x10,
        Start = 0x11,
        Running = 0x12,
        ReadyToReset = 0x13,
        Error = 0xA0,
    }
}

tag! {
    #[derive(Default)]
    pub enum ModeFlight: u8 {
        #[default]
        None = 0x00,
        Ready = 0x10,
        Start = 0x11,
        TakeOff = 0x12,
        Flight = 0x13,
        Landing = 0x14,
        Flip = 0x15,
        Reverse = 0x16,
        Stop = 0x20,
        Accident = 0x30,
        Error = 0x31,
        Test = 0x40,
    }
}

tag! {
    #[derive(Default)]
    pub enum ModeControlFlight: u8 {
        #[default]
        None = 0x00,
        Attitude = 0x10,
        Position = 0x11,
        Manual = 0x12,
        Rate = 0x13,
        Function = 0x14,
    }
}

tag! {
    #[derive(Default)]
    pub enum ModeMovement: u8 {
        #[default]
        None = 0x00,
        Ready = 0x01,
        Hovering = 0x02,
        Moving = 0x03,
        ReturnHome = 0x04,
    }
}

tag! {
    #[derive(Default)]
    pub enum Headless: u8 {
        #[default]
        None = 0x00,
        Headless = 0x01,
        Normal = 0x02,
    }
}

tag! {
    #[derive(Default)]
    pub enum SensorOrientation: u8 {
        #[default]
        None = 0x00,
        Normal = 0x01,
        ReverseStart = 0x02,
        Reversed = 0x03,
    }
}

tag! {
    /// Motor spin direction.
    #[derive(Default)]
    pub enum Rotation: u8 {
        #[default]
        None = 0x00,
        Clockwise = 0x01,
        Counterclockwise = 0x02,
    }
}

tag! {
    /// Firmware update state.
    #[derive(Default)]
    pub enum ModeUpdate: u8 {
        #[default]
        None = 0x00,
        Ready = 0x01,
        Update = 0x02,
        Complete = 0x03,
        Failed = 0x04,
        NotAvailable = 0x05,
        RunApplication = 0x06,
        NotRegistered = 0x07,
    }
}

tag! {
    /// Hardware model, 4 bytes on the wire: generation, device kind, revision.
    #[derive(Default)]
    pub enum ModelNumber: u32 {
        #[default]
        None = 0x0000_0000,
        Drone8DroneP1 = 0x0008_1001,
        Drone8DroneP2 = 0x0008_1002,
        Drone8ControllerP1 = 0x0008_2001,
        Drone8ControllerP2 = 0x0008_2002,
        Drone8LinkP0 = 0x0008_3000,
        Drone8TesterP6 = 0x0008_A006,
    }
}
