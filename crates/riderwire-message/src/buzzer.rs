//! Buzzer control.

tag! {
    /// How [`Buzzer::value`] is interpreted and whether it replaces or
    /// queues behind the current sound.
    #[derive(Default)]
    pub enum BuzzerMode: u8 {
        /// Silence the buzzer; only meaningful when sent.
        #[default]
        Stop = 0,

        MuteInstantly = 1,
        MuteContinually = 2,

        ScaleInstantly = 3,
        ScaleContinually = 4,

        HzInstantly = 5,
        HzContinually = 6,

        EndOfType = 7,
    }
}

impl BuzzerMode {
    /// True when the value is a [`BuzzerScale`] note.
    pub const fn is_scale(self) -> bool {
        matches!(self, Self::ScaleInstantly | Self::ScaleContinually)
    }

    /// True when the value is a frequency in hertz.
    pub const fn is_hz(self) -> bool {
        matches!(self, Self::HzInstantly | Self::HzContinually)
    }
}

tag! {
    /// Notes C1..B8 in semitone steps, plus control values.
    pub enum BuzzerScale: u8 {
        C1 = 0x00, CS1 = 0x01, D1 = 0x02, DS1 = 0x03, E1 = 0x04, F1 = 0x05,
        FS1 = 0x06, G1 = 0x07, GS1 = 0x08, A1 = 0x09, AS1 = 0x0A, B1 = 0x0B,
        C2 = 0x0C, CS2 = 0x0D, D2 = 0x0E, DS2 = 0x0F, E2 = 0x10, F2 = 0x11,
        FS2 = 0x12, G2 = 0x13, GS2 = 0x14, A2 = 0x15, AS2 = 0x16, B2 = 0x17,
        C3 = 0x18, CS3 = 0x19, D3 = 0x1A, DS3 = 0x1B, E3 = 0x1C, F3 = 0x1D,
        FS3 = 0x1E, G3 = 0x1F, GS3 = 0x20, A3 = 0x21, AS3 = 0x22, B3 = 0x23,
        C4 = 0x24, CS4 = 0x25, D4 = 0x26, DS4 = 0x27, E4 = 0x28, F4 = 0x29,
        FS4 = 0x2A, G4 = 0x2B, GS4 = 0x2C, A4 = 0x2D, AS4 = 0x2E, B4 = 0x2F,
        C5 = 0x30, CS5 = 0x31, D5 = 0x32, DS5 = 0x33, E5 = 0x34, F5 = 0x35,
        FS5 = 0x36, G5 = 0x37, GS5 = 0x38, A5 = 0x39, AS5 = 0x3A, B5 = 0x3B,
        C6 = 0x3C, CS6 = 0x3D, D6 = 0x3E, DS6 = 0x3F, E6 = 0x40, F6 = 0x41,
        FS6 = 0x42, G6 = 0x43, GS6 = 0x44, A6 = 0x45, AS6 = 0x46, B6 = 0x47,
        C7 = 0x48, CS7 = 0x49, D7 = 0x4A, DS7 = 0x4B, E7 = 0x4C, F7 = 0x4D,
        FS7 = 0x4E, G7 = 0x4F, GS7 = 0x50, A7 = 0x51, AS7 = 0x52, B7 = 0x53,
        C8 = 0x54, CS8 = 0x55, D8 = 0x56, DS8 = 0x57, E8 = 0x58, F8 = 0x59,
        FS8 = 0x5A, G8 = 0x5B, GS8 = 0x5C, A8 = 0x5D, AS8 = 0x5E, B8 = 0x5F,

        EndOfType = 0x60,

        Mute = 0xEE,
        Fin = 0xFF,
    }
}

tag! {
    /// Built-in melodies.
    pub enum BuzzerMelody: u8 {
        DoMiSol = 0x00,
        SolMiDo = 0x01,
        LaLa = 0x02,
        SiRaSiRa = 0x03,

        Warning1 = 0x04,
        Warning2 = 0x05,
        Warning3 = 0x06,
        Warning4 = 0x07,

        Du = 0x08,
        DuDu = 0x09,
        DiDic = 0x0A,
        DiDic2 = 0x0B,
        Di = 0x0C,
        DiDi = 0x0D,

        BuzzSound1 = 0x0E,
        BuzzSound2 = 0x0F,
        BuzzSound3 = 0x10,
        BuzzSound4 = 0x11,

        Button = 0x12,
        Shot = 0x13,

        EndOfType = 0x14,
    }
}

payload! {
    /// Play a note, a frequency or silence for `time` milliseconds.
    pub struct Buzzer {
        pub mode: BuzzerMode,
        /// Note or frequency, depending on `mode`.
        pub value: u16,
        pub time: u16,
    }
}

impl Buzzer {
    pub fn stop() -> Self {
        Self::default()
    }

    pub fn mute(time: u16, queued: bool) -> Self {
        let mode = if queued {
            BuzzerMode::MuteContinually
        } else {
            BuzzerMode::MuteInstantly
        };
        Self {
            mode,
            value: u16::from(BuzzerScale::Mute.to_wire()),
            time,
        }
    }

    pub fn scale(note: BuzzerScale, time: u16, queued: bool) -> Self {
        let mode = if queued {
            BuzzerMode::ScaleContinually
        } else {
            BuzzerMode::ScaleInstantly
        };
        Self {
            mode,
            value: u16::from(note.to_wire()),
            time,
        }
    }

    pub fn hz(hz: u16, time: u16, queued: bool) -> Self {
        let mode = if queued {
            BuzzerMode::HzContinually
        } else {
            BuzzerMode::HzInstantly
        };
        Self {
            mode,
            value: hz,
            time,
        }
    }

    /// The note being played, if `mode` is a scale mode and the value is a
    /// known note.
    pub fn note(&self) -> Option<BuzzerScale> {
        if !self.mode.is_scale() {
            return None;
        }
        u8::try_from(self.value).ok().and_then(BuzzerScale::from_wire)
    }
}
