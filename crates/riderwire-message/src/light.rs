//! LED modes, events and colours.
//!
//! Mode and event bytes are shared between the drone and controller LED
//! vocabularies, so records keep them as raw bytes; the typed constructors
//! and accessors below translate to and from [`LightModeDrone`] and
//! [`LightModeController`].

tag! {
    /// Drone LED modes.
    #[derive(Default)]
    pub enum LightModeDrone: u8 {
        #[default]
        None = 0x00,

        TeamRgbNone = 0x10,
        TeamRgbManual = 0x11,
        TeamRgbHold = 0x12,
        TeamRgbFlicker = 0x13,
        TeamRgbFlickerDouble = 0x14,
        TeamRgbDimming = 0x15,
        TeamRgbSunrise = 0x16,
        TeamRgbSunset = 0x17,
        TeamRgbRainbow = 0x18,
        TeamRgbRainbow2 = 0x19,
        TeamRgbRedBlue = 0x1A,

        TeamFlowForward = 0x1E,
        TeamWarning = 0x1F,

        BodyNone = 0x20,
        BodyManual = 0x21,
        BodyHold = 0x22,
        BodyFlicker = 0x23,
        BodyFlickerDouble = 0x24,
        BodyDimming = 0x25,
        BodySunrise = 0x26,
        BodySunset = 0x27,
        BodyRainbow = 0x28,
        BodyRainbow2 = 0x29,
        BodyRedBlue = 0x2A,
        BodyCard = 0x2B,
        BodyWarning = 0x2F,

        LinkNone = 0x30,
        LinkManual = 0x31,
        LinkHold = 0x32,
        LinkFlicker = 0x33,
        LinkFlickerDouble = 0x34,
        LinkDimming = 0x35,
        LinkSunrise = 0x36,
        LinkSunset = 0x37,

        EndOfType = 0x60,
    }
}

tag! {
    /// Single drone LED flag; combine with `|` on the wire values.
    pub enum LightFlagsDrone: u16 {
        None = 0x0000,

        BodyRed = 0x0001,
        BodyGreen = 0x0002,
        BodyBlue = 0x0004,

        TeamRed = 0x0008,
        TeamBlue = 0x0010,

        Link = 0x0080,
    }
}

tag! {
    /// Controller LED modes.
    pub enum LightModeController: u8 {
        TeamNone = 0x10,
        TeamManual = 0x11,
        TeamHold = 0x12,
        TeamFlicker = 0x13,
        TeamFlickerDouble = 0x14,
        TeamDimming = 0x15,
        TeamSunrise = 0x16,
        TeamSunset = 0x17,
        TeamRedBlue = 0x1A,

        Array6None = 0x30,
        Array6Manual = 0x31,
        Array6Hold = 0x32,
        Array6Flicker = 0x33,
        Array6FlickerDouble = 0x34,
        Array6Dimming = 0x35,

        Array6ValueNone = 0x40,
        Array6ValueHold = 0x42,
        Array6ValueFlicker = 0x43,
        Array6ValueFlickerDouble = 0x44,
        Array6ValueDimming = 0x45,

        Array6FunctionNone = 0x50,
        Array6Pendulum = 0x51,
        Array6FlowLeft = 0x52,
        Array6FlowRight = 0x53,

        EndOfType = 0x60,
    }
}

tag! {
    /// Single controller LED flag; combine with `|` on the wire values.
    pub enum LightFlagsController: u16 {
        None = 0x0000,

        TeamRed = 0x0001,
        TeamBlue = 0x0002,

        E0 = 0x0004,
        E1 = 0x0008,
        E2 = 0x0010,
        E3 = 0x0020,
        E4 = 0x0040,
        E5 = 0x0080,
    }
}

/// OR a set of single-bit flags into one mask.
fn flag_mask<T: Copy + Into<u16>>(flags: &[T]) -> u16 {
    flags.iter().fold(0, |mask, flag| mask | (*flag).into())
}

tag! {
    /// Named palette colours.
    #[derive(Default)]
    pub enum Colors: u8 {
        AliceBlue = 0, AntiqueWhite = 1, Aqua = 2, Aquamarine = 3,
        Azure = 4, Beige = 5, Bisque = 6,
        #[default]
        Black = 7,
        BlanchedAlmond = 8, Blue = 9, BlueViolet = 10, Brown = 11,
        BurlyWood = 12, CadetBlue = 13, Chartreuse = 14, Chocolate = 15,
        Coral = 16, CornflowerBlue = 17, Cornsilk = 18, Crimson = 19,
        Cyan = 20, DarkBlue = 21, DarkCyan = 22, DarkGoldenRod = 23,
        DarkGray = 24, DarkGreen = 25, DarkKhaki = 26, DarkMagenta = 27,
        DarkOliveGreen = 28, DarkOrange = 29, DarkOrchid = 30, DarkRed = 31,
        DarkSalmon = 32, DarkSeaGreen = 33, DarkSlateBlue = 34, DarkSlateGray = 35,
        DarkTurquoise = 36, DarkViolet = 37, DeepPink = 38, DeepSkyBlue = 39,
        DimGray = 40, DodgerBlue = 41, FireBrick = 42, FloralWhite = 43,
        ForestGreen = 44, Fuchsia = 45, Gainsboro = 46, GhostWhite = 47,
        Gold = 48, GoldenRod = 49, Gray = 50, Green = 51,
        GreenYellow = 52, HoneyDew = 53, HotPink = 54, IndianRed = 55,
        Indigo = 56, Ivory = 57, Khaki = 58, Lavender = 59,
        LavenderBlush = 60, LawnGreen = 61, LemonChiffon = 62, LightBlue = 63,
        LightCoral = 64, LightCyan = 65, LightGoldenRodYellow = 66, LightGray = 67,
        LightGreen = 68, LightPink = 69, LightSalmon = 70, LightSeaGreen = 71,
        LightSkyBlue = 72, LightSlateGray = 73, LightSteelBlue = 74, LightYellow = 75,
        Lime = 76, LimeGreen = 77, Linen = 78, Magenta = 79,
        Maroon = 80, MediumAquaMarine = 81, MediumBlue = 82, MediumOrchid = 83,
        MediumPurple = 84, MediumSeaGreen = 85, MediumSlateBlue = 86, MediumSpringGreen = 87,
        MediumTurquoise = 88, MediumVioletRed = 89, MidnightBlue = 90, MintCream = 91,
        MistyRose = 92, Moccasin = 93, NavajoWhite = 94, Navy = 95,
        OldLace = 96, Olive = 97, OliveDrab = 98, Orange = 99,
        OrangeRed = 100, Orchid = 101, PaleGoldenRod = 102, PaleGreen = 103,
        PaleTurquoise = 104, PaleVioletRed = 105, PapayaWhip = 106, PeachPuff = 107,
        Peru = 108, Pink = 109, Plum = 110, PowderBlue = 111,
        Purple = 112, RebeccaPurple = 113, Red = 114, RosyBrown = 115,
        RoyalBlue = 116, SaddleBrown = 117, Salmon = 118, SandyBrown = 119,
        SeaGreen = 120, SeaShell = 121, Sienna = 122, Silver = 123,
        SkyBlue = 124, SlateBlue = 125, SlateGray = 126, Snow = 127,
        SpringGreen = 128, SteelBlue = 129, Tan = 130, Teal = 131,
        Thistle = 132, Tomato = 133, Turquoise = 134, Violet = 135,
        Wheat = 136, White = 137, WhiteSmoke = 138, Yellow = 139,
        YellowGreen = 140,

        EndOfType = 141,
    }
}

payload! {
    pub struct Color {
        pub r: u8,
        pub g: u8,
        pub b: u8,
    }
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

payload! {
    /// Direct LED control: a flag mask and a brightness.
    pub struct LightManual {
        pub flags: u16,
        pub brightness: u8,
    }
}

impl LightManual {
    pub fn drone(flags: &[LightFlagsDrone], brightness: u8) -> Self {
        Self {
            flags: flag_mask(flags),
            brightness,
        }
    }

    pub fn controller(flags: &[LightFlagsController], brightness: u8) -> Self {
        Self {
            flags: flag_mask(flags),
            brightness,
        }
    }
}

payload! {
    pub struct LightMode {
        pub mode: u8,
        pub interval: u16,
    }
}

impl LightMode {
    pub fn drone(mode: LightModeDrone, interval: u16) -> Self {
        Self {
            mode: mode.to_wire(),
            interval,
        }
    }

    pub fn controller(mode: LightModeController, interval: u16) -> Self {
        Self {
            mode: mode.to_wire(),
            interval,
        }
    }

    pub fn drone_mode(&self) -> Option<LightModeDrone> {
        LightModeDrone::from_wire(self.mode)
    }

    pub fn controller_mode(&self) -> Option<LightModeController> {
        LightModeController::from_wire(self.mode)
    }
}

payload! {
    /// A timed LED effect played `repeat` times.
    pub struct LightEvent {
        pub event: u8,
        pub interval: u16,
        pub repeat: u8,
    }
}

impl LightEvent {
    pub fn drone(event: LightModeDrone, interval: u16, repeat: u8) -> Self {
        Self {
            event: event.to_wire(),
            interval,
            repeat,
        }
    }

    pub fn controller(event: LightModeController, interval: u16, repeat: u8) -> Self {
        Self {
            event: event.to_wire(),
            interval,
            repeat,
        }
    }
}

payload! {
    pub struct LightModeColor {
        pub mode: LightMode,
        pub color: Color,
    }
}

payload! {
    pub struct LightModeColors {
        pub mode: LightMode,
        pub colors: Colors,
    }
}

payload! {
    pub struct LightEventColor {
        pub event: LightEvent,
        pub color: Color,
    }
}

payload! {
    pub struct LightEventColors {
        pub event: LightEvent,
        pub colors: Colors,
    }
}
