//! Buttons and joysticks.

tag! {
    /// Single controller button bit.
    pub enum ButtonFlagController: u16 {
        None = 0x0000,

        FrontLeft = 0x0001,
        FrontRight = 0x0002,

        MidUpLeft = 0x0004,
        MidUpRight = 0x0008,

        MidUp = 0x0010,
        MidLeft = 0x0020,
        MidRight = 0x0040,
        MidDown = 0x0080,

        BottomLeft = 0x0100,
        BottomRight = 0x0200,
    }
}

tag! {
    pub enum ButtonFlagDrone: u16 {
        None = 0x0000,
        Reset = 0x0001,
    }
}

tag! {
    #[derive(Default)]
    pub enum ButtonEvent: u8 {
        #[default]
        None = 0x00,
        Down = 0x01,
        Press = 0x02,
        Up = 0x03,
        EndContinuePress = 0x04,
    }
}

payload! {
    pub struct Button {
        /// Bitmask of pressed buttons.
        pub button: u16,
        pub event: ButtonEvent,
    }
}

impl Button {
    pub fn is_pressed(&self, flag: ButtonFlagController) -> bool {
        let bit = flag.to_wire();
        bit != 0 && self.button & bit == bit
    }

    /// Every controller button whose bit is set.
    pub fn pressed(&self) -> Vec<ButtonFlagController> {
        ButtonFlagController::ALL
            .iter()
            .copied()
            .filter(|flag| self.is_pressed(*flag))
            .collect()
    }
}

tag! {
    /// Stick zone on a 3x3 grid; the high nibble is the row, the low nibble
    /// the column.
    #[derive(Default)]
    pub enum JoystickDirection: u8 {
        #[default]
        None = 0,

        VT = 0x10,
        VM = 0x20,
        VB = 0x40,

        HL = 0x01,
        HM = 0x02,
        HR = 0x04,

        TL = 0x11,
        TM = 0x12,
        TR = 0x14,

        ML = 0x21,
        CN = 0x22,
        MR = 0x24,

        BL = 0x41,
        BM = 0x42,
        BR = 0x44,
    }
}

tag! {
    #[derive(Default)]
    pub enum JoystickEvent: u8 {
        #[default]
        None = 0,
        In = 1,
        Stay = 2,
        Out = 3,
        EndOfType = 4,
    }
}

payload! {
    pub struct JoystickBlock {
        pub x: i8,
        pub y: i8,
        pub direction: JoystickDirection,
        pub event: JoystickEvent,
    }
}

payload! {
    pub struct Joystick {
        pub left: JoystickBlock,
        pub right: JoystickBlock,
    }
}

#[cfg(test)]
mod tests {
    use riderwire_codec::{Component, Record};

    use super::*;

    #[test]
    fn button_mask_and_event() {
        let bytes = [0x21, 0x01, 0x02];
        let button = Button::decode(&bytes).unwrap();
        assert_eq!(button.button, 0x0121);
        assert_eq!(button.event, ButtonEvent::Press);
        assert_eq!(
            button.pressed(),
            vec![
                ButtonFlagController::FrontLeft,
                ButtonFlagController::MidLeft,
                ButtonFlagController::BottomLeft,
            ]
        );
        assert!(!button.is_pressed(ButtonFlagController::None));
        assert_eq!(button.encode().as_ref(), &bytes);
    }

    #[test]
    fn joystick_is_two_blocks() {
        assert_eq!(JoystickBlock::WIDTH, 4);
        assert_eq!(Joystick::WIDTH, 8);

        let joystick = Joystick {
            left: JoystickBlock {
                x: -50,
                y: 20,
                direction: JoystickDirection::TL,
                event: JoystickEvent::In,
            },
            right: JoystickBlock::default(),
        };
        let bytes = joystick.encode();
        assert_eq!(&bytes[..4], &[0xCE, 0x14, 0x11, 0x01]);
        assert_eq!(&bytes[4..], &[0, 0, 0, 0]);
        assert_eq!(Joystick::decode(&bytes).unwrap(), joystick);
    }

    #[test]
    fn undefined_direction_is_rejected() {
        let err = Joystick::decode(&[0, 0, 0x22, 2, 0, 0, 0x33, 2]).unwrap_err();
        assert!(err.is_unknown_tag());
    }

    #[test]
    fn drone_reset_flag() {
        assert_eq!(ButtonFlagDrone::Reset.to_wire(), 1);
        assert_eq!(ButtonFlagController::BottomRight.to_wire(), 0x0200);
    }
}
