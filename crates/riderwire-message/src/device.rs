//! Motor control.
//!
//! Motor records come in direction-aware and value-only (`V`) forms, for
//! all four motors at once or for a single `target` motor. All share
//! [`DataType::Motor`](crate::DataType::Motor) and are told apart by size.

use crate::system::Rotation;

/// Motors on the airframe.
pub const MOTOR_COUNT: usize = 4;

payload! {
    pub struct MotorBlock {
        pub rotation: Rotation,
        pub value: i16,
    }
}

payload! {
    pub struct Motor {
        pub motor: [MotorBlock; MOTOR_COUNT],
    }
}

payload! {
    pub struct MotorBlockV {
        pub value: i16,
    }
}

payload! {
    pub struct MotorV {
        pub motor: [MotorBlockV; MOTOR_COUNT],
    }
}

payload! {
    pub struct MotorSingle {
        pub target: u8,
        pub rotation: Rotation,
        pub value: i16,
    }
}

payload! {
    pub struct MotorSingleV {
        pub target: u8,
        pub value: i16,
    }
}

#[cfg(test)]
mod tests {
    use riderwire_codec::{Component, Record};

    use super::*;

    #[test]
    fn sizes_are_distinct() {
        assert_eq!(MotorBlock::WIDTH, 3);
        assert_eq!(Motor::WIDTH, 12);
        assert_eq!(MotorBlockV::WIDTH, 2);
        assert_eq!(MotorV::WIDTH, 8);
        assert_eq!(MotorSingle::WIDTH, 4);
        assert_eq!(MotorSingleV::WIDTH, 3);
    }

    #[test]
    fn motor_blocks_are_laid_out_in_order() {
        let mut motor = Motor::default();
        for (i, block) in motor.motor.iter_mut().enumerate() {
            block.rotation = if i % 2 == 0 {
                Rotation::Clockwise
            } else {
                Rotation::Counterclockwise
            };
            block.value = (i as i16 + 1) * 100;
        }
        let bytes = motor.encode();
        assert_eq!(&bytes[..3], &[0x01, 0x64, 0x00]);
        assert_eq!(&bytes[9..], &[0x02, 0x90, 0x01]);
        assert_eq!(Motor::decode(&bytes).unwrap(), motor);
    }

    #[test]
    fn corrupt_block_fails_whole_record() {
        let mut bytes = Motor::default().encode().to_vec();
        bytes[6] = 0x07;
        assert!(Motor::decode(&bytes).unwrap_err().is_unknown_tag());
    }

    #[test]
    fn single_motor_targets_by_index() {
        let single = MotorSingleV::decode(&[0x02, 0x18, 0xFC]).unwrap();
        assert_eq!(single.target, 2);
        assert_eq!(single.value, -1000);
    }
}
