use crate::kind::{DataType, DeviceType};

/// Header size: data type (1) + length (1) + from (1) + to (1) = 4 bytes.
pub const HEADER_SIZE: usize = 4;

payload! {
    /// Envelope prefix of every frame.
    ///
    /// Wire format:
    /// ```text
    /// ┌───────────┬──────────┬──────────┬──────────┬──────────────────┐
    /// │ DataType  │ Length   │ From     │ To       │ Payload          │
    /// │ (1B)      │ (1B)     │ (1B)     │ (1B)     │ (Length bytes)   │
    /// └───────────┴──────────┴──────────┴──────────┴──────────────────┘
    /// ```
    pub struct Header {
        /// Selects the payload record.
        pub data_type: DataType,
        /// Payload byte count; a plain count, not a tag.
        pub length: u8,
        pub from: DeviceType,
        pub to: DeviceType,
    }
}

impl Header {
    pub fn new(data_type: DataType, length: u8, from: DeviceType, to: DeviceType) -> Self {
        Self {
            data_type,
            length,
            from,
            to,
        }
    }
}
