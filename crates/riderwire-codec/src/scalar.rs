//! Little-endian scalar components.
//!
//! Every integer width and `f32` encodes in little-endian order. Any bit
//! pattern is a valid scalar, so only the span length can fail a decode.

use std::mem::size_of;

use bytes::BufMut;

use crate::error::{CodecError, Result};
use crate::record::Component;

macro_rules! scalar_component {
    ($($ty:ty => $put:ident),* $(,)?) => {
        $(
            impl Component for $ty {
                const WIDTH: usize = size_of::<$ty>();
                const NAME: &'static str = stringify!($ty);

                fn put<B: BufMut>(&self, dst: &mut B) {
                    dst.$put(*self);
                }

                fn take(src: &[u8]) -> Result<Self> {
                    let raw: [u8; size_of::<$ty>()] = src.try_into().map_err(|_| {
                        CodecError::size_mismatch(Self::NAME, Self::WIDTH, src.len())
                    })?;
                    Ok(<$ty>::from_le_bytes(raw))
                }
            }
        )*
    };
}

scalar_component! {
    u8 => put_u8,
    i8 => put_i8,
    u16 => put_u16_le,
    i16 => put_i16_le,
    u32 => put_u32_le,
    i32 => put_i32_le,
    u64 => put_u64_le,
    i64 => put_i64_le,
    f32 => put_f32_le,
}

/// Fixed-length arrays of components, laid out back to back.
impl<T: Component, const N: usize> Component for [T; N] {
    const WIDTH: usize = T::WIDTH * N;
    const NAME: &'static str = T::NAME;

    fn put<B: BufMut>(&self, dst: &mut B) {
        for item in self {
            item.put(dst);
        }
    }

    fn take(src: &[u8]) -> Result<Self> {
        let mut slicer = crate::record::Slicer::new(Self::NAME, src, Self::WIDTH)?;
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(slicer.field::<T>()?);
        }
        slicer.finish()?;
        items
            .try_into()
            .map_err(|items: Vec<T>| CodecError::size_mismatch(Self::NAME, N, items.len()))
    }
}

#[cfg(test)]
mod tests {
    use bytes::BytesMut;

    use super::*;

    fn encode<C: Component>(value: &C) -> Vec<u8> {
        let mut buf = BytesMut::new();
        value.put(&mut buf);
        buf.to_vec()
    }

    #[test]
    fn integers_are_little_endian() {
        assert_eq!(encode(&0x1234u16), [0x34, 0x12]);
        assert_eq!(encode(&0x0102_0304u32), [0x04, 0x03, 0x02, 0x01]);
        assert_eq!(encode(&-2i16), [0xFE, 0xFF]);
        assert_eq!(
            encode(&123_456_789u64),
            [0x15, 0xCD, 0x5B, 0x07, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn float_is_ieee754_little_endian() {
        assert_eq!(encode(&1.0f32), [0x00, 0x00, 0x80, 0x3F]);
        assert_eq!(f32::take(&[0x00, 0x00, 0x80, 0xBF]).unwrap(), -1.0);
    }

    #[test]
    fn widths_match_primitive_sizes() {
        assert_eq!(u8::WIDTH, 1);
        assert_eq!(i16::WIDTH, 2);
        assert_eq!(f32::WIDTH, 4);
        assert_eq!(i64::WIDTH, 8);
    }

    #[test]
    fn wrong_span_is_size_mismatch() {
        let err = u32::take(&[1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            CodecError::SizeMismatch {
                record: "u32",
                expected: 4,
                actual: 3,
            }
        );
        assert!(u8::take(&[]).unwrap_err().is_size_mismatch());
    }

    #[test]
    fn arrays_concatenate_elements() {
        let value: [i16; 3] = [1, -1, 256];
        let bytes = encode(&value);
        assert_eq!(bytes, [0x01, 0x00, 0xFF, 0xFF, 0x00, 0x01]);
        assert_eq!(<[i16; 3]>::WIDTH, 6);
        assert_eq!(<[i16; 3]>::take(&bytes).unwrap(), value);
        assert!(<[i16; 3]>::take(&bytes[..5]).unwrap_err().is_size_mismatch());
    }
}
