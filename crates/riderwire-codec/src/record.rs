use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{CodecError, Result};

/// A fixed-width building block of a record.
///
/// Scalars, enumerated tags, fixed arrays and whole fixed-size records all
/// implement this, which is what lets records nest to any depth.
pub trait Component: Sized {
    /// Encoded width in bytes.
    const WIDTH: usize;
    /// Name used in error reports.
    const NAME: &'static str;

    /// Append exactly `WIDTH` bytes to `dst`.
    fn put<B: BufMut>(&self, dst: &mut B);

    /// Decode from a span of exactly `WIDTH` bytes.
    fn take(src: &[u8]) -> Result<Self>;
}

/// The size/encode/decode contract every message payload satisfies.
pub trait Record: Sized {
    /// Record name used in error reports and tooling.
    const NAME: &'static str;

    /// `Some(size)` for fixed-size records, `None` when the size follows the
    /// content.
    const FIXED_SIZE: Option<usize>;

    /// Encoded size of this instance in bytes.
    fn size(&self) -> usize;

    /// Append exactly `size()` bytes to `dst`.
    fn encode_into<B: BufMut>(&self, dst: &mut B);

    /// Encode into a fresh buffer of exactly `size()` bytes.
    fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.size());
        self.encode_into(&mut buf);
        buf.freeze()
    }

    /// Decode a complete record from `src`.
    ///
    /// Fixed-size records fail with [`CodecError::SizeMismatch`] when
    /// `src.len()` differs from their size.
    fn decode(src: &[u8]) -> Result<Self>;
}

/// Walks a byte span at cumulative offsets, one component at a time.
///
/// This is the single decode routine behind every composite: the span length
/// is checked up front, each component receives exactly its own width, and
/// [`Slicer::finish`] rejects any unconsumed tail.
#[derive(Debug)]
pub struct Slicer<'a> {
    record: &'static str,
    src: &'a [u8],
    offset: usize,
}

impl<'a> Slicer<'a> {
    /// Start slicing `src`, which must be exactly `expected` bytes long.
    pub fn new(record: &'static str, src: &'a [u8], expected: usize) -> Result<Self> {
        if src.len() != expected {
            return Err(CodecError::size_mismatch(record, expected, src.len()));
        }
        Ok(Self {
            record,
            src,
            offset: 0,
        })
    }

    /// Decode the next component and advance past it.
    pub fn field<C: Component>(&mut self) -> Result<C> {
        let end = self.offset + C::WIDTH;
        let part = self
            .src
            .get(self.offset..end)
            .ok_or_else(|| CodecError::size_mismatch(self.record, end, self.src.len()))?;
        let value = C::take(part)?;
        self.offset = end;
        Ok(value)
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Finish the walk; fails if any input is left over.
    pub fn finish(self) -> Result<()> {
        if self.offset != self.src.len() {
            return Err(CodecError::size_mismatch(
                self.record,
                self.offset,
                self.src.len(),
            ));
        }
        Ok(())
    }
}

/// Declare a fixed-size record from an ordered field list.
///
/// The field order is the wire order. The macro derives the struct
/// (`Debug`, `Clone`, `PartialEq`, `Default`) and implements both
/// [`Component`] and [`Record`]: the size is the sum of field widths, encode
/// concatenates fields, decode slices them with a [`Slicer`].
///
/// ```
/// riderwire_codec::record! {
///     /// A 3-byte colour.
///     pub struct Rgb {
///         pub r: u8,
///         pub g: u8,
///         pub b: u8,
///     }
/// }
///
/// use riderwire_codec::Record;
/// let rgb = Rgb { r: 1, g: 2, b: 3 };
/// assert_eq!(rgb.encode().as_ref(), &[1, 2, 3]);
/// assert_eq!(Rgb::decode(&[1, 2, 3]).unwrap(), rgb);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )+
        }

        impl $crate::Component for $name {
            const WIDTH: usize = 0 $(+ <$ty as $crate::Component>::WIDTH)+;
            const NAME: &'static str = stringify!($name);

            fn put<B: $crate::bytes::BufMut>(&self, dst: &mut B) {
                $( $crate::Component::put(&self.$field, dst); )+
            }

            fn take(src: &[u8]) -> $crate::Result<Self> {
                let mut slicer = $crate::Slicer::new(
                    <Self as $crate::Component>::NAME,
                    src,
                    <Self as $crate::Component>::WIDTH,
                )?;
                let value = Self {
                    $( $field: slicer.field::<$ty>()?, )+
                };
                slicer.finish()?;
                Ok(value)
            }
        }

        impl $crate::Record for $name {
            const NAME: &'static str = stringify!($name);
            const FIXED_SIZE: Option<usize> = Some(<Self as $crate::Component>::WIDTH);

            fn size(&self) -> usize {
                <Self as $crate::Component>::WIDTH
            }

            fn encode_into<B: $crate::bytes::BufMut>(&self, dst: &mut B) {
                $crate::Component::put(self, dst);
            }

            fn decode(src: &[u8]) -> $crate::Result<Self> {
                <Self as $crate::Component>::take(src)
            }
        }
    };
}
