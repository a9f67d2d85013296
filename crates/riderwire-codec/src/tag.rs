//! Closed enumerations with explicit wire values.
//!
//! A tag type carries its semantic value and its wire encoding together.
//! Members never rely on declaration order: each one names its wire value,
//! and [`wire_tag!`] generates the `from_wire` / `to_wire` pair from that
//! table.

/// Declare an enumerated field type over a scalar representation.
///
/// Generates the enum plus:
/// - `to_wire` / `from_wire` (unknown wire values yield `None`),
/// - `name` / `from_name` (case-insensitive),
/// - `ALL`, every member in declaration order,
/// - [`Component`](crate::Component), failing with
///   [`CodecError::UnknownTag`](crate::CodecError::UnknownTag) on values
///   outside the set,
/// - `Display`, `FromStr`, `From<Tag> for repr`, `TryFrom<repr> for Tag`.
///
/// ```
/// riderwire_codec::wire_tag! {
///     pub enum Lamp: u8 {
///         Off = 0x00,
///         On = 0x01,
///     }
/// }
///
/// assert_eq!(Lamp::On.to_wire(), 0x01);
/// assert_eq!(Lamp::from_wire(0x00), Some(Lamp::Off));
/// assert_eq!(Lamp::from_wire(0x02), None);
/// ```
#[macro_export]
macro_rules! wire_tag {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ty {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire value of this member.
            pub const fn to_wire(self) -> $repr {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            /// Member for a wire value, or `None` if the value is not declared.
            pub const fn from_wire(raw: $repr) -> Option<Self> {
                $(
                    if raw == $value {
                        return Some(Self::$variant);
                    }
                )+
                None
            }

            /// Member name as declared.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }

            /// Member for a name, ignoring ASCII case.
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|member| member.name().eq_ignore_ascii_case(name))
            }
        }

        impl $crate::Component for $name {
            const WIDTH: usize = ::std::mem::size_of::<$repr>();
            const NAME: &'static str = stringify!($name);

            fn put<B: $crate::bytes::BufMut>(&self, dst: &mut B) {
                $crate::Component::put(&self.to_wire(), dst);
            }

            fn take(src: &[u8]) -> $crate::Result<Self> {
                let raw = <$repr as $crate::Component>::take(src)?;
                Self::from_wire(raw).ok_or($crate::CodecError::UnknownTag {
                    tag: stringify!($name),
                    value: u64::from(raw),
                })
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::CodecError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::from_name(s.trim()).ok_or_else(|| $crate::CodecError::UnknownName {
                    tag: stringify!($name),
                    name: s.to_string(),
                })
            }
        }

        impl ::std::convert::From<$name> for $repr {
            fn from(tag: $name) -> $repr {
                tag.to_wire()
            }
        }

        impl ::std::convert::TryFrom<$repr> for $name {
            type Error = $crate::CodecError;

            fn try_from(raw: $repr) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<$repr>>::Error> {
                Self::from_wire(raw).ok_or($crate::CodecError::UnknownTag {
                    tag: stringify!($name),
                    value: u64::from(raw),
                })
            }
        }
    };
}
