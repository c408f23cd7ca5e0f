/// Defines a transparent newtype over a kernel constant, with associated constants for the known
/// values and a `Debug` impl printing the `linux/input-event-codes.h` name.
///
/// Unknown values are printed as `Name(0x..)`.
macro_rules! ffi_enum {
    (
        $( #[$attrs:meta] )*
        $v:vis enum $name:ident: $native:ty as $prefix:literal {
            $(
                $( #[$variant_attrs:meta] )*
                $variant:ident = $value:expr
            ),+
            $(,)?
        }
    ) => {
        $( #[$attrs] )*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        $v struct $name(pub(crate) $native);

        impl $name {
            $(
                $( #[$variant_attrs] )*
                $v const $variant: Self = Self($value);
            )+

            #[inline]
            pub const fn raw(self) -> $native {
                self.0
            }

            #[inline]
            pub const fn from_raw(raw: $native) -> Self {
                Self(raw)
            }

            #[allow(unreachable_patterns)]
            fn variant_name(&self) -> Option<&'static str> {
                match *self {
                    $(
                        Self::$variant => Some(stringify!($variant)),
                    )*
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self.variant_name() {
                    Some(name) => write!(f, "{}{}", $prefix, name),
                    None => write!(f, "{}({:#x})", stringify!($name), self.0),
                }
            }
        }
    };
}

/// Implements [`BitValue`][crate::bits::BitValue] for an `ffi_enum!` type with a `MAX` constant.
macro_rules! bitvalue {
    ($type:ty) => {
        impl $crate::bits::BitValue for $type {
            const MAX: Self = <$type>::MAX;

            #[inline]
            fn from_index(index: usize) -> Self {
                Self(index as _)
            }

            #[inline]
            fn into_index(self) -> usize {
                self.0 as _
            }
        }
    };
}
