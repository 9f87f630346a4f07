use core::fmt;

use crate::info::Type;
use crate::info::type_info::impl_type_fn;

// -----------------------------------------------------------------------------
// AtomicKind

/// The primitive shape of an atomic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomicKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    String,
}

impl AtomicKind {
    /// Returns `true` for the signed and unsigned integer kinds.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize)
    }

    #[inline]
    pub const fn is_unsigned(self) -> bool {
        matches!(self, Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize)
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

impl fmt::Display for AtomicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// AtomicInfo

/// Type information of a primitive or `String`.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{AtomicKind, Typed};
///
/// let info = <u16 as Typed>::type_info().as_atomic().unwrap();
/// assert_eq!(info.kind(), AtomicKind::U16);
/// assert!(info.ty().has_default());
/// ```
#[derive(Debug)]
pub struct AtomicInfo {
    ty: Type,
    kind: AtomicKind,
}

impl AtomicInfo {
    impl_type_fn!(ty);

    /// Creates a new [`AtomicInfo`].
    #[inline]
    pub fn new<T: 'static>(kind: AtomicKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    /// Returns the primitive shape.
    #[inline]
    pub const fn kind(&self) -> AtomicKind {
        self.kind
    }
}
