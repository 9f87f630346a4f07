use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{Enum, List, Map, Set, Struct, Wrapper};

// -----------------------------------------------------------------------------
// AtomicRef

/// A borrowed view of an atomic value.
///
/// Integers are widened to 64 bits and `f32` to `f64`; the exact type is
/// available from [`AtomicInfo::kind`](crate::info::AtomicInfo::kind).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AtomicRef<'a> {
    Bool(bool),
    Char(char),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(&'a str),
}

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable enumeration of ["kinds"](ReflectKind) of a reflected type.
///
/// Returned by [`Reflect::reflect_ref`].
pub enum ReflectRef<'a> {
    Atomic(AtomicRef<'a>),
    Enum(&'a dyn Enum),
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Set(&'a dyn Set),
    Wrapper(&'a dyn Wrapper),
    Opaque(&'a dyn Reflect),
}

macro_rules! impl_ref_cast {
    ($name:ident : $kind:ident => $ret:ty) => {
        #[doc = concat!("Returns the inner value if this is `", stringify!($kind), "`.")]
        #[inline]
        pub fn $name(self) -> Option<$ret> {
            match self {
                Self::$kind(value) => Some(value),
                _ => None,
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    /// Returns the kind of this reflected value.
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Atomic(_) => ReflectKind::Atomic,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Set(_) => ReflectKind::Set,
            Self::Wrapper(_) => ReflectKind::Wrapper,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_ref_cast!(as_atomic: Atomic => AtomicRef<'a>);
    impl_ref_cast!(as_enum: Enum => &'a dyn Enum);
    impl_ref_cast!(as_struct: Struct => &'a dyn Struct);
    impl_ref_cast!(as_list: List => &'a dyn List);
    impl_ref_cast!(as_map: Map => &'a dyn Map);
    impl_ref_cast!(as_set: Set => &'a dyn Set);
    impl_ref_cast!(as_wrapper: Wrapper => &'a dyn Wrapper);
    impl_ref_cast!(as_opaque: Opaque => &'a dyn Reflect);
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable enumeration of ["kinds"](ReflectKind) of a reflected type.
///
/// Returned by [`Reflect::reflect_mut`]. Atomic and opaque values are
/// replaced as a whole through [`Reflect::set`].
pub enum ReflectMut<'a> {
    Atomic(&'a mut dyn Reflect),
    Enum(&'a mut dyn Enum),
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Set(&'a mut dyn Set),
    Wrapper(&'a mut dyn Wrapper),
    Opaque(&'a mut dyn Reflect),
}

impl<'a> ReflectMut<'a> {
    /// Returns the kind of this reflected value.
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Atomic(_) => ReflectKind::Atomic,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Set(_) => ReflectKind::Set,
            Self::Wrapper(_) => ReflectKind::Wrapper,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_ref_cast!(as_enum: Enum => &'a mut dyn Enum);
    impl_ref_cast!(as_struct: Struct => &'a mut dyn Struct);
    impl_ref_cast!(as_list: List => &'a mut dyn List);
    impl_ref_cast!(as_map: Map => &'a mut dyn Map);
    impl_ref_cast!(as_set: Set => &'a mut dyn Set);
    impl_ref_cast!(as_wrapper: Wrapper => &'a mut dyn Wrapper);
}
