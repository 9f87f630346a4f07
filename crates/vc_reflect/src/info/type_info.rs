use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::Reflect;
use crate::info::{AtomicInfo, EnumInfo, ListInfo, MapInfo};
use crate::info::{OpaqueInfo, SetInfo, StructInfo, WrapperInfo};

// -----------------------------------------------------------------------------
// Type

/// The identity of a reflected type.
///
/// Contains the [`TypeId`], the full type path and, if the type registered
/// one, a default constructor used when a fresh value must be created during
/// deserialization.
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
    ctor: Option<fn() -> Box<dyn Reflect>>,
}

impl Type {
    /// Creates the identity of `T`, without a constructor.
    #[inline]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>(),
            ctor: None,
        }
    }

    /// Registers `T::default` as constructor.
    #[inline]
    pub fn with_default<T: Default + Reflect>(mut self) -> Self {
        self.ctor = Some(|| -> Box<dyn Reflect> { Box::new(T::default()) });
        self
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type path, e.g. `alloc::string::String`.
    #[inline]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Returns `true` if a default constructor was registered.
    #[inline]
    pub const fn has_default(&self) -> bool {
        self.ctor.is_some()
    }

    /// Invokes the default constructor, if any.
    #[inline]
    pub fn construct(&self) -> Option<Box<dyn Reflect>> {
        self.ctor.map(|ctor| ctor())
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Type")
            .field("path", &self.path)
            .field("has_default", &self.ctor.is_some())
            .finish()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

// Implements `ty`, `type_id`, `type_path`, `type_is` and `with_default`
// for the kind specific infos.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying [`Type`](crate::info::Type).
        #[inline]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        /// Returns the `TypeId`.
        #[inline]
        pub const fn type_id(&self) -> ::core::any::TypeId {
            self.$field.id()
        }

        /// Returns the full type path.
        #[inline]
        pub const fn type_path(&self) -> &'static str {
            self.$field.path()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.$field.is::<T>()
        }

        /// Registers `T::default` as constructor of this type.
        #[inline]
        pub fn with_default<T: Default + $crate::Reflect>(mut self) -> Self {
            self.$field = self.$field.with_default::<T>();
            self
        }
    };
}

pub(crate) use impl_type_fn;

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Atomic,
    Enum,
    Struct,
    List,
    Map,
    Set,
    Wrapper,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atomic => f.pad("Atomic"),
            Self::Enum => f.pad("Enum"),
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Set => f.pad("Set"),
            Self::Wrapper => f.pad("Wrapper"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Runtime description of a reflected type.
///
/// A `TypeInfo` is obtained through [`Typed::type_info`] when the type is known
/// statically, or through [`Reflect::reflect_type_info`] from a live value.
/// It is immutable and lives for the whole program.
///
/// The capability queries mirror how the serializer dispatches:
///
/// - [`is_atomic`](Self::is_atomic): primitives and `String`.
/// - [`is_enum`](Self::is_enum)
/// - [`is_sequential_container`](Self::is_sequential_container): [`List`](crate::ops::List).
/// - [`is_associative_container`](Self::is_associative_container): [`Map`](crate::ops::Map) or [`Set`](crate::ops::Set).
/// - [`is_wrapper`](Self::is_wrapper), with [`wrapped_type`](Self::wrapped_type).
///
/// # Examples
///
/// ```
/// use vc_reflect::info::Typed;
///
/// let info = <Vec<i32> as Typed>::type_info();
/// assert!(info.is_sequential_container());
/// assert!(info.as_list().unwrap().item_info().type_is::<i32>());
///
/// let info = <Box<String> as Typed>::type_info();
/// assert!(info.wrapped_type().unwrap().is_atomic());
/// ```
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
#[derive(Debug)]
pub enum TypeInfo {
    Atomic(AtomicInfo),
    Enum(EnumInfo),
    Struct(StructInfo),
    List(ListInfo),
    Map(MapInfo),
    Set(SetInfo),
    Wrapper(WrapperInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to the kind specific information.
        #[inline]
        pub const fn $name(&self) -> Option<&$info> {
            match self {
                Self::$kind(info) => Some(info),
                _ => None,
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_atomic: Atomic => AtomicInfo);
    impl_cast_method!(as_enum: Enum => EnumInfo);
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_set: Set => SetInfo);
    impl_cast_method!(as_wrapper: Wrapper => WrapperInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Atomic(info) => info.ty(),
            Self::Enum(info) => info.ty(),
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Set(info) => info.ty(),
            Self::Wrapper(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    /// Returns the kind of this type.
    pub const fn kind(&self) -> ReflectKind {
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

    /// Returns the `TypeId`.
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.ty().id()
    }

    /// Returns the full type path.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty().is::<T>()
    }

    #[inline]
    pub const fn is_atomic(&self) -> bool {
        matches!(self, Self::Atomic(_))
    }

    #[inline]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    #[inline]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    #[inline]
    pub const fn is_sequential_container(&self) -> bool {
        matches!(self, Self::List(_))
    }

    #[inline]
    pub const fn is_associative_container(&self) -> bool {
        matches!(self, Self::Map(_) | Self::Set(_))
    }

    #[inline]
    pub const fn is_wrapper(&self) -> bool {
        matches!(self, Self::Wrapper(_))
    }

    /// For wrappers, returns the type information of the wrapped value.
    #[inline]
    pub fn wrapped_type(&self) -> Option<&'static TypeInfo> {
        match self {
            Self::Wrapper(info) => Some(info.wrapped_info()),
            _ => None,
        }
    }

    /// Creates a default value of this type.
    ///
    /// Wrappers without their own constructor are built by wrapping a
    /// default value of the wrapped type.
    pub fn construct(&self) -> Option<Box<dyn Reflect>> {
        if let Some(value) = self.ty().construct() {
            return Some(value);
        }
        match self {
            Self::Wrapper(info) => {
                let inner = info.wrapped_info().construct()?;
                info.wrap(inner).ok()
            }
            _ => None,
        }
    }
}
