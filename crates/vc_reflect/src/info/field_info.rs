use core::any::{Any, TypeId};

use bitflags::bitflags;

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// FieldFlags

bitflags! {
    /// Metadata attached to a struct field.
    ///
    /// Set through `#[reflect(no_serialize)]` and `#[reflect(read_only)]`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FieldFlags: u8 {
        /// The field never appears in a serialized document.
        const NO_SERIALIZE = 1 << 0;
        /// The field is never written by deserialization.
        const READ_ONLY = 1 << 1;
    }
}

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named (struct) field.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, info::{FieldFlags, Typed}};
///
/// #[derive(Reflect)]
/// struct Foo {
///     field_a: f32,
///     #[reflect(read_only, rename = "B")]
///     field_b: u8,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
///
/// let field = info.field_at(0).unwrap();
/// assert!(field.type_is::<f32>());
/// assert_eq!(field.name(), "field_a");
///
/// let field = info.field("B").unwrap();
/// assert!(field.flags().contains(FieldFlags::READ_ONLY));
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    flags: FieldFlags,
}

impl NamedField {
    /// Creates a new [`NamedField`] for the given field `name` and type `T`.
    #[inline]
    pub fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
            flags: FieldFlags::empty(),
        }
    }

    /// Replaces the field metadata.
    #[inline]
    pub const fn with_flags(mut self, flags: FieldFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the field name, which is also the document key.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    #[inline]
    pub const fn flags(&self) -> FieldFlags {
        self.flags
    }

    #[inline]
    pub const fn is_no_serialize(&self) -> bool {
        self.flags.contains(FieldFlags::NO_SERIALIZE)
    }

    #[inline]
    pub const fn is_read_only(&self) -> bool {
        self.flags.contains(FieldFlags::READ_ONLY)
    }
}
