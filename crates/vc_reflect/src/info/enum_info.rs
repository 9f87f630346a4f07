use alloc::boxed::Box;

use crate::Reflect;
use crate::info::Type;
use crate::info::type_info::impl_type_fn;

// -----------------------------------------------------------------------------
// VariantInfo

/// A single variant of a field-less enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantInfo {
    name: &'static str,
    discriminant: u64,
}

impl VariantInfo {
    #[inline]
    pub const fn new(name: &'static str, discriminant: u64) -> Self {
        Self { name, discriminant }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn discriminant(&self) -> u64 {
        self.discriminant
    }
}

// -----------------------------------------------------------------------------
// EnumInfo

/// Type information of a field-less enum.
///
/// Besides the variant table, an `EnumInfo` knows how to build a value from a
/// discriminant, which is what lets a deserializer turn `"Linear"` or `2`
/// back into the enum.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Debug, PartialEq)]
/// enum Filter {
///     Point,
///     Linear = 4,
/// }
///
/// let info = Filter::type_info().as_enum().unwrap();
/// assert_eq!(info.variant("Linear").unwrap().discriminant(), 4);
///
/// let value = info.from_name("Linear").unwrap();
/// assert_eq!(value.downcast_ref::<Filter>(), Some(&Filter::Linear));
/// assert!(info.from_discriminant(1).is_none());
/// ```
#[derive(Debug)]
pub struct EnumInfo {
    ty: Type,
    variants: Box<[VariantInfo]>,
    from_discriminant: fn(u64) -> Option<Box<dyn Reflect>>,
}

impl EnumInfo {
    impl_type_fn!(ty);

    /// Creates a new [`EnumInfo`].
    ///
    /// `from_discriminant` must return `None` for unknown discriminants.
    pub fn new<T: 'static>(
        variants: &[VariantInfo],
        from_discriminant: fn(u64) -> Option<Box<dyn Reflect>>,
    ) -> Self {
        Self {
            ty: Type::of::<T>(),
            variants: variants.into(),
            from_discriminant,
        }
    }

    /// Returns the variants in declaration order.
    #[inline]
    pub fn variants(&self) -> &[VariantInfo] {
        &self.variants
    }

    /// Returns the variant with the given name.
    #[inline]
    pub fn variant(&self, name: &str) -> Option<&VariantInfo> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Returns the name of the variant with the given discriminant.
    #[inline]
    pub fn name_of(&self, discriminant: u64) -> Option<&'static str> {
        self.variants
            .iter()
            .find(|v| v.discriminant == discriminant)
            .map(VariantInfo::name)
    }

    /// Builds the enum value for a discriminant.
    #[inline]
    pub fn from_discriminant(&self, discriminant: u64) -> Option<Box<dyn Reflect>> {
        (self.from_discriminant)(discriminant)
    }

    /// Builds the enum value for a variant name.
    #[inline]
    pub fn from_name(&self, name: &str) -> Option<Box<dyn Reflect>> {
        self.from_discriminant(self.variant(name)?.discriminant)
    }
}
