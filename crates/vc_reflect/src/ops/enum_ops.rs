use crate::Reflect;

// -----------------------------------------------------------------------------
// Enum

/// A trait used to power field-less enum operations via reflection.
///
/// The inverse direction, building a value from a name or a discriminant, is
/// provided by [`EnumInfo`](crate::info::EnumInfo).
///
/// # Example
///
/// ```
/// use vc_reflect::{derive::Reflect, ops::Enum};
///
/// #[derive(Reflect)]
/// enum Mode {
///     Read = 1,
///     Write = 2,
/// }
///
/// assert_eq!(Mode::Write.variant_name(), Some("Write"));
/// assert_eq!(Mode::Write.discriminant(), Some(2));
/// ```
pub trait Enum: Reflect {
    /// Returns the discriminant of the current variant.
    ///
    /// `None` if the value has no numeric form.
    fn discriminant(&self) -> Option<u64>;

    /// Returns the name of the current variant.
    ///
    /// `None` if the value matches no declared variant, which happens for
    /// manual implementations of flag-like enums.
    fn variant_name(&self) -> Option<&'static str> {
        self.reflect_type_info()
            .as_enum()?
            .name_of(self.discriminant()?)
    }
}
