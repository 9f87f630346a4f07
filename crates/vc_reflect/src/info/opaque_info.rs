use alloc::boxed::Box;

use crate::Reflect;
use crate::info::Type;
use crate::info::type_info::impl_type_fn;

// -----------------------------------------------------------------------------
// OpaqueInfo

/// Type information of a type whose inner structure is not reflected.
///
/// An opaque type may provide a textual form: [`Reflect::reflect_to_string`]
/// produces it and [`OpaqueInfo::from_str`] parses it back.
#[derive(Debug)]
pub struct OpaqueInfo {
    ty: Type,
    from_str: Option<fn(&str) -> Option<Box<dyn Reflect>>>,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    #[inline]
    pub fn new<T: 'static>() -> Self {
        Self {
            ty: Type::of::<T>(),
            from_str: None,
        }
    }

    /// Registers a parser for the textual form.
    #[inline]
    pub fn with_from_str(mut self, from_str: fn(&str) -> Option<Box<dyn Reflect>>) -> Self {
        self.from_str = Some(from_str);
        self
    }

    /// Parses a value from its textual form.
    ///
    /// Returns `None` if the type has no textual form or the text is invalid.
    #[inline]
    pub fn from_str(&self, text: &str) -> Option<Box<dyn Reflect>> {
        (self.from_str?)(text)
    }
}
