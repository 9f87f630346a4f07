use alloc::boxed::Box;

use crate::Reflect;
use crate::info::type_info::impl_type_fn;
use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// WrapperInfo

/// Type information of a value that holds exactly one other value, and is
/// transparent for persistence (e.g. `Box<T>`).
///
/// Serializers unwrap once and treat the wrapped value as if it stood in the
/// wrapper's place.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::Typed;
///
/// let info = <Box<u32> as Typed>::type_info().as_wrapper().unwrap();
/// assert!(info.wrapped_info().type_is::<u32>());
///
/// let boxed = info.wrap(Box::new(5_u32)).unwrap();
/// assert_eq!(boxed.downcast_ref::<Box<u32>>(), Some(&Box::new(5)));
/// ```
#[derive(Debug)]
pub struct WrapperInfo {
    ty: Type,
    wrapped_info: fn() -> &'static TypeInfo,
    wrap: fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>>,
}

impl WrapperInfo {
    impl_type_fn!(ty);

    /// Creates a new [`WrapperInfo`].
    ///
    /// `wrap` receives a value of the wrapped type and must return it wrapped,
    /// or give it back if its type does not match.
    #[inline]
    pub fn new<TWrapper: 'static, TWrapped: Typed>(
        wrap: fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>>,
    ) -> Self {
        Self {
            ty: Type::of::<TWrapper>(),
            wrapped_info: TWrapped::type_info,
            wrap,
        }
    }

    /// Returns the [`TypeInfo`] of the wrapped value.
    #[inline]
    pub fn wrapped_info(&self) -> &'static TypeInfo {
        (self.wrapped_info)()
    }

    /// Wraps a value of the wrapped type.
    #[inline]
    pub fn wrap(&self, value: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>> {
        (self.wrap)(value)
    }
}
