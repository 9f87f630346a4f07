use crate::info::type_info::impl_type_fn;
use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// SetInfo

/// Type information of a key-only associative container, e.g. `BTreeSet<T>`.
#[derive(Debug)]
pub struct SetInfo {
    ty: Type,
    value_info: fn() -> &'static TypeInfo,
}

impl SetInfo {
    impl_type_fn!(ty);

    /// Creates a new [`SetInfo`].
    #[inline]
    pub fn new<TSet: 'static, TValue: Typed>() -> Self {
        Self {
            ty: Type::of::<TSet>(),
            value_info: TValue::type_info,
        }
    }

    /// Returns the [`TypeInfo`] of the values.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
