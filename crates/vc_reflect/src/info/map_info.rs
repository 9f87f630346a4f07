use crate::info::type_info::impl_type_fn;
use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// MapInfo

/// Type information of a key-value associative container, e.g. `HashMap<K, V>`.
#[derive(Debug)]
pub struct MapInfo {
    ty: Type,
    key_info: fn() -> &'static TypeInfo,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    impl_type_fn!(ty);

    /// Creates a new [`MapInfo`].
    #[inline]
    pub fn new<TMap: 'static, TKey: Typed, TValue: Typed>() -> Self {
        Self {
            ty: Type::of::<TMap>(),
            key_info: TKey::type_info,
            value_info: TValue::type_info,
        }
    }

    /// Returns the [`TypeInfo`] of the keys.
    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key_info)()
    }

    /// Returns the [`TypeInfo`] of the values.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
