use crate::info::type_info::impl_type_fn;
use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// ListInfo

/// Type information of a sequential container, e.g. `Vec<T>`.
#[derive(Debug)]
pub struct ListInfo {
    ty: Type,
    item_info: fn() -> &'static TypeInfo,
}

impl ListInfo {
    impl_type_fn!(ty);

    /// Creates a new [`ListInfo`] for the list type `TList` with items `TItem`.
    #[inline]
    pub fn new<TList: 'static, TItem: Typed>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_info: TItem::type_info,
        }
    }

    /// Returns the [`TypeInfo`] of the items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}
