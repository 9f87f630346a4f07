use alloc::boxed::Box;
use alloc::collections::BTreeSet;

use crate::impls::GenericTypeInfoCell;
use crate::info::{SetInfo, TypeInfo, Typed};
use crate::ops::Set;
use crate::{Reflect, ReflectError};

impl<T: Reflect + Typed + Ord> Typed for BTreeSet<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Set(SetInfo::new::<Self, T>().with_default::<Self>())
        })
    }
}

impl<T: Reflect + Typed + Ord> Reflect for BTreeSet<T> {
    crate::reflection::impl_reflect_cast_fn!(Set);
}

impl<T: Reflect + Typed + Ord> Set for BTreeSet<T> {
    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_> {
        Box::new(Self::iter(self).map(Reflect::as_reflect))
    }

    fn insert(&mut self, value: Box<dyn Reflect>) -> Result<(), ReflectError> {
        let value = value
            .take::<T>()
            .map_err(|value| ReflectError::mismatch::<T>(&*value))?;
        Self::insert(self, value);
        Ok(())
    }

    #[inline]
    fn clear(&mut self) {
        Self::clear(self);
    }
}
