use alloc::boxed::Box;
use core::hash::{BuildHasher, Hash};
use std::collections::HashSet;

use crate::impls::GenericTypeInfoCell;
use crate::info::{SetInfo, TypeInfo, Typed};
use crate::ops::Set;
use crate::{Reflect, ReflectError};

impl<T, S> Typed for HashSet<T, S>
where
    T: Reflect + Typed + Eq + Hash,
    S: BuildHasher + Default + Send + Sync + 'static,
{
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Set(SetInfo::new::<Self, T>().with_default::<Self>())
        })
    }
}

impl<T, S> Reflect for HashSet<T, S>
where
    T: Reflect + Typed + Eq + Hash,
    S: BuildHasher + Default + Send + Sync + 'static,
{
    crate::reflection::impl_reflect_cast_fn!(Set);
}

impl<T, S> Set for HashSet<T, S>
where
    T: Reflect + Typed + Eq + Hash,
    S: BuildHasher + Default + Send + Sync + 'static,
{
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
