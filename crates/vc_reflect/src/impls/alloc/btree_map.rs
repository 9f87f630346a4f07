use alloc::boxed::Box;
use alloc::collections::BTreeMap;

use crate::impls::GenericTypeInfoCell;
use crate::info::{MapInfo, TypeInfo, Typed};
use crate::ops::Map;
use crate::{Reflect, ReflectError};

impl<K, V> Typed for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord,
    V: Reflect + Typed,
{
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Map(MapInfo::new::<Self, K, V>().with_default::<Self>())
        })
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord,
    V: Reflect + Typed,
{
    crate::reflection::impl_reflect_cast_fn!(Map);
}

impl<K, V> Map for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord,
    V: Reflect + Typed,
{
    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(Self::iter(self).map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)))
    }

    fn insert(
        &mut self,
        key: Box<dyn Reflect>,
        value: Box<dyn Reflect>,
    ) -> Result<(), ReflectError> {
        let key = key
            .take::<K>()
            .map_err(|key| ReflectError::mismatch::<K>(&*key))?;
        let value = value
            .take::<V>()
            .map_err(|value| ReflectError::mismatch::<V>(&*value))?;
        Self::insert(self, key, value);
        Ok(())
    }

    #[inline]
    fn clear(&mut self) {
        Self::clear(self);
    }
}
