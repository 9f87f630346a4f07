use alloc::boxed::Box;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::impls::GenericTypeInfoCell;
use crate::info::{MapInfo, TypeInfo, Typed};
use crate::ops::Map;
use crate::{Reflect, ReflectError};

impl<K, V, S> Typed for HashMap<K, V, S>
where
    K: Reflect + Typed + Eq + Hash,
    V: Reflect + Typed,
    S: BuildHasher + Default + Send + Sync + 'static,
{
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Map(MapInfo::new::<Self, K, V>().with_default::<Self>())
        })
    }
}

impl<K, V, S> Reflect for HashMap<K, V, S>
where
    K: Reflect + Typed + Eq + Hash,
    V: Reflect + Typed,
    S: BuildHasher + Default + Send + Sync + 'static,
{
    crate::reflection::impl_reflect_cast_fn!(Map);
}

impl<K, V, S> Map for HashMap<K, V, S>
where
    K: Reflect + Typed + Eq + Hash,
    V: Reflect + Typed,
    S: BuildHasher + Default + Send + Sync + 'static,
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

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use std::collections::HashMap;

    use crate::Reflect;
    use crate::ReflectError;
    use crate::info::Typed;

    #[test]
    fn hash_map_insert_checks_types() {
        let mut map = HashMap::<String, i32>::new();
        let ops = map.reflect_mut().as_map().unwrap();

        ops.insert(Box::new(String::from("a")), Box::new(1_i32)).unwrap();
        let err = ops
            .insert(Box::new(String::from("b")), Box::new(1_u32))
            .unwrap_err();
        assert!(matches!(err, ReflectError::TypeMismatch { received: "u32", .. }));

        assert_eq!(ops.len(), 1);
        ops.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn hash_map_info() {
        let info = <HashMap<u8, String> as Typed>::type_info();
        assert!(info.is_associative_container());
        let map = info.as_map().unwrap();
        assert!(map.key_info().type_is::<u8>());
        assert!(map.value_info().type_is::<String>());
    }
}
