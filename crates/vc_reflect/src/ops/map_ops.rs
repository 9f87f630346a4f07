use alloc::boxed::Box;

use crate::{Reflect, ReflectError};

// -----------------------------------------------------------------------------
// Map

/// A trait used to power map-like operations via reflection.
///
/// This corresponds to types like [`BTreeMap`] and [`HashMap`].
/// Iteration order is the container's own order.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_reflect::{Reflect, ops::Map};
///
/// let mut map = BTreeMap::<u8, String>::new();
/// Map::insert(&mut map, Box::new(2_u8), Box::new("b".to_string())).unwrap();
/// Map::insert(&mut map, Box::new(1_u8), Box::new("a".to_string())).unwrap();
///
/// let keys: Vec<u8> = Map::iter(&map)
///     .map(|(k, _)| *k.downcast_ref::<u8>().unwrap())
///     .collect();
/// assert_eq!(keys, [1, 2]);
///
/// assert!(Map::insert(&mut map, Box::new(3_i64), Box::new(String::new())).is_err());
/// ```
///
/// [`BTreeMap`]: alloc::collections::BTreeMap
/// [`HashMap`]: std::collections::HashMap
pub trait Map: Reflect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the key-value pairs.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;

    /// Inserts a key-value pair, replacing the previous value of an equal key.
    fn insert(
        &mut self,
        key: Box<dyn Reflect>,
        value: Box<dyn Reflect>,
    ) -> Result<(), ReflectError>;

    /// Removes all entries.
    fn clear(&mut self);
}
