use alloc::boxed::Box;

use crate::{Reflect, ReflectError};

// -----------------------------------------------------------------------------
// Set

/// A trait used to power set-like operations via reflection.
///
/// This corresponds to types like [`BTreeSet`] and [`HashSet`].
///
/// [`BTreeSet`]: alloc::collections::BTreeSet
/// [`HashSet`]: std::collections::HashSet
pub trait Set: Reflect {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the set contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements.
    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_>;

    /// Inserts a value. Equal values are kept once.
    fn insert(&mut self, value: Box<dyn Reflect>) -> Result<(), ReflectError>;

    /// Removes all elements.
    fn clear(&mut self);
}
