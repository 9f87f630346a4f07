use alloc::boxed::Box;

use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// A trait used to power list-like operations via reflection.
///
/// This corresponds to types like [`Vec`] and [`VecDeque`], whose elements
/// are ordered and whose length can change.
///
/// # Example
///
/// ```
/// use vc_reflect::{Reflect, ops::List};
///
/// let mut foo = vec![123_u32, 456_u32];
/// assert_eq!(foo.len(), 2);
///
/// List::push(&mut foo, Box::new(789_u32)).unwrap();
/// assert!(List::push(&mut foo, Box::new("x".to_string())).is_err());
///
/// List::truncate(&mut foo, 1);
/// assert_eq!(foo, [123]);
/// ```
///
/// [`VecDeque`]: alloc::collections::VecDeque
pub trait List: Reflect {
    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the element at `index`, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Appends an element to the end of the list.
    ///
    /// Gives the value back if its type is not the element type.
    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Shortens the list, keeping the first `len` elements.
    ///
    /// Has no effect if `len` is greater than the current length.
    fn truncate(&mut self, len: usize);

    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn List {
    /// Returns an iterator over the list.
    #[inline]
    pub fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over an [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl ListItemIter<'_> {
    /// Creates a new iterator for the given list.
    #[inline(always)]
    pub const fn new(list: &dyn List) -> ListItemIter<'_> {
        ListItemIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
