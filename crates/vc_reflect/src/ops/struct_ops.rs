use crate::Reflect;
use crate::info::NamedField;

// -----------------------------------------------------------------------------
// Struct

/// A trait used to power struct-like operations via reflection.
///
/// Fields are addressed by their (possibly renamed) name or by their index in
/// declaration order, matching [`StructInfo`](crate::info::StructInfo).
///
/// # Example
///
/// ```
/// use vc_reflect::{derive::Reflect, Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     bar: u32,
/// }
///
/// let mut foo = Foo { bar: 123 };
/// assert_eq!(foo.field_len(), 1);
/// assert_eq!(foo.field("bar").unwrap().downcast_ref::<u32>(), Some(&123));
///
/// foo.field_mut("bar").unwrap().set(Box::new(7_u32)).unwrap();
/// assert_eq!(foo.bar, 7);
/// ```
pub trait Struct: Reflect {
    /// Returns a reference to the value of the field named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value of the field named `name`.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns a reference to the value of the field with index `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value of the field with index `index`.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of fields in the struct.
    fn field_len(&self) -> usize;
}

impl dyn Struct {
    /// Returns an iterator over the fields, paired with their metadata.
    #[inline]
    pub fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the fields of a struct, yielding each field's
/// [`NamedField`] together with its value.
pub struct StructFieldIter<'a> {
    target: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    #[inline]
    pub const fn new(target: &'a dyn Struct) -> Self {
        Self { target, index: 0 }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a NamedField, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let info = self.target.reflect_type_info().as_struct()?;
        let field = info.field_at(self.index)?;
        let value = self.target.field_at(self.index)?;
        self.index += 1;
        Some((field, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.target.field_len();
        (size - self.index, Some(size - self.index))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
