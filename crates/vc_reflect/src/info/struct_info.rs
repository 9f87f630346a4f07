use alloc::boxed::Box;

use foldhash::fast::FixedState;
use hashbrown::HashMap;

use crate::info::type_info::impl_type_fn;
use crate::info::{NamedField, Type};

// -----------------------------------------------------------------------------
// StructInfo

/// Type information of a struct with named fields.
///
/// Fields keep their declaration order, which is also the order in which a
/// serializer emits them.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     a: i32,
///     b: String,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("b"), Some(1));
/// assert!(info.field("c").is_none());
/// ```
#[derive(Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_names: Box<[&'static str]>,
    field_indices: HashMap<&'static str, usize, FixedState>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Creates a new [`StructInfo`].
    ///
    /// The order of `fields` is the declaration order.
    pub fn new<T: 'static>(fields: &[NamedField]) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        let field_names = fields.iter().map(NamedField::name).collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.to_vec().into_boxed_slice(),
            field_names,
            field_indices,
        }
    }

    /// Returns the field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.field_indices
            .get(name)
            .map(|index| &self.fields[*index])
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the index for the given field `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Returns an iterator over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, NamedField> {
        self.fields.iter()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
