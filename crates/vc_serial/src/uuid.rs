//! Identifiers and references between objects.
//!
//! A plain [`Uuid`] is data and is always written as it is. A [`UuidRef`]
//! tagged [`UuidKind::ObjectReference`] identifies another object of the
//! graph and takes part in rereferencing, see
//! [`SerializationContext`](crate::SerializationContext).

use alloc::boxed::Box;

use foldhash::fast::FixedState;
use hashbrown::HashMap;
use uuid::Uuid;
use vc_reflect::Reflect;
use vc_reflect::derive::Reflect;
use vc_reflect::impls::NonGenericTypeInfoCell;
use vc_reflect::info::{ReflectKind, TypeInfo, Typed, WrapperInfo};
use vc_reflect::ops::{ReflectMut, ReflectRef, Wrapped, Wrapper};

// -----------------------------------------------------------------------------
// Generation

/// Generates a random identifier.
#[inline]
pub fn generate_uuid() -> Uuid {
    Uuid::new_v4()
}

/// Generates the identifier of `name`, stable across runs.
///
/// # Examples
///
/// ```
/// use vc_serial::uuid::generate_uuid_for;
///
/// assert_eq!(generate_uuid_for("Player"), generate_uuid_for("Player"));
/// assert_ne!(generate_uuid_for("Player"), generate_uuid_for("Enemy"));
/// ```
#[inline]
pub fn generate_uuid_for(name: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
}

// -----------------------------------------------------------------------------
// UuidKind

/// What a [`UuidRef`] identifies.
#[derive(Reflect, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[reflect(default)]
pub enum UuidKind {
    /// Opaque data.
    #[default]
    Plain,
    /// Another object of the graph.
    ObjectReference,
}

// -----------------------------------------------------------------------------
// UuidRef

/// An identifier tagged with what it identifies.
///
/// Always written as the hyphenated identifier alone; the kind is not
/// persisted. Decoding yields an [`ObjectReference`](UuidKind::ObjectReference).
#[derive(Reflect, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[reflect(default)]
pub struct UuidRef {
    pub uuid: Uuid,
    pub kind: UuidKind,
}

impl UuidRef {
    #[inline]
    pub const fn plain(uuid: Uuid) -> Self {
        Self {
            uuid,
            kind: UuidKind::Plain,
        }
    }

    #[inline]
    pub const fn object(uuid: Uuid) -> Self {
        Self {
            uuid,
            kind: UuidKind::ObjectReference,
        }
    }
}

// -----------------------------------------------------------------------------
// ObjectRef

/// A handle to another object of the graph, identified by its UUID.
///
/// It is reflected as a wrapper around an object reference [`UuidRef`], so
/// it is written as that identifier and remapped when a graph is duplicated.
/// The nil UUID means the handle points at nothing.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use vc_reflect::ops::Wrapper;
/// use vc_serial::{ObjectRef, UuidKind, UuidRef};
///
/// let target = Uuid::from_u128(5);
/// let handle = ObjectRef::new(target);
///
/// let wrapped = handle.wrapped();
/// assert_eq!(wrapped.downcast_ref::<UuidRef>(), Some(&UuidRef::object(target)));
/// assert!(ObjectRef::default().is_null());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    target: Uuid,
}

impl ObjectRef {
    #[inline]
    pub const fn new(target: Uuid) -> Self {
        Self { target }
    }

    /// Creates a handle that points at nothing.
    #[inline]
    pub const fn null() -> Self {
        Self { target: Uuid::nil() }
    }

    #[inline]
    pub const fn target(&self) -> Uuid {
        self.target
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.target.is_nil()
    }
}

fn wrap_object_ref(value: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>> {
    let reference = value.take::<UuidRef>()?;
    Ok(Box::new(ObjectRef::new(reference.uuid)))
}

impl Typed for ObjectRef {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::Wrapper(
                WrapperInfo::new::<Self, UuidRef>(wrap_object_ref).with_default::<Self>(),
            )
        })
    }
}

impl Reflect for ObjectRef {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        <Self as Typed>::type_info()
    }

    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Wrapper
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Wrapper(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Wrapper(self)
    }
}

impl Wrapper for ObjectRef {
    #[inline]
    fn wrapped(&self) -> Wrapped<'_> {
        Wrapped::Owned(Box::new(UuidRef::object(self.target)))
    }

    fn set_wrapped(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        self.target = value.take::<UuidRef>()?.uuid;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ReferenceMap

/// Maps the identifiers of an original graph to those of its duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceMap(HashMap<Uuid, Uuid, FixedState>);

impl ReferenceMap {
    #[inline]
    pub fn new() -> Self {
        Self(HashMap::with_hasher(FixedState::default()))
    }

    /// Assigns a freshly generated identifier to each of `originals`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use vc_serial::ReferenceMap;
    ///
    /// let ids = [Uuid::from_u128(1), Uuid::from_u128(2)];
    /// let map = ReferenceMap::duplicate_of(ids);
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_ne!(map.get(&ids[0]), Some(ids[0]));
    /// ```
    pub fn duplicate_of(originals: impl IntoIterator<Item = Uuid>) -> Self {
        originals
            .into_iter()
            .map(|original| (original, generate_uuid()))
            .collect()
    }

    /// Records that `original` is duplicated as `duplicate`.
    ///
    /// Returns the previous duplicate of `original`, if any.
    #[inline]
    pub fn insert(&mut self, original: Uuid, duplicate: Uuid) -> Option<Uuid> {
        self.0.insert(original, duplicate)
    }

    /// Returns the duplicate of `original`.
    #[inline]
    pub fn get(&self, original: &Uuid) -> Option<Uuid> {
        self.0.get(original).copied()
    }

    #[inline]
    pub fn contains(&self, original: &Uuid) -> bool {
        self.0.contains_key(original)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the `(original, duplicate)` pairs.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Uuid, Uuid)> + '_ {
        self.0.iter().map(|(original, duplicate)| (*original, *duplicate))
    }
}

impl FromIterator<(Uuid, Uuid)> for ReferenceMap {
    fn from_iter<I: IntoIterator<Item = (Uuid, Uuid)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.0.extend(iter);
        map
    }
}

impl Extend<(Uuid, Uuid)> for ReferenceMap {
    #[inline]
    fn extend<I: IntoIterator<Item = (Uuid, Uuid)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;
    use vc_reflect::Reflect;
    use vc_reflect::info::Typed;
    use vc_reflect::ops::Wrapper;

    use super::{ObjectRef, ReferenceMap, UuidKind, UuidRef, generate_uuid};

    #[test]
    fn object_ref_is_a_wrapper_of_uuid_ref() {
        let info = ObjectRef::type_info();
        assert!(info.is_wrapper());
        assert!(info.wrapped_type().unwrap().type_is::<UuidRef>());

        let built = info.as_wrapper().unwrap();
        let wrapped = built.wrap(Box::new(UuidRef::plain(Uuid::from_u128(9)))).unwrap();
        assert_eq!(wrapped.downcast_ref::<ObjectRef>(), Some(&ObjectRef::new(Uuid::from_u128(9))));
    }

    #[test]
    fn object_ref_set_wrapped() {
        let mut handle = ObjectRef::null();
        let id = Uuid::from_u128(11);

        handle.set_wrapped(Box::new(UuidRef::object(id))).unwrap();
        assert_eq!(handle.target(), id);
        assert!(handle.set_wrapped(Box::new(id)).is_err());

        let constructed = ObjectRef::type_info().construct().unwrap();
        assert!(constructed.take::<ObjectRef>().unwrap().is_null());
    }

    #[test]
    fn uuid_ref_is_reflected() {
        let reference = UuidRef::object(Uuid::from_u128(1));
        let fields = reference.reflect_ref().as_struct().unwrap();
        assert_eq!(
            fields.field("kind").unwrap().downcast_ref::<UuidKind>(),
            Some(&UuidKind::ObjectReference)
        );
    }

    #[test]
    fn duplicate_of_generates_distinct_ids() {
        let originals: Vec<Uuid> = (0..8).map(|_| generate_uuid()).collect();
        let map = ReferenceMap::duplicate_of(originals.iter().copied());

        assert_eq!(map.len(), originals.len());
        for (original, duplicate) in map.iter() {
            assert!(originals.contains(&original));
            assert!(!originals.contains(&duplicate));
        }
    }
}
