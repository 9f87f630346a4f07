use uuid::Uuid;

use crate::uuid::{ReferenceMap, UuidKind, UuidRef};

// -----------------------------------------------------------------------------
// SerializationContext

/// Per-call parameters of the [`Writer`](crate::Writer).
///
/// The default context is plain persistence: every identifier is written
/// as it is.
///
/// With [`rereference`](Self::rereference) set, object references are
/// remapped through [`reference_map`](Self::reference_map). References that
/// have no entry keep pointing at the original if
/// [`maintain_external_references`](Self::maintain_external_references) is
/// set, and are severed to the nil UUID otherwise.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use vc_serial::{ReferenceMap, SerializationContext, UuidRef};
///
/// let (a, b, c) = (Uuid::from_u128(1), Uuid::from_u128(2), Uuid::from_u128(3));
///
/// let mut map = ReferenceMap::new();
/// map.insert(a, b);
///
/// let context = SerializationContext::rereferencing(map, false);
/// assert_eq!(context.resolve(UuidRef::object(a)), b);
/// assert_eq!(context.resolve(UuidRef::object(c)), Uuid::nil());
/// assert_eq!(context.resolve(UuidRef::plain(a)), a);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializationContext {
    /// Remap object references through `reference_map`.
    pub rereference: bool,
    /// Keep references that have no entry in `reference_map`.
    pub maintain_external_references: bool,
    pub reference_map: ReferenceMap,
}

impl Default for SerializationContext {
    #[inline]
    fn default() -> Self {
        Self {
            rereference: false,
            maintain_external_references: true,
            reference_map: ReferenceMap::new(),
        }
    }
}

impl SerializationContext {
    /// Creates a context that remaps object references through `reference_map`.
    #[inline]
    pub fn rereferencing(reference_map: ReferenceMap, maintain_external_references: bool) -> Self {
        Self {
            rereference: true,
            maintain_external_references,
            reference_map,
        }
    }

    /// Returns the identifier to write for `reference`.
    pub fn resolve(&self, reference: UuidRef) -> Uuid {
        if !self.rereference || reference.kind != UuidKind::ObjectReference {
            return reference.uuid;
        }

        if let Some(duplicate) = self.reference_map.get(&reference.uuid) {
            duplicate
        } else if self.maintain_external_references {
            reference.uuid
        } else {
            Uuid::nil()
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::SerializationContext;
    use crate::uuid::{ReferenceMap, UuidRef};

    #[test]
    fn default_context_is_plain_persistence() {
        let context = SerializationContext::default();
        assert!(!context.rereference);
        assert!(context.maintain_external_references);
        assert!(context.reference_map.is_empty());

        let id = Uuid::from_u128(7);
        assert_eq!(context.resolve(UuidRef::object(id)), id);
    }

    #[test]
    fn external_references_are_kept_or_severed() {
        let (a, b, c) = (Uuid::from_u128(1), Uuid::from_u128(2), Uuid::from_u128(3));
        let map: ReferenceMap = [(a, b)].into_iter().collect();

        let keep = SerializationContext::rereferencing(map.clone(), true);
        assert_eq!(keep.resolve(UuidRef::object(a)), b);
        assert_eq!(keep.resolve(UuidRef::object(c)), c);

        let sever = SerializationContext::rereferencing(map, false);
        assert_eq!(sever.resolve(UuidRef::object(c)), Uuid::nil());
        assert_eq!(sever.resolve(UuidRef::plain(c)), c);
    }
}
