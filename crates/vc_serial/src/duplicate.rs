use crate::context::SerializationContext;
use crate::de::Reader;
use crate::instance::{Instance, InstanceMut};
use crate::registry::{CodecRegistry, with_registry};
use crate::ser::Writer;
use crate::uuid::ReferenceMap;

/// Copies `source` onto `target`, remapping object references.
///
/// `source` is written with a rereferencing context built from
/// `reference_map` and read back into `target`. References to objects of
/// the duplicated graph then point at their copies; other references are
/// kept if `maintain_external_references` is set, and severed otherwise.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use vc_reflect::derive::Reflect;
/// use vc_serial::{CodecRegistry, ObjectRef, ReferenceMap, duplicate_with};
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Joint {
///     parent: ObjectRef,
///     world: ObjectRef,
/// }
///
/// let (parent, world) = (Uuid::from_u128(1), Uuid::from_u128(2));
/// let source = Joint { parent: ObjectRef::new(parent), world: ObjectRef::new(world) };
///
/// let map = ReferenceMap::duplicate_of([parent]);
/// let mut copy = Joint::default();
/// duplicate_with(&CodecRegistry::with_builtins(), &source, &mut copy, &map, true);
///
/// assert_eq!(Some(copy.parent.target()), map.get(&parent));
/// assert_eq!(copy.world.target(), world);
/// ```
pub fn duplicate_with<'a, 'b>(
    registry: &CodecRegistry,
    source: impl Into<Instance<'a>>,
    target: impl Into<InstanceMut<'b>>,
    reference_map: &ReferenceMap,
    maintain_external_references: bool,
) {
    let context =
        SerializationContext::rereferencing(reference_map.clone(), maintain_external_references);
    let document = Writer::new(registry).serialize(source, &context);
    Reader::new(registry).deserialize(target, &document);
}

/// Copies `source` onto `target` with the process-wide registry.
///
/// See [`duplicate_with`].
pub fn duplicate<'a, 'b>(
    source: impl Into<Instance<'a>>,
    target: impl Into<InstanceMut<'b>>,
    reference_map: &ReferenceMap,
    maintain_external_references: bool,
) {
    let (source, target) = (source.into(), target.into());
    with_registry(|registry| {
        duplicate_with(registry, source, target, reference_map, maintain_external_references);
    });
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use uuid::Uuid;
    use vc_reflect::derive::Reflect;

    use super::duplicate_with;
    use crate::de::Reader;
    use crate::registry::CodecRegistry;
    use crate::ser::Writer;
    use crate::uuid::{ObjectRef, ReferenceMap, UuidRef};

    #[derive(Reflect, Debug, Default, Clone, PartialEq)]
    #[reflect(default)]
    struct Node {
        id: Uuid,
        name: String,
        links: Vec<ObjectRef>,
    }

    #[test]
    fn internal_references_follow_the_copy() {
        let (a, b, outside) = (Uuid::from_u128(1), Uuid::from_u128(2), Uuid::from_u128(3));
        let source = Node {
            id: a,
            name: "root".into(),
            links: vec![ObjectRef::new(b), ObjectRef::new(outside), ObjectRef::null()],
        };
        let map = ReferenceMap::duplicate_of([a, b]);
        let registry = CodecRegistry::with_builtins();

        let mut kept = Node::default();
        duplicate_with(&registry, &source, &mut kept, &map, true);

        // Plain identifiers are copied verbatim.
        assert_eq!(kept.id, a);
        assert_eq!(kept.name, "root");
        let targets: Vec<Uuid> = kept.links.iter().map(ObjectRef::target).collect();
        assert_eq!(targets, [map.get(&b).unwrap(), outside, Uuid::nil()]);

        let mut severed = Node::default();
        duplicate_with(&registry, &source, &mut severed, &map, false);
        let targets: Vec<Uuid> = severed.links.iter().map(ObjectRef::target).collect();
        assert_eq!(targets, [map.get(&b).unwrap(), Uuid::nil(), Uuid::nil()]);
    }

    #[test]
    fn plain_identifiers_survive_a_reload() {
        #[derive(Reflect, Debug, Default, PartialEq)]
        #[reflect(default)]
        struct Asset {
            data: UuidRef,
            owner: UuidRef,
        }

        let (a, b) = (Uuid::from_u128(0xa), Uuid::from_u128(0xb));
        let registry = CodecRegistry::with_builtins();
        let saved = Asset {
            data: UuidRef::plain(a),
            owner: UuidRef::object(a),
        };

        let document = Writer::new(&registry).serialize_default(&saved);
        let mut loaded = Asset {
            data: UuidRef::plain(Uuid::nil()),
            owner: UuidRef::object(Uuid::nil()),
        };
        Reader::new(&registry).deserialize(&mut loaded, &document);
        assert_eq!(loaded, saved);

        let map: ReferenceMap = [(a, b)].into_iter().collect();
        let mut copy = Asset {
            owner: UuidRef::object(Uuid::nil()),
            ..Asset::default()
        };
        duplicate_with(&registry, &loaded, &mut copy, &map, true);
        assert_eq!(copy.data, UuidRef::plain(a));
        assert_eq!(copy.owner, UuidRef::object(b));
    }

    #[test]
    fn empty_map_copies_the_graph_as_is() {
        let source = Node {
            id: Uuid::from_u128(9),
            name: "leaf".into(),
            links: vec![ObjectRef::new(Uuid::from_u128(10))],
        };

        let mut copy = Node::default();
        duplicate_with(
            &CodecRegistry::with_builtins(),
            &source,
            &mut copy,
            &ReferenceMap::new(),
            true,
        );
        assert_eq!(copy, source);
    }
}
