use alloc::boxed::Box;
use core::any::TypeId;

use uuid::Uuid;
use vc_reflect::Reflect;
use vc_reflect::info::{TypeInfo, Typed};
use vc_reflect::ops::{List, Map, ReflectMut, Set, Struct, Wrapper};

use crate::document::{Document, DocumentMap};
use crate::instance::InstanceMut;
use crate::path_stack;
use crate::registry::CodecRegistry;
use crate::uuid::UuidRef;
use crate::variant::Variant;

const KEY: &str = "key";
const VALUE: &str = "value";

// -----------------------------------------------------------------------------
// Reader

/// Applies [`Document`]s onto live values, in place.
///
/// # Decoding Rules
///
/// Every value is decoded by the first rule that applies:
///
/// 1. A decoder registered for the value's type replaces the value.
///    Wrappers are decoded through their wrapped value.
/// 2. An array rebuilds a sequential container element by element, or
///    refills a set or a map. Map entries are `{"key": .., "value": ..}`
///    objects.
/// 3. An object is applied onto a struct, field by field. Fields missing
///    from the object and fields flagged `read_only` are left untouched.
/// 4. A scalar is converted into the value's type (see [`Variant::convert`]).
///    A [`UuidRef`] only takes the identifier and keeps its kind.
///
/// Whatever does not fit is skipped and the value keeps its prior state.
/// Decoding never fails: partial and outdated documents are valid.
///
/// # Panics
///
/// If a new struct or container value must be created for a type that has
/// no default constructor (see `#[reflect(default)]`). A document that can
/// never fit the type, such as an object for an enum, is skipped instead.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vc_reflect::derive::Reflect;
/// use vc_serial::{CodecRegistry, Reader};
///
/// #[derive(Reflect, Debug, PartialEq)]
/// enum Shape {
///     Box,
///     Sphere,
/// }
///
/// #[derive(Reflect)]
/// struct Collider {
///     shape: Shape,
///     radius: f32,
///     #[reflect(read_only)]
///     id: u32,
/// }
///
/// let registry = CodecRegistry::with_builtins();
/// let mut collider = Collider { shape: Shape::Box, radius: 1.0, id: 4 };
///
/// let document = json!({ "shape": "Sphere", "radius": "oops", "id": 9 });
/// Reader::new(&registry).deserialize(&mut collider, &document);
///
/// assert_eq!(collider.shape, Shape::Sphere);
/// assert_eq!(collider.radius, 1.0);
/// assert_eq!(collider.id, 4);
/// ```
#[derive(Clone, Copy)]
pub struct Reader<'r> {
    registry: &'r CodecRegistry,
}

impl<'r> Reader<'r> {
    #[inline]
    pub const fn new(registry: &'r CodecRegistry) -> Self {
        Self { registry }
    }

    /// Applies `document` onto `instance`.
    ///
    /// Does nothing if `instance` is invalid.
    pub fn deserialize<'a>(&self, instance: impl Into<InstanceMut<'a>>, document: &Document) {
        if let Some(target) = instance.into().into_inner() {
            self.read_value(target, document);
        }
    }

    /// Rebuilds a sequential container from a document array.
    ///
    /// Does nothing if `instance` is invalid or not a sequential container,
    /// or if `document` is not an array.
    pub fn deserialize_sequential_container<'a>(
        &self,
        instance: impl Into<InstanceMut<'a>>,
        document: &Document,
    ) {
        let Some(target) = instance.into().into_inner() else {
            return;
        };
        if let (ReflectMut::List(list), Document::Array(items)) = (target.reflect_mut(), document) {
            self.read_list(list, items);
        }
    }

    /// Applies `document` onto an existing value.
    fn read_value(&self, target: &mut dyn Reflect, document: &Document) {
        let info = target.reflect_type_info();

        if let Some(decode) = self.registry.decoder(info.type_id()) {
            match decode(document) {
                Some(value) => assign(target, value),
                None => skip(info, "the registered decoder rejected the document"),
            }
            return;
        }

        if let Some(reference) = target.downcast_mut::<UuidRef>() {
            self.read_uuid_ref(reference, document);
            return;
        }

        if info.is_wrapper() {
            if let ReflectMut::Wrapper(wrapper) = target.reflect_mut() {
                self.read_wrapper(wrapper, document);
            }
            return;
        }

        match document {
            Document::Array(items) => match target.reflect_mut() {
                ReflectMut::List(list) => self.read_list(list, items),
                ReflectMut::Set(set) => self.read_set(set, items),
                ReflectMut::Map(map) => self.read_map(map, items),
                _ => skip(info, "an array does not fit"),
            },
            Document::Object(fields) => match target.reflect_mut() {
                ReflectMut::Struct(object) => self.read_struct(object, fields),
                _ => skip(info, "an object does not fit"),
            },
            scalar => match Variant::from_document(scalar).convert(info) {
                Some(value) => assign(target, value),
                None => skip(info, "the scalar cannot be converted"),
            },
        }
    }

    /// Builds a new value of the type described by `info` from `document`.
    ///
    /// Returns `None` if the document does not fit the type.
    fn read_new(&self, info: &'static TypeInfo, document: &Document) -> Option<Box<dyn Reflect>> {
        if let Some(decode) = self.registry.decoder(info.type_id()) {
            return decode(document);
        }

        let composite = matches!(document, Document::Array(_) | Document::Object(_));
        if composite && !accepts_composite(info) {
            skip(info, "an array or an object does not fit");
            return None;
        }
        if !composite {
            if info.type_id() == TypeId::of::<UuidRef>() {
                let uuid = self.read_identifier(document)?;
                return Some(Box::new(UuidRef::plain(uuid)));
            }
            let value = Variant::from_document(document).convert(info);
            // Wrappers may still decode the scalar through their wrapped type.
            if value.is_some() || !info.is_wrapper() {
                return value;
            }
        }

        let Some(mut value) = info.construct() else {
            panic!(
                "cannot deserialize into a new `{}`: the type has no default constructor",
                info.type_path()
            );
        };
        self.read_value(&mut *value, document);
        Some(value)
    }

    /// Only the identifier is read: the kind of a reference is a property of
    /// the field holding it, not of the document.
    fn read_uuid_ref(&self, reference: &mut UuidRef, document: &Document) {
        match self.read_identifier(document) {
            Some(uuid) => reference.uuid = uuid,
            None => skip(<UuidRef as Typed>::type_info(), "the document is not an identifier"),
        }
    }

    fn read_identifier(&self, document: &Document) -> Option<Uuid> {
        self.read_new(<Uuid as Typed>::type_info(), document)?
            .take::<Uuid>()
            .ok()
    }

    fn read_wrapper(&self, wrapper: &mut dyn Wrapper, document: &Document) {
        if let Some(inner) = wrapper.wrapped_mut() {
            self.read_value(inner, document);
            return;
        }

        let info = wrapper.reflect_type_info();
        let Some(wrapped_info) = info.wrapped_type() else {
            return;
        };

        match self.read_new(wrapped_info, document) {
            Some(value) => {
                if wrapper.set_wrapped(value).is_err() {
                    skip(info, "the decoded value is not of the wrapped type");
                }
            }
            None => skip(wrapped_info, "the document does not fit the wrapped type"),
        }
    }

    fn read_struct(&self, object: &mut dyn Struct, fields: &DocumentMap) {
        let Some(info) = object.reflect_type_info().as_struct() else {
            return;
        };

        for field in info.iter() {
            if field.is_read_only() {
                continue;
            }
            let Some(document) = fields.get(field.name()) else {
                continue;
            };
            let Some(target) = object.field_mut(field.name()) else {
                continue;
            };

            path_stack::scoped(field.name(), || self.read_value(target, document));
        }
    }

    /// Elements present in both are decoded in place, extra elements are
    /// built new, and the list is truncated to the document's length.
    fn read_list(&self, list: &mut dyn List, items: &[Document]) {
        let Some(item_info) = list.reflect_type_info().as_list().map(|info| info.item_info()) else {
            return;
        };

        for (index, item) in items.iter().enumerate() {
            if let Some(target) = list.get_mut(index) {
                self.read_value(target, item);
                continue;
            }

            let Some(value) = self.read_new(item_info, item).or_else(|| item_info.construct()) else {
                skip(item_info, "an element cannot be built");
                break;
            };
            if list.push(value).is_err() {
                skip(item_info, "an element is not of the item type");
                break;
            }
        }

        list.truncate(items.len());
    }

    fn read_set(&self, set: &mut dyn Set, items: &[Document]) {
        let Some(value_info) = set.reflect_type_info().as_set().map(|info| info.value_info()) else {
            return;
        };

        set.clear();
        for item in items {
            let Some(value) = self.read_new(value_info, item) else {
                skip(value_info, "a set element cannot be built");
                continue;
            };
            if let Err(err) = set.insert(value) {
                let path = path_stack::current_or(value_info.type_path());
                log::debug!("skipped a set element of `{path}`: {err}");
            }
        }
    }

    fn read_map(&self, map: &mut dyn Map, items: &[Document]) {
        let map_info = map.reflect_type_info();
        let Some(info) = map_info.as_map() else {
            return;
        };
        let (key_info, value_info) = (info.key_info(), info.value_info());

        map.clear();
        for item in items {
            let (Some(key), Some(value)) = (item.get(KEY), item.get(VALUE)) else {
                skip(map_info, "a map entry needs both `key` and `value`");
                continue;
            };

            let key = path_stack::scoped(KEY, || self.read_new(key_info, key));
            let value = path_stack::scoped(VALUE, || self.read_new(value_info, value));
            let (Some(key), Some(value)) = (key, value) else {
                skip(map_info, "a map entry cannot be built");
                continue;
            };

            if let Err(err) = map.insert(key, value) {
                let path = path_stack::current_or(map_info.type_path());
                log::debug!("skipped a map entry of `{path}`: {err}");
            }
        }
    }
}

/// Whether an array or an object can ever be decoded into a new value of
/// this type.
fn accepts_composite(info: &'static TypeInfo) -> bool {
    match info {
        TypeInfo::Struct(_) | TypeInfo::List(_) | TypeInfo::Map(_) | TypeInfo::Set(_) => true,
        TypeInfo::Wrapper(wrapper) => accepts_composite(wrapper.wrapped_info()),
        _ => false,
    }
}

fn assign(target: &mut dyn Reflect, value: Box<dyn Reflect>) {
    if let Err(value) = target.set(value) {
        log::debug!(
            "skipped `{}`: cannot assign a `{}`",
            path_stack::current_or(target.reflect_type_info().type_path()),
            value.reflect_type_info().type_path(),
        );
    }
}

fn skip(info: &'static TypeInfo, reason: &str) {
    log::debug!("skipped `{}`: {reason}", path_stack::current_or(info.type_path()));
}

#[cfg(test)]
mod tests {
    use alloc::collections::{BTreeMap, BTreeSet};
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use serde_json::json;
    use uuid::Uuid;
    use vc_reflect::derive::Reflect;

    use super::Reader;
    use crate::document::Document;
    use crate::instance::InstanceMut;
    use crate::registry::CodecRegistry;
    use crate::uuid::{ObjectRef, UuidRef};

    #[derive(Reflect, Debug, Default, Clone, Copy, PartialEq)]
    #[reflect(default)]
    enum Mode {
        #[default]
        Idle,
        Run = 2,
    }

    #[derive(Reflect, Debug, Default, Clone, PartialEq)]
    #[reflect(default)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Reflect, Debug, Default, PartialEq)]
    #[reflect(default)]
    struct Actor {
        name: String,
        mode: Mode,
        speed: f64,
        #[reflect(read_only)]
        serial: u32,
        path: Vec<Point>,
        tags: BTreeSet<String>,
        stats: BTreeMap<String, u16>,
        home: Box<Point>,
        owner: ObjectRef,
    }

    fn read(target: &mut Actor, document: &Document) {
        let registry = CodecRegistry::with_builtins();
        Reader::new(&registry).deserialize(target, document);
    }

    #[test]
    fn partial_documents_leave_the_rest_untouched() {
        let mut actor = Actor {
            name: "scout".into(),
            speed: 2.5,
            ..Actor::default()
        };
        read(&mut actor, &json!({ "mode": "Run", "unknown": true }));

        assert_eq!(actor.mode, Mode::Run);
        assert_eq!(actor.name, "scout");
        assert_eq!(actor.speed, 2.5);
    }

    #[test]
    fn read_only_fields_are_never_set() {
        let mut actor = Actor {
            serial: 17,
            ..Actor::default()
        };
        read(&mut actor, &json!({ "serial": 99, "speed": 1 }));

        assert_eq!(actor.serial, 17);
        assert_eq!(actor.speed, 1.0);
    }

    #[test]
    fn unconvertible_scalars_are_skipped() {
        let mut actor = Actor {
            name: "scout".into(),
            mode: Mode::Run,
            speed: 3.0,
            ..Actor::default()
        };
        read(&mut actor, &json!({ "name": null, "mode": "Fly", "speed": [1] }));

        assert_eq!(actor.name, "scout");
        assert_eq!(actor.mode, Mode::Run);
        assert_eq!(actor.speed, 3.0);

        // Numbers select enum variants by discriminant.
        read(&mut actor, &json!({ "mode": 0 }));
        assert_eq!(actor.mode, Mode::Idle);
    }

    #[test]
    fn lists_are_resized_to_the_document() {
        let mut actor = Actor {
            path: vec![Point { x: 1, y: 1 }, Point { x: 2, y: 2 }, Point { x: 3, y: 3 }],
            ..Actor::default()
        };

        // The first element is updated in place, so `y` keeps its value.
        read(&mut actor, &json!({ "path": [{ "x": 10 }, { "x": 20, "y": 20 }] }));
        assert_eq!(actor.path, [Point { x: 10, y: 1 }, Point { x: 20, y: 20 }]);

        read(&mut actor, &json!({ "path": [{}, {}, { "y": 5 }] }));
        assert_eq!(actor.path.len(), 3);
        assert_eq!(actor.path[2], Point { x: 0, y: 5 });
    }

    #[test]
    fn associative_containers_are_rebuilt() {
        let mut actor = Actor {
            tags: BTreeSet::from(["old".to_string()]),
            stats: BTreeMap::from([("hp".to_string(), 1)]),
            ..Actor::default()
        };
        let document = json!({
            "tags": ["b", "a", "b"],
            "stats": [
                { "key": "hp", "value": 10 },
                { "key": "mp" },
                { "key": "str", "value": -1 },
                { "key": "dex", "value": 4 },
            ],
        });
        read(&mut actor, &document);

        assert_eq!(actor.tags, BTreeSet::from(["a".to_string(), "b".to_string()]));
        assert_eq!(
            actor.stats,
            BTreeMap::from([("hp".to_string(), 10), ("dex".to_string(), 4)])
        );
    }

    #[test]
    fn maps_of_structs() {
        let registry = CodecRegistry::new();
        let mut points = HashMap::<u8, Point>::new();

        let document = json!([{ "key": 1, "value": { "x": 3, "y": 4 } }]);
        Reader::new(&registry).deserialize(&mut points, &document);
        assert_eq!(points.get(&1), Some(&Point { x: 3, y: 4 }));
    }

    #[test]
    fn wrappers_decode_through_their_wrapped_value() {
        let id = Uuid::from_u128(42);
        let mut actor = Actor::default();
        read(
            &mut actor,
            &json!({
                "home": { "x": 7 },
                "owner": id.to_string(),
            }),
        );

        assert_eq!(*actor.home, Point { x: 7, y: 0 });
        assert_eq!(actor.owner.target(), id);

        read(&mut actor, &json!({ "owner": "not an id" }));
        assert_eq!(actor.owner.target(), id);
    }

    #[test]
    fn decoders_win_over_generic_rules() {
        let mut registry = CodecRegistry::new();
        registry.register_decoder::<Point>(|doc| {
            let [x, y] = doc.as_array()?.as_slice() else {
                return None;
            };
            Some(Point {
                x: x.as_i64()? as i32,
                y: y.as_i64()? as i32,
            })
        });
        let reader = Reader::new(&registry);

        let mut actor = Actor::default();
        reader.deserialize(&mut actor, &json!({ "home": [1, 2], "path": [[3, 4]] }));
        assert_eq!(*actor.home, Point { x: 1, y: 2 });
        assert_eq!(actor.path, [Point { x: 3, y: 4 }]);

        // A top-level instance is replaced as a whole.
        let mut point = Point::default();
        reader.deserialize(&mut point, &json!([5, 6]));
        assert_eq!(point, Point { x: 5, y: 6 });

        // A rejected document leaves the value untouched.
        reader.deserialize(&mut point, &json!({ "x": 9 }));
        assert_eq!(point, Point { x: 5, y: 6 });
    }

    #[test]
    fn sequential_container_entry_point() {
        let registry = CodecRegistry::new();
        let reader = Reader::new(&registry);

        let mut modes = vec![Mode::Run];
        reader.deserialize_sequential_container(&mut modes, &json!(["Idle", "Run", 2]));
        assert_eq!(modes, [Mode::Idle, Mode::Run, Mode::Run]);

        reader.deserialize_sequential_container(&mut modes, &json!({ "x": 1 }));
        assert_eq!(modes.len(), 3);

        reader.deserialize_sequential_container(InstanceMut::invalid(), &json!([]));
    }

    #[test]
    fn composite_documents_never_build_scalar_values() {
        #[derive(Reflect, Debug, PartialEq)]
        enum Shape {
            Round,
            Square,
        }

        #[derive(Reflect, Default)]
        #[reflect(default)]
        struct Board {
            shapes: Vec<Shape>,
            by_slot: BTreeMap<u8, Shape>,
            ids: Vec<Uuid>,
        }

        let registry = CodecRegistry::with_builtins();
        let mut board = Board::default();
        let document = json!({
            "shapes": ["Square", {}, "Round"],
            "by_slot": [
                { "key": 1, "value": "Round" },
                { "key": 2, "value": { "v": 1 } },
                { "key": [3], "value": "Square" },
            ],
            "ids": [[1, 2]],
        });
        Reader::new(&registry).deserialize(&mut board, &document);

        // Without a constructor the list stops at the element it cannot build.
        assert_eq!(board.shapes, [Shape::Square]);
        assert_eq!(board.by_slot, BTreeMap::from([(1, Shape::Round)]));
        // `Uuid` has a constructor, so the position is kept.
        assert_eq!(board.ids, [Uuid::nil()]);
    }

    #[test]
    fn identifiers_keep_their_kind() {
        #[derive(Reflect, Default)]
        #[reflect(default)]
        struct Asset {
            data: UuidRef,
            target: UuidRef,
            history: Vec<UuidRef>,
        }

        let (a, b) = (Uuid::from_u128(0xa), Uuid::from_u128(0xb));
        let mut asset = Asset {
            data: UuidRef::plain(Uuid::nil()),
            target: UuidRef::object(Uuid::nil()),
            history: Vec::new(),
        };
        let document = json!({
            "data": a.to_string(),
            "target": b.to_string(),
            "history": [a.to_string(), "nope"],
        });

        // The textual form of `Uuid` is enough, even without codecs.
        for registry in [CodecRegistry::new(), CodecRegistry::with_builtins()] {
            Reader::new(&registry).deserialize(&mut asset, &document);

            assert_eq!(asset.data, UuidRef::plain(a));
            assert_eq!(asset.target, UuidRef::object(b));
            assert_eq!(asset.history, [UuidRef::plain(a), UuidRef::default()]);
        }

        let registry = CodecRegistry::with_builtins();
        Reader::new(&registry).deserialize(&mut asset.target, &json!({ "uuid": 3 }));
        assert_eq!(asset.target, UuidRef::object(b));
    }

    #[test]
    #[should_panic(expected = "no default constructor")]
    fn missing_constructor_is_a_programming_error() {
        #[derive(Reflect, Debug)]
        #[allow(dead_code)]
        struct Bare {
            v: u8,
        }

        let registry = CodecRegistry::new();
        let mut list: Vec<Bare> = Vec::new();
        Reader::new(&registry).deserialize(&mut list, &json!([{ "v": 1 }]));
    }
}
