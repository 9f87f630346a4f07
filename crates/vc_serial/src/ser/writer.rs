use alloc::string::String;
use alloc::vec::Vec;

use vc_reflect::Reflect;
use vc_reflect::ops::{Enum, List, Map, ReflectRef, Set, Struct};

use crate::context::SerializationContext;
use crate::document::{Document, DocumentMap};
use crate::error::EncodeError;
use crate::instance::Instance;
use crate::path_stack;
use crate::registry::CodecRegistry;
use crate::variant::Variant;

const KEY: &str = "key";
const VALUE: &str = "value";

// -----------------------------------------------------------------------------
// Writer

/// Encodes live values into [`Document`]s.
///
/// # Encoding Rules
///
/// Every value is encoded by the first rule that applies:
///
/// 1. A codec registered for the value's type. For wrappers, the wrapped
///    value is then looked up too.
/// 2. Atomics: booleans and numbers as themselves, `char` and `String` as
///    strings. Enums as their variant name, else their discriminant, else null.
/// 3. Object references ([`UuidRef`](crate::UuidRef)) as the identifier,
///    rereferenced through the [`SerializationContext`].
/// 4. Sequential containers as an array of their encoded elements.
/// 5. Sets as an array of their encoded elements, maps as an array of
///    `{"key": .., "value": ..}` objects.
/// 6. Structs with fields as an object of their fields, in declaration
///    order. Fields flagged `no_serialize` are left out.
/// 7. The textual form of the value, if it has one.
///
/// A value no rule applies to is logged and left out of its parent.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use serde_json::json;
/// use vc_reflect::derive::Reflect;
/// use vc_serial::{CodecRegistry, SerializationContext, Writer};
///
/// #[derive(Reflect)]
/// struct Inventory {
///     slots: BTreeMap<String, u32>,
///     #[reflect(no_serialize)]
///     dirty: bool,
/// }
///
/// let registry = CodecRegistry::with_builtins();
/// let inventory = Inventory {
///     slots: BTreeMap::from([("arrows".to_string(), 12)]),
///     dirty: true,
/// };
///
/// let document = Writer::new(&registry).serialize(&inventory, &SerializationContext::default());
/// assert_eq!(document, json!({ "slots": [{ "key": "arrows", "value": 12 }] }));
/// ```
#[derive(Clone, Copy)]
pub struct Writer<'r> {
    registry: &'r CodecRegistry,
}

impl<'r> Writer<'r> {
    #[inline]
    pub const fn new(registry: &'r CodecRegistry) -> Self {
        Self { registry }
    }

    /// Encodes `instance` under `context`.
    ///
    /// Returns [`Document::Null`] if `instance` is invalid, or if the value
    /// cannot be encoded at all.
    pub fn serialize<'a>(
        &self,
        instance: impl Into<Instance<'a>>,
        context: &SerializationContext,
    ) -> Document {
        let Some(value) = instance.into().get() else {
            return Document::Null;
        };

        match self.write_root(value, context) {
            Ok(document) => document,
            Err(err) => {
                log::error!("cannot serialize instance: {err}");
                Document::Null
            }
        }
    }

    /// Encodes `instance` for plain persistence.
    #[inline]
    pub fn serialize_default<'a>(&self, instance: impl Into<Instance<'a>>) -> Document {
        self.serialize(instance, &SerializationContext::default())
    }

    /// Encodes a sequential container as a document array.
    ///
    /// Returns [`Document::Null`] if `instance` is invalid or not a
    /// sequential container.
    pub fn serialize_sequential_container<'a>(
        &self,
        instance: impl Into<Instance<'a>>,
        context: &SerializationContext,
    ) -> Document {
        match instance.into().get().map(Reflect::reflect_ref) {
            Some(ReflectRef::List(list)) => self.write_list(list, context),
            _ => Document::Null,
        }
    }

    /// The entry point: a struct is always written as an object, even
    /// without fields.
    fn write_root(
        &self,
        value: &dyn Reflect,
        context: &SerializationContext,
    ) -> Result<Document, EncodeError> {
        if let Some(encode) = self.registry.encoder(value.ty_id()) {
            return Ok(encode(value, context));
        }

        match Variant::of(value) {
            Variant::Object(object) => Ok(self.write_struct(object, context)),
            Variant::Wrapped(wrapped) => self.write_root(&*wrapped, context),
            variant => self.write_variant(value, variant, context),
        }
    }

    fn write_value(
        &self,
        value: &dyn Reflect,
        context: &SerializationContext,
    ) -> Result<Document, EncodeError> {
        if let Some(encode) = self.registry.encoder(value.ty_id()) {
            return Ok(encode(value, context));
        }

        self.write_variant(value, Variant::of(value), context)
    }

    fn write_variant(
        &self,
        value: &dyn Reflect,
        variant: Variant<'_>,
        context: &SerializationContext,
    ) -> Result<Document, EncodeError> {
        let document = match variant {
            Variant::Null => Document::Null,
            Variant::Bool(v) => Document::Bool(v),
            Variant::Char(v) => Document::String(String::from(v)),
            Variant::Int(v) => Document::from(v),
            Variant::UInt(v) => Document::from(v),
            Variant::Float(v) => Document::from(v),
            Variant::Str(v) => Document::String(v.into_owned()),
            Variant::Enum(v) => write_enum(v),
            Variant::Reference(v) => Document::String(context.resolve(v).hyphenated().to_string()),
            Variant::Sequential(v) => self.write_list(v, context),
            Variant::Set(v) => self.write_set(v, context),
            Variant::Map(v) => self.write_map(v, context),
            Variant::Object(v) if v.field_len() > 0 => self.write_struct(v, context),
            Variant::Wrapped(v) => return self.write_value(&*v, context),
            Variant::Object(_) | Variant::Opaque(_) => write_text(value)?,
        };
        Ok(document)
    }

    fn write_struct(&self, object: &dyn Struct, context: &SerializationContext) -> Document {
        let mut fields = DocumentMap::new();

        for (field, value) in object.iter_fields() {
            if field.is_no_serialize() {
                continue;
            }

            let name = field.name();
            path_stack::scoped(name, || match self.write_value(value, context) {
                Ok(document) => {
                    fields.insert(String::from(name), document);
                }
                Err(err) => {
                    log::error!(
                        "cannot serialize property `{}`: {err}",
                        path_stack::current_or(name)
                    );
                }
            });
        }

        Document::Object(fields)
    }

    fn write_list(&self, list: &dyn List, context: &SerializationContext) -> Document {
        let items = list
            .iter()
            .map(|item| self.write_element(item, context))
            .collect::<Vec<_>>();
        Document::Array(items)
    }

    fn write_set(&self, set: &dyn Set, context: &SerializationContext) -> Document {
        let items = set
            .iter()
            .map(|item| self.write_element(item, context))
            .collect::<Vec<_>>();
        Document::Array(items)
    }

    fn write_map(&self, map: &dyn Map, context: &SerializationContext) -> Document {
        let entries = map
            .iter()
            .map(|(key, value)| {
                let mut entry = DocumentMap::new();
                let key = path_stack::scoped(KEY, || self.write_element(key, context));
                let value = path_stack::scoped(VALUE, || self.write_element(value, context));
                entry.insert(String::from(KEY), key);
                entry.insert(String::from(VALUE), value);
                Document::Object(entry)
            })
            .collect::<Vec<_>>();
        Document::Array(entries)
    }

    /// Container elements keep their position: one that cannot be encoded
    /// is written as null.
    fn write_element(&self, item: &dyn Reflect, context: &SerializationContext) -> Document {
        match self.write_value(item, context) {
            Ok(document) => document,
            Err(err) => {
                let path = path_stack::current_or(item.reflect_type_info().type_path());
                log::error!("cannot serialize element of `{path}`: {err}");
                Document::Null
            }
        }
    }
}

fn write_enum(value: &dyn Enum) -> Document {
    if let Some(name) = value.variant_name() {
        Document::String(String::from(name))
    } else if let Some(discriminant) = value.discriminant() {
        Document::from(discriminant)
    } else {
        Document::Null
    }
}

fn write_text(value: &dyn Reflect) -> Result<Document, EncodeError> {
    value
        .reflect_to_string()
        .map(Document::String)
        .ok_or(EncodeError::Unencodable {
            type_path: value.reflect_type_info().type_path(),
        })
}

#[cfg(test)]
mod tests {
    use alloc::collections::{BTreeMap, BTreeSet};
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use serde_json::json;
    use uuid::Uuid;
    use vc_reflect::Reflect;
    use vc_reflect::derive::Reflect;
    use vc_reflect::info::{EnumInfo, ReflectKind, TypeInfo, Typed, VariantInfo};
    use vc_reflect::impls::NonGenericTypeInfoCell;
    use vc_reflect::ops::{Enum, ReflectMut, ReflectRef};

    use super::Writer;
    use crate::context::SerializationContext;
    use crate::document::Document;
    use crate::instance::Instance;
    use crate::registry::CodecRegistry;
    use crate::uuid::{ObjectRef, ReferenceMap, UuidRef};

    #[derive(Reflect, Default)]
    #[reflect(default)]
    struct Sample {
        #[reflect(rename = "Foo")]
        foo: i32,
        #[reflect(rename = "Bar")]
        bar: f32,
    }

    #[derive(Reflect, Debug, Clone, Copy, PartialEq)]
    enum Blend {
        Opaque,
        Additive = 3,
    }

    #[derive(Reflect)]
    struct Material {
        name: String,
        blend: Blend,
        #[reflect(no_serialize)]
        cache: Vec<u8>,
        layers: Vec<Vec<u8>>,
        tint: Box<Color>,
    }

    #[derive(Reflect, Default, Clone, Copy)]
    #[reflect(default)]
    struct Color {
        r: u8,
        g: u8,
        b: u8,
    }

    #[derive(Reflect)]
    struct Empty {}

    #[derive(Reflect)]
    struct Holder {
        empty: Empty,
        id: Uuid,
        count: u8,
    }

    fn material() -> Material {
        Material {
            name: "stone".into(),
            blend: Blend::Additive,
            cache: vec![1, 2, 3],
            layers: vec![vec![1], vec![], vec![2, 3]],
            tint: Box::new(Color { r: 1, g: 2, b: 3 }),
        }
    }

    fn write(value: &dyn Reflect) -> Document {
        let registry = CodecRegistry::with_builtins();
        Writer::new(&registry).serialize(Instance::new(value), &SerializationContext::default())
    }

    #[test]
    fn atomic_fields_in_declaration_order() {
        let document = write(&Sample { foo: 1, bar: 0.5 });
        assert_eq!(document, json!({ "Foo": 1, "Bar": 0.5 }));
        assert_eq!(document.to_string(), r#"{"Foo":1,"Bar":0.5}"#);
    }

    #[test]
    fn nested_values_and_exclusions() {
        let document = write(&material());
        assert_eq!(
            document,
            json!({
                "name": "stone",
                "blend": "Additive",
                "layers": [[1], [], [2, 3]],
                "tint": { "r": 1, "g": 2, "b": 3 },
            })
        );
        assert!(document.get("cache").is_none());
    }

    #[test]
    fn serialization_is_idempotent() {
        let registry = CodecRegistry::with_builtins();
        let writer = Writer::new(&registry);
        let context = SerializationContext::default();
        let value = material();
        assert_eq!(writer.serialize(&value, &context), writer.serialize(&value, &context));
    }

    #[test]
    fn invalid_instance_is_the_empty_document() {
        assert_eq!(write_instance(Instance::invalid()), Document::Null);
        assert_eq!(write_instance(Instance::from(None::<&Sample>)), Document::Null);
    }

    fn write_instance(instance: Instance<'_>) -> Document {
        let registry = CodecRegistry::new();
        Writer::new(&registry).serialize(instance, &SerializationContext::default())
    }

    #[test]
    fn container_shapes() {
        let set = BTreeSet::from([3_u8, 1, 2]);
        assert_eq!(write(&set), json!([1, 2, 3]));

        let map = BTreeMap::from([(String::from("a"), 1_i64)]);
        assert_eq!(write(&map), json!([{ "key": "a", "value": 1 }]));

        let nested = BTreeMap::from([(1_u8, vec![Color::default()])]);
        assert_eq!(
            write(&nested),
            json!([{ "key": 1, "value": [{ "r": 0, "g": 0, "b": 0 }] }])
        );
    }

    #[test]
    fn sequential_container_entry_point() {
        let registry = CodecRegistry::new();
        let writer = Writer::new(&registry);
        let context = SerializationContext::default();

        let list = vec![Blend::Opaque, Blend::Additive];
        assert_eq!(
            writer.serialize_sequential_container(&list, &context),
            json!(["Opaque", "Additive"])
        );
        assert_eq!(writer.serialize_sequential_container(&5_u8, &context), Document::Null);
    }

    #[test]
    fn codec_wins_over_generic_rules() {
        let mut registry = CodecRegistry::with_builtins();
        registry.register::<Color>(|c, _| json!([c.r, c.g, c.b]), |_| None);
        registry.register::<u8>(|v, _| json!(u32::from(*v) * 10), |_| None);

        let writer = Writer::new(&registry);
        let context = SerializationContext::default();

        // The codec of the wrapped type applies through `Box`.
        let document = writer.serialize(&material(), &context);
        assert_eq!(document["tint"], json!([1, 2, 3]));
        assert_eq!(document["layers"], json!([[10], [], [20, 30]]));

        // And to a top-level instance.
        let color = Color { r: 4, g: 5, b: 6 };
        assert_eq!(writer.serialize(&color, &context), json!([4, 5, 6]));
    }

    #[test]
    fn unencodable_values_are_left_out() {
        let holder = Holder {
            empty: Empty {},
            id: Uuid::from_u128(1),
            count: 2,
        };

        // Without the built-in codecs `Uuid` falls back to its textual form,
        // while a struct without fields has none.
        let registry = CodecRegistry::new();
        let document = Writer::new(&registry).serialize(&holder, &SerializationContext::default());
        assert_eq!(
            document,
            json!({ "id": "00000000-0000-0000-0000-000000000001", "count": 2 })
        );

        // At the top level a struct is an object, even without fields.
        let empty = Writer::new(&registry).serialize(&Empty {}, &SerializationContext::default());
        assert_eq!(empty, json!({}));
    }

    #[test]
    fn object_references_are_rereferenced() {
        #[derive(Reflect)]
        struct Link {
            target: ObjectRef,
            raw: Uuid,
            tagged: UuidRef,
        }

        let (a, b, c) = (Uuid::from_u128(0xa), Uuid::from_u128(0xb), Uuid::from_u128(0xc));
        let text = |id: Uuid| json!(id.hyphenated().to_string());
        let registry = CodecRegistry::with_builtins();
        let writer = Writer::new(&registry);

        let map: ReferenceMap = [(a, b)].into_iter().collect();
        let link = |target| Link {
            target: ObjectRef::new(target),
            raw: target,
            tagged: UuidRef::plain(target),
        };

        let sever = SerializationContext::rereferencing(map.clone(), false);
        let keep = SerializationContext::rereferencing(map, true);

        let document = writer.serialize(&link(a), &sever);
        assert_eq!(document["target"], text(b));
        // Plain identifiers are data and never remapped.
        assert_eq!(document["raw"], text(a));
        assert_eq!(document["tagged"], text(a));

        assert_eq!(writer.serialize(&link(c), &sever)["target"], text(Uuid::nil()));
        assert_eq!(writer.serialize(&link(c), &keep)["target"], text(c));

        let plain = writer.serialize(&link(a), &SerializationContext::default());
        assert_eq!(plain["target"], text(a));
    }

    // An enum whose current value has no declared variant.
    #[derive(Clone, Copy)]
    struct Flags(u64);

    impl Typed for Flags {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::Enum(EnumInfo::new::<Self>(
                    &[VariantInfo::new("None", 0)],
                    |v: u64| -> Option<Box<dyn Reflect>> { Some(Box::new(Flags(v))) },
                ))
            })
        }
    }

    impl Reflect for Flags {
        fn reflect_type_info(&self) -> &'static TypeInfo {
            Self::type_info()
        }

        fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        fn reflect_kind(&self) -> ReflectKind {
            ReflectKind::Enum
        }

        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Enum(self)
        }

        fn reflect_mut(&mut self) -> ReflectMut<'_> {
            ReflectMut::Enum(self)
        }
    }

    impl Enum for Flags {
        fn discriminant(&self) -> Option<u64> {
            (self.0 != u64::MAX).then_some(self.0)
        }
    }

    #[test]
    fn enum_falls_back_to_discriminant_then_null() {
        assert_eq!(write(&vec![Flags(0), Flags(6), Flags(u64::MAX)]), json!(["None", 6, null]));
    }
}
