use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use foldhash::fast::FixedState;
use hashbrown::HashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;
use vc_reflect::Reflect;

use crate::context::SerializationContext;
use crate::document::Document;

/// A type-erased encoder, called with a value of the registered type.
pub type EncodeFn = dyn Fn(&dyn Reflect, &SerializationContext) -> Document + Send + Sync;

/// A type-erased decoder, returning a value of the registered type.
pub type DecodeFn = dyn Fn(&Document) -> Option<Box<dyn Reflect>> + Send + Sync;

struct CodecEntry {
    type_path: &'static str,
    encode: Option<Box<EncodeFn>>,
    decode: Option<Box<DecodeFn>>,
}

// -----------------------------------------------------------------------------
// CodecRegistry

/// A table of custom encode and decode functions, keyed by type.
///
/// A codec always wins over the generic rules of the
/// [`Writer`](crate::Writer) and the [`Reader`](crate::Reader), atomics
/// included.
///
/// Registration is monotonic: the encode and decode slots of a type are
/// filled independently, and a filled slot is never replaced.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vc_serial::{CodecRegistry, Document};
///
/// let mut registry = CodecRegistry::new();
///
/// let added = registry.register::<u8>(
///     |v, _| json!(format!("0x{v:02x}")),
///     |doc| u8::from_str_radix(doc.as_str()?.strip_prefix("0x")?, 16).ok(),
/// );
/// assert!(added);
///
/// // The first registration wins.
/// assert!(!registry.register::<u8>(|_, _| Document::Null, |_| None));
/// assert!(registry.contains::<u8>());
/// ```
#[derive(Default)]
pub struct CodecRegistry {
    entries: HashMap<TypeId, CodecEntry, FixedState>,
}

impl CodecRegistry {
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(FixedState::default()),
        }
    }

    /// Creates a registry holding the built-in [`Uuid`] codec, which encodes
    /// and decodes the hyphenated string.
    ///
    /// [`UuidRef`](crate::UuidRef) has no codec: the writer rereferences it and
    /// the reader decodes its identifier in place, keeping its kind.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register::<Uuid>(
            |uuid, _| Document::String(uuid.hyphenated().to_string()),
            |document| Uuid::parse_str(document.as_str()?).ok(),
        );
        registry
    }

    /// Registers both an encoder and a decoder for `T`.
    ///
    /// Returns `true` if at least one of them was newly installed.
    pub fn register<T: Reflect>(
        &mut self,
        encode: impl Fn(&T, &SerializationContext) -> Document + Send + Sync + 'static,
        decode: impl Fn(&Document) -> Option<T> + Send + Sync + 'static,
    ) -> bool {
        let encoded = self.register_encoder::<T>(encode);
        let decoded = self.register_decoder::<T>(decode);
        encoded || decoded
    }

    /// Registers an encoder for `T`, unless it already has one.
    pub fn register_encoder<T: Reflect>(
        &mut self,
        encode: impl Fn(&T, &SerializationContext) -> Document + Send + Sync + 'static,
    ) -> bool {
        let entry = self.entry::<T>();
        if entry.encode.is_some() {
            log::debug!("an encoder for `{}` is already registered", entry.type_path);
            return false;
        }

        entry.encode = Some(Box::new(
            move |value: &dyn Reflect, context: &SerializationContext| -> Document {
                match value.downcast_ref::<T>() {
                    Some(value) => encode(value, context),
                    None => Document::Null,
                }
            },
        ));
        true
    }

    /// Registers a decoder for `T`, unless it already has one.
    pub fn register_decoder<T: Reflect>(
        &mut self,
        decode: impl Fn(&Document) -> Option<T> + Send + Sync + 'static,
    ) -> bool {
        let entry = self.entry::<T>();
        if entry.decode.is_some() {
            log::debug!("a decoder for `{}` is already registered", entry.type_path);
            return false;
        }

        entry.decode = Some(Box::new(
            move |document: &Document| -> Option<Box<dyn Reflect>> {
                decode(document).map(|value| Box::new(value) as Box<dyn Reflect>)
            },
        ));
        true
    }

    /// Registers `T`'s own `serde` implementations as its codec.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_serial::{CodecRegistry, SerializationContext};
    ///
    /// let mut registry = CodecRegistry::new();
    /// registry.register_serde::<u32>();
    ///
    /// let encode = registry.encoder(core::any::TypeId::of::<u32>()).unwrap();
    /// assert_eq!(encode(&7_u32, &SerializationContext::default()), 7);
    /// ```
    pub fn register_serde<T: Reflect + Serialize + DeserializeOwned>(&mut self) -> bool {
        self.register::<T>(
            |value, _| match serde_json::to_value(value) {
                Ok(document) => document,
                Err(err) => {
                    log::error!("cannot serialize `{}`: {err}", core::any::type_name::<T>());
                    Document::Null
                }
            },
            |document| T::deserialize(document).ok(),
        )
    }

    /// Returns the encoder and the decoder registered for a type.
    #[inline]
    pub fn lookup(&self, type_id: TypeId) -> (Option<&EncodeFn>, Option<&DecodeFn>) {
        match self.entries.get(&type_id) {
            Some(entry) => (entry.encode.as_deref(), entry.decode.as_deref()),
            None => (None, None),
        }
    }

    /// Returns the encoder registered for a type.
    #[inline]
    pub fn encoder(&self, type_id: TypeId) -> Option<&EncodeFn> {
        self.lookup(type_id).0
    }

    /// Returns the decoder registered for a type.
    #[inline]
    pub fn decoder(&self, type_id: TypeId) -> Option<&DecodeFn> {
        self.lookup(type_id).1
    }

    /// Returns `true` if `T` has an encoder or a decoder.
    #[inline]
    pub fn contains<T: Reflect>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Returns the number of types with a codec.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry<T: Reflect>(&mut self) -> &mut CodecEntry {
        self.entries
            .entry(TypeId::of::<T>())
            .or_insert_with(|| CodecEntry {
                type_path: core::any::type_name::<T>(),
                encode: None,
                decode: None,
            })
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.entries.values().map(|entry| entry.type_path))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use uuid::Uuid;
    use vc_reflect::derive::Reflect;

    use super::CodecRegistry;
    use crate::context::SerializationContext;
    use crate::de::Reader;
    use crate::document::Document;
    use crate::ser::Writer;
    use crate::uuid::UuidRef;

    #[test]
    fn slots_are_filled_independently() {
        let mut registry = CodecRegistry::new();
        assert!(registry.register_decoder::<i32>(|doc| doc.as_i64().map(|v| v as i32 * 2)));
        assert!(!registry.register_decoder::<i32>(|_| Some(0)));

        // The encode slot is still free.
        assert!(registry.register::<i32>(|_, _| json!("x"), |_| Some(1)));
        assert!(!registry.register::<i32>(|_, _| json!("y"), |_| Some(2)));

        let (encode, decode) = registry.lookup(TypeId::of::<i32>());
        assert_eq!(encode.unwrap()(&5_i32, &SerializationContext::default()), json!("x"));
        let decoded = decode.unwrap()(&json!(4)).unwrap();
        assert_eq!(decoded.take::<i32>().unwrap(), 8);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn builtin_uuid_codecs() {
        let registry = CodecRegistry::with_builtins();
        let id = Uuid::from_u128(0xabcd);
        let text = "00000000-0000-0000-0000-00000000abcd";

        let encode = registry.encoder(TypeId::of::<Uuid>()).unwrap();
        assert_eq!(encode(&id, &SerializationContext::default()), json!(text));

        let decode = registry.decoder(TypeId::of::<Uuid>()).unwrap();
        assert_eq!(decode(&json!(text)).unwrap().take::<Uuid>().unwrap(), id);
        assert!(decode(&json!(12)).is_none());

        let (encode, decode) = registry.lookup(TypeId::of::<UuidRef>());
        assert!(encode.is_none() && decode.is_none());
    }

    #[test]
    fn serde_bridge() {
        #[derive(Reflect, Serialize, Deserialize, Debug, Default, PartialEq)]
        #[reflect(default)]
        #[serde(rename_all = "UPPERCASE")]
        struct Tint {
            r: u8,
            g: u8,
            #[serde(default)]
            b: u8,
        }

        let mut registry = CodecRegistry::new();
        assert!(registry.register_serde::<Tint>());
        assert!(!registry.register_serde::<Tint>());

        // The serde representation wins over the reflected fields.
        let tint = Tint { r: 1, g: 2, b: 3 };
        let document = Writer::new(&registry).serialize_default(&tint);
        assert_eq!(document, json!({ "R": 1, "G": 2, "B": 3 }));

        let mut loaded = Tint::default();
        let reader = Reader::new(&registry);
        reader.deserialize(&mut loaded, &json!({ "R": 4, "G": 5 }));
        assert_eq!(loaded, Tint { r: 4, g: 5, b: 0 });

        // A document serde rejects leaves the value untouched.
        reader.deserialize(&mut loaded, &json!({ "r": 9, "g": 9 }));
        reader.deserialize(&mut loaded, &Document::Null);
        assert_eq!(loaded, Tint { r: 4, g: 5, b: 0 });
    }
}
