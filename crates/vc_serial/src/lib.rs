//! Reflection driven persistence of object graphs.
//!
//! The [`Writer`] walks a live value through [`vc_reflect`] and produces a
//! JSON shaped [`Document`]; the [`Reader`] applies a document back onto a
//! live value, leaving everything the document does not mention untouched.
//!
//! Both consult a [`CodecRegistry`] first, so a type can replace the generic
//! rules with its own encode and decode functions. Object references tagged
//! with [`UuidKind::ObjectReference`] can be remapped while writing, which is
//! how a graph is duplicated with its internal references pointing at the
//! copies (see [`duplicate`]).
//!
//! # Example
//!
//! ```
//! use vc_reflect::derive::Reflect;
//! use vc_serial::{CodecRegistry, Reader, SerializationContext, Writer};
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! #[reflect(default)]
//! struct Light {
//!     intensity: f32,
//!     tags: Vec<String>,
//! }
//!
//! let registry = CodecRegistry::with_builtins();
//! let light = Light { intensity: 0.5, tags: vec!["sun".into()] };
//!
//! let document = Writer::new(&registry).serialize(&light, &SerializationContext::default());
//! assert_eq!(document, serde_json::json!({ "intensity": 0.5, "tags": ["sun"] }));
//!
//! let mut copy = Light::default();
//! Reader::new(&registry).deserialize(&mut copy, &document);
//! assert_eq!(copy, light);
//! ```

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod context;
mod document;
mod duplicate;
mod error;
mod instance;
mod path_stack;
mod variant;

pub mod de;
pub mod registry;
pub mod ser;
pub mod uuid;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use context::SerializationContext;
pub use de::{Reader, deserialize, deserialize_sequential_container};
pub use document::{Document, DocumentMap};
pub use duplicate::{duplicate, duplicate_with};
pub use error::{EncodeError, LifecycleError};
pub use instance::{Instance, InstanceMut};
pub use registry::CodecRegistry;
pub use ser::{Writer, serialize, serialize_sequential_container, serialize_with};
pub use crate::uuid::{ObjectRef, ReferenceMap, UuidKind, UuidRef};
pub use variant::Variant;
