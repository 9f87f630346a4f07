//! Encoding live values into documents.
//!
//! [`Writer`] works with a given [`CodecRegistry`](crate::CodecRegistry);
//! the free functions use the process-wide registry and panic if it is not
//! initialized.

// -----------------------------------------------------------------------------
// Modules

mod writer;

// -----------------------------------------------------------------------------
// Exports

pub use writer::Writer;

use crate::context::SerializationContext;
use crate::document::Document;
use crate::instance::Instance;
use crate::registry::with_registry;

/// Encodes `instance` for plain persistence.
///
/// See [`Writer::serialize`].
pub fn serialize<'a>(instance: impl Into<Instance<'a>>) -> Document {
    serialize_with(instance, &SerializationContext::default())
}

/// Encodes `instance` under `context`.
///
/// See [`Writer::serialize`].
pub fn serialize_with<'a>(instance: impl Into<Instance<'a>>, context: &SerializationContext) -> Document {
    let instance = instance.into();
    with_registry(|registry| Writer::new(registry).serialize(instance, context))
}

/// Encodes a sequential container as a document array.
///
/// See [`Writer::serialize_sequential_container`].
pub fn serialize_sequential_container<'a>(
    instance: impl Into<Instance<'a>>,
    context: &SerializationContext,
) -> Document {
    let instance = instance.into();
    with_registry(|registry| Writer::new(registry).serialize_sequential_container(instance, context))
}
