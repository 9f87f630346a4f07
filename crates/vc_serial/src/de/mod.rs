//! Applying documents onto live values.
//!
//! [`Reader`] works with a given [`CodecRegistry`](crate::CodecRegistry);
//! the free functions use the process-wide registry and panic if it is not
//! initialized.

// -----------------------------------------------------------------------------
// Modules

mod reader;

// -----------------------------------------------------------------------------
// Exports

pub use reader::Reader;

use crate::document::Document;
use crate::instance::InstanceMut;
use crate::registry::with_registry;

/// Applies `document` onto `instance`.
///
/// See [`Reader::deserialize`].
pub fn deserialize<'a>(instance: impl Into<InstanceMut<'a>>, document: &Document) {
    let instance = instance.into();
    with_registry(|registry| Reader::new(registry).deserialize(instance, document));
}

/// Rebuilds a sequential container from a document array.
///
/// See [`Reader::deserialize_sequential_container`].
pub fn deserialize_sequential_container<'a>(
    instance: impl Into<InstanceMut<'a>>,
    document: &Document,
) {
    let instance = instance.into();
    with_registry(|registry| {
        Reader::new(registry).deserialize_sequential_container(instance, document);
    });
}
