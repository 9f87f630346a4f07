// -----------------------------------------------------------------------------
// Document

/// The tree produced by the [`Writer`](crate::Writer) and consumed by the
/// [`Reader`](crate::Reader).
///
/// Objects keep their keys in insertion order, which is the declaration
/// order of the reflected fields. Numbers keep their integer, unsigned or
/// float form. [`Document::Null`] is the empty document.
pub type Document = serde_json::Value;

/// The ordered key-value storage of [`Document::Object`].
pub type DocumentMap = serde_json::Map<alloc::string::String, Document>;
