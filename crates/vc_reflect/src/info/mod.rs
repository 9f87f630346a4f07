//! Provide runtime type descriptions.
//!
//! ## Menu
//!
//! - [`Type`]: A `TypeId`, the type path and an optional default constructor.
//! - [`TypeInfo`]: A closed enum describing what a type *is*, one of:
//!     - [`AtomicInfo`]: primitives and `String`, see [`AtomicKind`].
//!     - [`EnumInfo`]: field-less enums, including variant names and discriminants.
//!     - [`StructInfo`]: structs with named fields ([`NamedField`]).
//!     - [`ListInfo`]: sequential containers (e.g. `Vec<T>`).
//!     - [`MapInfo`]: key-value associative containers (e.g. `BTreeMap<K, V>`).
//!     - [`SetInfo`]: key-only associative containers (e.g. `HashSet<T>`).
//!     - [`WrapperInfo`]: smart-pointer-like values that need one unwrap step (e.g. `Box<T>`).
//!     - [`OpaqueInfo`]: everything else (e.g. `Uuid`).
//! - [`FieldFlags`]: metadata of a struct field (`NO_SERIALIZE`, `READ_ONLY`).
//! - [`Typed`]: A trait for obtaining `TypeInfo` without an instance.

// -----------------------------------------------------------------------------
// Modules

mod atomic_info;
mod enum_info;
mod field_info;
mod list_info;
mod map_info;
mod opaque_info;
mod set_info;
mod struct_info;
mod type_info;
mod typed;
mod wrapper_info;

// -----------------------------------------------------------------------------
// Exports

pub use atomic_info::{AtomicInfo, AtomicKind};
pub use enum_info::{EnumInfo, VariantInfo};
pub use field_info::{FieldFlags, NamedField};
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::OpaqueInfo;
pub use set_info::SetInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, Type, TypeInfo};
pub use typed::Typed;
pub use wrapper_info::WrapperInfo;
