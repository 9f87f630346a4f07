//! Runtime reflection for the persistence layer.
//!
//! This crate describes types at runtime so that generic code can walk an
//! object graph without knowing the concrete types at compile time:
//!
//! - [`info`]: static type descriptions ([`TypeInfo`](info::TypeInfo)) and the [`Typed`](info::Typed) accessor.
//! - [`Reflect`]: dynamic access to a live value, dispatching into the [`ops`] capability traits.
//! - [`ops`]: the capability traits ([`Struct`](ops::Struct), [`List`](ops::List), [`Map`](ops::Map),
//!   [`Set`](ops::Set), [`Enum`](ops::Enum), [`Wrapper`](ops::Wrapper)).
//! - [`impls`]: implementations for primitives, std containers and `Box<T>`.
//! - [`derive`]: `#[derive(Reflect)]` for user structs and field-less enums.

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::vc_reflect::..` paths, which must also resolve
// inside this crate (tests and internal types).
extern crate self as vc_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use error::ReflectError;
pub use reflection::Reflect;
pub use vc_reflect_derive as derive;
