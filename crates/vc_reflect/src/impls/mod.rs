//! Provide reflection for foreign types, and utilities for implementing the
//! reflection traits.
//!
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//!
//! ## Implemented Menu
//!
//! - atomic:
//!     - `bool`, `char`
//!     - `i8`-`i64`, `u8`-`u64`, `isize`, `usize`, `f32`, `f64`
//!     - `String`
//! - alloc:
//!     - `Vec<T>`, `VecDeque<T>` (list)
//!     - `BTreeMap<K, V>` (map), `BTreeSet<T>` (set)
//!     - `Box<T>` (wrapper)
//! - std:
//!     - `HashMap<K, V, S>` (map), `HashSet<T, S>` (set)
//! - uuid: ("uuid" feature)
//!     - `Uuid` (opaque, with textual form)
//!
//! [`Typed`]: crate::info::Typed

// -----------------------------------------------------------------------------
// Modules

mod cell;

mod alloc;
mod native;
mod std;

#[cfg(feature = "uuid")]
mod uuid;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
