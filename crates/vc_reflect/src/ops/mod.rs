//! Provide interfaces for data operation.
//!
//! ## Menu
//!
//! The following are the subtraits of [`Reflect`], each providing data
//! access for one kind of type:
//!
//! - [`Struct`]: For struct with named fields (e.g. `A{ .. }`).
//! - [`List`]: For list-like (e.g. `Vec<i32>`).
//! - [`Map`]: For map-like (e.g. `HashMap<i32, f32>`).
//! - [`Set`]: For set-like (e.g. `HashSet<i32>`).
//! - [`Enum`]: For field-less enums.
//! - [`Wrapper`]: For single value holders (e.g. `Box<T>`).
//!
//! Atomic values are read through [`AtomicRef`], and written through
//! [`Reflect::set`] with a value of the exact type.
//!
//! [`Reflect`]: crate::Reflect
//! [`Reflect::set`]: crate::Reflect::set

// -----------------------------------------------------------------------------
// Modules

mod enum_ops;
mod kind;
mod list_ops;
mod map_ops;
mod set_ops;
mod struct_ops;
mod wrapper_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{AtomicRef, ReflectMut, ReflectRef};

pub use enum_ops::Enum;
pub use list_ops::{List, ListItemIter};
pub use map_ops::Map;
pub use set_ops::Set;
pub use struct_ops::{Struct, StructFieldIter};
pub use wrapper_ops::{Wrapped, Wrapper};
