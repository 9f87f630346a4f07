//! See following macros:
//!
//! - [`Reflect`]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `Typed`
/// - `Reflect`
/// - `Struct` (for `struct T { ... }` and `struct T;`)
/// - `Enum` (for field-less `enum T { ... }`)
///
/// Generic types, tuple structs, unions and enums whose variants carry data
/// are rejected with a compile error.
///
/// ## Type Attributes
///
/// - `default`: the type implements `Default`. This registers a constructor,
///   which deserializers need to create fresh values of the type (as list
///   items, map entries or boxed values).
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Foo { /* ... */ }
/// ```
///
/// ## Field Attributes
///
/// - `no_serialize`: the field never appears in a serialized document.
/// - `read_only`: the field is written by serialization but never assigned
///   by deserialization.
/// - `rename = "name"`: the name used for lookup and as document key.
/// - `ignore`: the field is not reflected at all.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Foo {
///     #[reflect(no_serialize)]
///     cache: Vec<u8>,
///     #[reflect(read_only, rename = "ID")]
///     id: u64,
///     #[reflect(ignore)]
///     handle: Handle,
/// }
/// ```
///
/// ## Enum
///
/// Only field-less enums are supported. Discriminants are read through `as u64`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// enum Filter {
///     Nearest,
///     Linear = 4,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectDerive::from_input(&ast) {
        Ok(derive) => impls::impl_reflect(&derive).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
