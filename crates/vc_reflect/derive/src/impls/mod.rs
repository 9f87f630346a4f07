//! Code generation for `#[derive(Reflect)]`.

// -----------------------------------------------------------------------------
// Modules

mod enum_kind;
mod struct_kind;
mod trait_reflect;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectDerive;

pub(crate) use trait_reflect::impl_trait_reflect;

/// Implement full reflect for the derived type.
pub(crate) fn impl_reflect(derive: &ReflectDerive) -> TokenStream {
    let vc_reflect_path = crate::path::vc_reflect();

    let tokens = match derive {
        ReflectDerive::Struct(info) => struct_kind::impl_struct(info, &vc_reflect_path),
        ReflectDerive::Enum(info) => enum_kind::impl_enum(info, &vc_reflect_path),
    };

    quote! {
        const _: () = {
            #tokens
        };
    }
}
