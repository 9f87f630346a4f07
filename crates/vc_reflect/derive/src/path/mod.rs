//! This independent module is used to provide the required paths.
//! So as to minimize changes when the `vc_reflect` structure is modified.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vc_reflect` crate.
///
/// `::vc_reflect` for direct dependents, `::vc_persist::reflect` for crates
/// that only depend on the facade. See [`vc_macro_utils::Manifest`].
pub(crate) fn vc_reflect() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_reflect"))
}

// -----------------------------------------------------------------------------
// Paths

#[inline(always)]
pub(crate) fn reflect_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote!(#vc_reflect_path::Reflect)
}

#[inline(always)]
pub(crate) fn info_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote!(#vc_reflect_path::info)
}

#[inline(always)]
pub(crate) fn ops_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote!(#vc_reflect_path::ops)
}

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote!(#vc_reflect_path::impls::NonGenericTypeInfoCell)
}

#[inline(always)]
pub(crate) fn box_() -> TokenStream {
    quote!(::std::boxed::Box)
}

#[inline(always)]
pub(crate) fn option_() -> TokenStream {
    quote!(::core::option::Option)
}

#[inline(always)]
pub(crate) fn result_() -> TokenStream {
    quote!(::core::result::Result)
}
