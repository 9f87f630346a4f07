use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use super::impl_trait_reflect;
use crate::derive_data::ReflectEnum;

/// Implement full reflect for field-less enum type.
pub(crate) fn impl_enum(info: &ReflectEnum, vc_reflect_path: &syn::Path) -> TokenStream {
    let typed_trait_tokens = impl_trait_typed(info, vc_reflect_path);
    let reflect_trait_tokens = impl_trait_reflect(vc_reflect_path, info.ident, quote!(Enum));
    let enum_trait_tokens = impl_trait_enum(info, vc_reflect_path);

    quote! {
        #typed_trait_tokens

        #reflect_trait_tokens

        #enum_trait_tokens
    }
}

/// Generate `Typed` trait implementation tokens.
fn impl_trait_typed(info: &ReflectEnum, vc_reflect_path: &syn::Path) -> TokenStream {
    let info_ = crate::path::info_(vc_reflect_path);
    let cell_ = crate::path::non_generic_type_info_cell_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let box_ = crate::path::box_();
    let option_ = crate::path::option_();
    let real_ident = info.ident;

    let variants = &info.variants;
    let names = variants.iter().map(|v| v.to_string());

    let with_default = if info.attrs.has_default() {
        quote_spanned!(info.attrs.default_span() => .with_default::<Self>())
    } else {
        TokenStream::new()
    };

    quote! {
        impl #info_::Typed for #real_ident {
            fn type_info() -> &'static #info_::TypeInfo {
                static CELL: #cell_ = #cell_::new();
                CELL.get_or_init(|| {
                    #info_::TypeInfo::Enum(
                        #info_::EnumInfo::new::<Self>(
                            &[
                                #(#info_::VariantInfo::new(#names, Self::#variants as u64),)*
                            ],
                            |discriminant: u64| -> #option_<#box_<dyn #reflect_>> {
                                #(
                                    if discriminant == Self::#variants as u64 {
                                        return #option_::Some(#box_::new(Self::#variants));
                                    }
                                )*
                                #option_::None
                            },
                        )
                        #with_default
                    )
                })
            }
        }
    }
}

/// Generate `Enum` trait implementation tokens.
fn impl_trait_enum(info: &ReflectEnum, vc_reflect_path: &syn::Path) -> TokenStream {
    let ops_ = crate::path::ops_(vc_reflect_path);
    let real_ident = info.ident;
    let variants = &info.variants;

    let option_ = crate::path::option_();

    let body = if variants.is_empty() {
        quote!(match *self {})
    } else {
        quote! {
            match self {
                #(Self::#variants => #option_::Some(Self::#variants as u64),)*
            }
        }
    };

    quote! {
        impl #ops_::Enum for #real_ident {
            #[inline]
            fn discriminant(&self) -> #option_<u64> {
                #body
            }
        }
    }
}
