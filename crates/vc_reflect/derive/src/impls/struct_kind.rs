use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use super::impl_trait_reflect;
use crate::derive_data::{ReflectStruct, StructField};

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct, vc_reflect_path: &syn::Path) -> TokenStream {
    let typed_trait_tokens = impl_trait_typed(info, vc_reflect_path);
    let reflect_trait_tokens = impl_trait_reflect(vc_reflect_path, info.ident, quote!(Struct));
    let struct_trait_tokens = impl_trait_struct(info, vc_reflect_path);

    quote! {
        #typed_trait_tokens

        #reflect_trait_tokens

        #struct_trait_tokens
    }
}

/// Generate the `NamedField` expression of one field.
fn field_info_tokens(field: &StructField, vc_reflect_path: &syn::Path) -> TokenStream {
    let info_ = crate::path::info_(vc_reflect_path);
    let StructField { name, ty, attrs, .. } = field;

    let mut flags = vec![quote!(#info_::FieldFlags::empty())];
    if attrs.no_serialize {
        flags.push(quote!(.union(#info_::FieldFlags::NO_SERIALIZE)));
    }
    if attrs.read_only {
        flags.push(quote!(.union(#info_::FieldFlags::READ_ONLY)));
    }

    quote! {
        #info_::NamedField::new::<#ty>(#name).with_flags(#(#flags)*)
    }
}

/// Generate `Typed` trait implementation tokens.
fn impl_trait_typed(info: &ReflectStruct, vc_reflect_path: &syn::Path) -> TokenStream {
    let info_ = crate::path::info_(vc_reflect_path);
    let cell_ = crate::path::non_generic_type_info_cell_(vc_reflect_path);
    let real_ident = info.ident;

    let fields = info
        .fields
        .iter()
        .map(|field| field_info_tokens(field, vc_reflect_path));

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
                    #info_::TypeInfo::Struct(
                        #info_::StructInfo::new::<Self>(&[
                            #(#fields,)*
                        ])
                        #with_default
                    )
                })
            }
        }
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct, vc_reflect_path: &syn::Path) -> TokenStream {
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let ops_ = crate::path::ops_(vc_reflect_path);
    let option_ = crate::path::option_();
    let real_ident = info.ident;

    let field_names = info.fields.iter().map(|f| &f.name).collect::<Vec<_>>();
    let members = info.fields.iter().map(|f| f.member).collect::<Vec<_>>();
    let field_indices = (0..info.fields.len()).collect::<Vec<usize>>();
    let field_count = info.fields.len();

    quote! {
        impl #ops_::Struct for #real_ident {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(&self.#members),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(&mut self.#members),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(&self.#members),)*
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(&mut self.#members),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }
        }
    }
}
