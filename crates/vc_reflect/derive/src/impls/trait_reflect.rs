use proc_macro2::{Ident, TokenStream};
use quote::quote;

/// Generate the `Reflect` implementation shared by all derived kinds.
///
/// `kind` is the variant name used in `ReflectKind`, `ReflectRef` and `ReflectMut`.
pub(crate) fn impl_trait_reflect(
    vc_reflect_path: &syn::Path,
    real_ident: &Ident,
    kind: TokenStream,
) -> TokenStream {
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let info_ = crate::path::info_(vc_reflect_path);
    let ops_ = crate::path::ops_(vc_reflect_path);
    let box_ = crate::path::box_();
    let result_ = crate::path::result_();

    quote! {
        impl #reflect_ for #real_ident {
            #[inline]
            fn reflect_type_info(&self) -> &'static #info_::TypeInfo {
                <Self as #info_::Typed>::type_info()
            }

            fn set(&mut self, value: #box_<dyn #reflect_>) -> #result_<(), #box_<dyn #reflect_>> {
                *self = value.take::<Self>()?;
                #result_::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #info_::ReflectKind {
                #info_::ReflectKind::#kind
            }

            #[inline]
            fn reflect_ref(&self) -> #ops_::ReflectRef<'_> {
                #ops_::ReflectRef::#kind(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #ops_::ReflectMut<'_> {
                #ops_::ReflectMut::#kind(self)
            }
        }
    }
}
