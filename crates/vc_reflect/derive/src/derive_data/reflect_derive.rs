use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Type};

use super::{FieldAttributes, TypeAttributes};

// -----------------------------------------------------------------------------
// ReflectDerive

/// The parsed input of `#[derive(Reflect)]`.
pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    Enum(ReflectEnum<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if !input.generics.params.is_empty() || input.generics.where_clause.is_some() {
            return Err(syn::Error::new(
                input.generics.span(),
                "`Reflect` cannot be derived for generic types",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let ident = &input.ident;

        match &input.data {
            Data::Struct(data) => {
                let fields = match &data.fields {
                    Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
                    Fields::Unit => Vec::new(),
                    Fields::Unnamed(unnamed) => {
                        return Err(syn::Error::new(
                            unnamed.span(),
                            "`Reflect` cannot be derived for tuple structs",
                        ));
                    }
                };

                let mut active = Vec::with_capacity(fields.len());
                for field in fields {
                    let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
                    if attrs.ignore {
                        continue;
                    }
                    let Some(member) = field.ident.as_ref() else {
                        continue;
                    };
                    let name = match &attrs.rename {
                        Some(rename) => rename.clone(),
                        None => LitStr::new(&member.unraw().to_string(), member.span()),
                    };
                    if active.iter().any(|f: &StructField| f.name.value() == name.value()) {
                        return Err(syn::Error::new(name.span(), "duplicate field name"));
                    }
                    active.push(StructField {
                        member,
                        name,
                        ty: &field.ty,
                        attrs,
                    });
                }

                Ok(Self::Struct(ReflectStruct {
                    ident,
                    attrs,
                    fields: active,
                }))
            }
            Data::Enum(data) => {
                let mut variants = Vec::with_capacity(data.variants.len());
                for variant in &data.variants {
                    if !matches!(variant.fields, Fields::Unit) {
                        return Err(syn::Error::new(
                            variant.fields.span(),
                            "`Reflect` can only be derived for enums without fields",
                        ));
                    }
                    variants.push(&variant.ident);
                }
                Ok(Self::Enum(ReflectEnum {
                    ident,
                    attrs,
                    variants,
                }))
            }
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span,
                "`Reflect` cannot be derived for unions",
            )),
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectStruct

pub(crate) struct ReflectStruct<'a> {
    pub ident: &'a Ident,
    pub attrs: TypeAttributes,
    /// Reflected fields, `ignore`d ones excluded, in declaration order.
    pub fields: Vec<StructField<'a>>,
}

pub(crate) struct StructField<'a> {
    pub member: &'a Ident,
    /// The reflected name, after `rename`.
    pub name: LitStr,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

// -----------------------------------------------------------------------------
// ReflectEnum

pub(crate) struct ReflectEnum<'a> {
    pub ident: &'a Ident,
    pub attrs: TypeAttributes,
    pub variants: Vec<&'a Ident>,
}

impl TypeAttributes {
    #[inline]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    #[inline]
    pub fn default_span(&self) -> Span {
        self.default.unwrap_or_else(Span::call_site)
    }
}
