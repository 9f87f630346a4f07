use proc_macro2::Span;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes on the type: `#[reflect(default)]`.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// The type implements `Default`, register it as constructor.
    pub default: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident(REFLECT_ATTRIBUTE_NAME)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("default") {
                    this.default = Some(meta.input.span());
                    Ok(())
                } else {
                    Err(meta.error("unsupported type attribute, expected `default`"))
                }
            })?;
        }
        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes on a struct field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub no_serialize: bool,
    pub read_only: bool,
    pub ignore: bool,
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident(REFLECT_ATTRIBUTE_NAME)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("no_serialize") {
                    this.no_serialize = true;
                } else if meta.path.is_ident("read_only") {
                    this.read_only = true;
                } else if meta.path.is_ident("ignore") {
                    this.ignore = true;
                } else if meta.path.is_ident("rename") {
                    let name: LitStr = meta.value()?.parse()?;
                    if name.value().is_empty() {
                        return Err(syn::Error::new(name.span(), "field name cannot be empty"));
                    }
                    this.rename = Some(name);
                } else {
                    return Err(meta.error(
                        "unsupported field attribute, expected one of `no_serialize`, `read_only`, `rename`, `ignore`",
                    ));
                }
                Ok(())
            })?;
        }
        Ok(this)
    }
}
