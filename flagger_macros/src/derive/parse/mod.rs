//! Input parsing for the `Flags` derive macro.
//!
//! Validates the shape of the struct and collects, per field, everything the
//! generated `flag_fields` needs.

use syn::ext::IdentExt as _;
use syn::{
    Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Lit, LitStr, Meta, Visibility,
};

/// Struct-level options from `#[flagger(...)]`.
#[derive(Default)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    pub crate_path: Option<syn::Path>,
}

/// One named field of the deriving struct.
pub(crate) struct FlagField {
    pub ident: syn::Ident,
    /// Declared name without any `r#` prefix.
    pub name: String,
    pub tag: Option<LitStr>,
    pub public: bool,
}

pub(crate) struct FlagsInput {
    pub ident: syn::Ident,
    pub attrs: StructAttrs,
    pub fields: Vec<FlagField>,
}

/// Checks the derive target and gathers its fields in declaration order.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<FlagsInput> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "invalid target: Flags cannot be derived for generic structs",
        ));
    }
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "invalid target: Flags requires named fields",
                ));
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "invalid target: Flags can only be derived for structs",
            ));
        }
    };
    let attrs = parse_struct_attrs(&input.attrs)?;
    let fields = named
        .into_iter()
        .map(parse_field)
        .collect::<syn::Result<Vec<_>>>()?;
    Ok(FlagsInput {
        ident: input.ident.clone(),
        attrs,
        fields,
    })
}

fn parse_field(field: &syn::Field) -> syn::Result<FlagField> {
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new_spanned(field, "Flags requires named fields"))?;
    Ok(FlagField {
        name: ident.unraw().to_string(),
        ident,
        tag: parse_flag_tag(&field.attrs)?,
        public: is_public(&field.vis),
    })
}

/// `pub(self)` and `pub(in self)` are as private as no keyword at all.
fn is_public(vis: &Visibility) -> bool {
    match vis {
        Visibility::Inherited => false,
        Visibility::Restricted(restricted) => !restricted.path.is_ident("self"),
        Visibility::Public(_) => true,
    }
}

pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("flagger")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let s = meta.value()?.parse::<LitStr>()?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            } else {
                Err(meta.error("unknown flagger attribute"))
            }
        })?;
    }
    Ok(out)
}

/// Reads the field's annotation, accepting the list and name-value forms.
pub(crate) fn parse_flag_tag(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut tag = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("flag")) {
        let lit = match &attr.meta {
            Meta::List(list) => list.parse_args::<LitStr>()?,
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => s.clone(),
                other => {
                    return Err(syn::Error::new_spanned(other, "flag must be a string"));
                }
            },
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "expected #[flag(\"name,default,usage\")]",
                ));
            }
        };
        if tag.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate flag attribute"));
        }
        tag = Some(lit);
    }
    Ok(tag)
}
