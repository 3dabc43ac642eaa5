//! Procedural macros for `flagger`.
//!
//! `#[derive(Flags)]` lists a struct's named fields for the runtime crate's
//! binder. Each field contributes its declared name, its raw
//! `#[flag("name,default,usage")]` annotation, whether it is visible outside
//! its module, and a slot chosen by the field's type. The annotation is kept
//! verbatim; splitting and decoding happen at bind time.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `flagger::Flags`.
///
/// Accepts structs with named fields, or unit structs, without generic
/// parameters. Recognised attributes:
///
/// - `#[flag("name,default,usage")]` or `#[flag = "name,default,usage"]` on
///   a field; `#[flag("-")]` excludes the field.
/// - `#[flagger(crate = "path")]` on the struct, for when the runtime crate
///   is renamed in `Cargo.toml`.
#[proc_macro_derive(Flags, attributes(flag, flagger))]
pub fn derive_flags(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::derive_flags(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
