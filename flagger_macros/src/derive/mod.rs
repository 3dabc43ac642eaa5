//! Implementation of `#[derive(Flags)]`.

mod crate_path;
mod generate;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Parses the input and emits the `Flags` impl.
pub(crate) fn derive_flags(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    Ok(generate::flags_impl(&parsed))
}
