//! Code generation for the `Flags` impl.

use proc_macro2::TokenStream;
use quote::quote;

use super::crate_path;
use super::parse::{FlagField, FlagsInput};

/// Emits `impl Flags for T` listing every field in declaration order.
///
/// Each field's slot comes from the runtime crate's probe traits, so the
/// choice between the extension path, a primitive kind and the unsupported
/// marker is made by the type checker where the struct is defined.
pub(crate) fn flags_impl(input: &FlagsInput) -> TokenStream {
    let krate = crate_path::resolve(input.attrs.crate_path.as_ref());
    let ident = &input.ident;
    let fields = input.fields.iter().map(|field| field_entry(&krate, field));
    let probes = if input.fields.is_empty() {
        TokenStream::new()
    } else {
        quote! {
            use #krate::__private::{
                ExtensionKind as _, PrimitiveKind as _, UnsupportedKind as _,
            };
        }
    };
    quote! {
        #[automatically_derived]
        impl #krate::Flags for #ident {
            fn flag_fields(
                &mut self,
            ) -> ::core::result::Result<
                ::std::vec::Vec<#krate::Field<'_>>,
                #krate::FlagError,
            > {
                #probes
                ::core::result::Result::Ok(::std::vec![#(#fields),*])
            }
        }
    }
}

fn field_entry(krate: &TokenStream, field: &FlagField) -> TokenStream {
    let member = &field.ident;
    let name = &field.name;
    let tag = field.tag.as_ref().map_or_else(
        || quote! { ::core::option::Option::None },
        |lit| quote! { ::core::option::Option::Some(#lit) },
    );
    let visibility = if field.public {
        quote! { #krate::Visibility::Public }
    } else {
        quote! { #krate::Visibility::Private }
    };
    quote! {
        #krate::Field::new(
            #name,
            #tag,
            #visibility,
            (&&&#krate::__private::Probe::of(&self.#member))
                .flag_kind()
                .slot(&mut self.#member),
        )
    }
}
