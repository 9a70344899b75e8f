//! Derive macros for `indexed-map-serde`.
//!
//! `#[derive(Serde)]` is for downstream crates that depend on `indexed-map`
//! and reach the codec through `indexed_map::serde`. `#[derive(SerdeInternal)]`
//! is for code that depends on `indexed-map-serde` directly.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput};

mod impls;
use impls::*;

#[proc_macro_derive(Serde)]
pub fn derive_serde(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let serde_crate_name = quote! { ::indexed_map::serde };
    derive_serde_common(input, serde_crate_name)
}

#[proc_macro_derive(SerdeInternal)]
pub fn derive_serde_internal(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let serde_crate_name = quote! { ::indexed_map_serde };
    derive_serde_common(input, serde_crate_name)
}

fn derive_serde_common(
    input: proc_macro::TokenStream,
    serde_crate_name: TokenStream,
) -> proc_macro::TokenStream {
    let mut input = parse_macro_input!(input as DeriveInput);
    for param in input.generics.type_params_mut() {
        param
            .bounds
            .push(syn::parse_quote!(#serde_crate_name::Serde));
    }
    let input_name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let methods = match &input.data {
        Data::Struct(struct_) => derive_serde_struct(struct_, &serde_crate_name),
        Data::Enum(enum_) => derive_serde_enum(enum_, &serde_crate_name),
        Data::Union(_) => {
            return syn::Error::new_spanned(&input.ident, "Serde cannot be derived for unions")
                .to_compile_error()
                .into()
        }
    };

    let gen = quote! {
        impl #impl_generics #serde_crate_name::Serde for #input_name #type_generics #where_clause {
            #methods
        }
    };

    proc_macro::TokenStream::from(gen)
}
