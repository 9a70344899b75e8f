use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataStruct, Fields, Index};

pub fn derive_serde_struct(struct_: &DataStruct, serde_crate_name: &TokenStream) -> TokenStream {
    let (ser_body, de_body) = match &struct_.fields {
        Fields::Named(fields) => {
            let names: Vec<_> = fields
                .named
                .iter()
                .map(|field| field.ident.as_ref().expect("expected field to have a name."))
                .collect();
            (
                quote! {
                    #( #serde_crate_name::Serde::ser(&self.#names, writer); )*
                },
                quote! {
                    Self { #( #names: #serde_crate_name::Serde::de(reader)?, )* }
                },
            )
        }
        Fields::Unnamed(fields) => {
            let indices: Vec<Index> = (0..fields.unnamed.len()).map(Index::from).collect();
            let reads = indices
                .iter()
                .map(|_| quote! { #serde_crate_name::Serde::de(reader)? });
            (
                quote! {
                    #( #serde_crate_name::Serde::ser(&self.#indices, writer); )*
                },
                quote! {
                    Self( #( #reads, )* )
                },
            )
        }
        Fields::Unit => (quote! {}, quote! { Self }),
    };

    quote! {
        fn ser(&self, writer: &mut dyn #serde_crate_name::BitWrite) {
            let _ = &writer;
            #ser_body
        }

        fn de(reader: &mut #serde_crate_name::BitReader) -> std::result::Result<Self, #serde_crate_name::SerdeErr> {
            let _ = &reader;
            std::result::Result::Ok(#de_body)
        }
    }
}
