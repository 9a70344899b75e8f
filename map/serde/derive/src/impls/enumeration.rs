use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{DataEnum, Fields};

fn bits_needed_for(max_value: usize) -> u8 {
    let mut bits = 1;
    while 2_usize.pow(bits) <= max_value {
        bits += 1;
    }
    if bits >= 128 {
        panic!("cannot encode a variant index in more than 127 bits!");
    }
    bits as u8
}

pub fn derive_serde_enum(enum_: &DataEnum, serde_crate_name: &TokenStream) -> TokenStream {
    let bits_needed = bits_needed_for(enum_.variants.len());

    let ser_method = get_ser_method(enum_, bits_needed, serde_crate_name);
    let de_method = get_de_method(enum_, bits_needed, serde_crate_name);

    quote! {
        #ser_method
        #de_method
    }
}

fn get_ser_method(enum_: &DataEnum, bits_needed: u8, serde_crate_name: &TokenStream) -> TokenStream {
    let arms = enum_.variants.iter().enumerate().map(|(index, variant)| {
        let variant_index = index as u64;
        let variant_name = &variant.ident;
        let write_index = quote! {
            let index = #serde_crate_name::UnsignedInteger::<#bits_needed>::new(#variant_index);
            #serde_crate_name::Serde::ser(&index, writer);
        };
        match &variant.fields {
            Fields::Unit => quote! {
                Self::#variant_name => { #write_index }
            },
            Fields::Named(fields) => {
                let names: Vec<&Ident> = fields
                    .named
                    .iter()
                    .map(|field| field.ident.as_ref().expect("expected field to have a name."))
                    .collect();
                quote! {
                    Self::#variant_name { #( #names ),* } => {
                        #write_index
                        #( #serde_crate_name::Serde::ser(#names, writer); )*
                    }
                }
            }
            Fields::Unnamed(fields) => {
                let names: Vec<Ident> = (0..fields.unnamed.len())
                    .map(|i| format_ident!("f{}", i))
                    .collect();
                quote! {
                    Self::#variant_name( #( #names ),* ) => {
                        #write_index
                        #( #serde_crate_name::Serde::ser(#names, writer); )*
                    }
                }
            }
        }
    });

    quote! {
        fn ser(&self, writer: &mut dyn #serde_crate_name::BitWrite) {
            match self {
                #( #arms )*
            }
        }
    }
}

fn get_de_method(enum_: &DataEnum, bits_needed: u8, serde_crate_name: &TokenStream) -> TokenStream {
    let arms = enum_.variants.iter().enumerate().map(|(index, variant)| {
        let variant_index = index as i128;
        let variant_name = &variant.ident;
        match &variant.fields {
            Fields::Unit => quote! {
                #variant_index => Self::#variant_name,
            },
            Fields::Named(fields) => {
                let names = fields
                    .named
                    .iter()
                    .map(|field| field.ident.as_ref().expect("expected field to have a name."));
                quote! {
                    #variant_index => Self::#variant_name {
                        #( #names: #serde_crate_name::Serde::de(reader)?, )*
                    },
                }
            }
            Fields::Unnamed(fields) => {
                let reads = fields
                    .unnamed
                    .iter()
                    .map(|_| quote! { #serde_crate_name::Serde::de(reader)? });
                quote! {
                    #variant_index => Self::#variant_name( #( #reads, )* ),
                }
            }
        }
    });

    quote! {
        fn de(reader: &mut #serde_crate_name::BitReader) -> std::result::Result<Self, #serde_crate_name::SerdeErr> {
            let index: #serde_crate_name::UnsignedInteger<#bits_needed> =
                #serde_crate_name::Serde::de(reader)?;
            std::result::Result::Ok(match index.get() {
                #( #arms )*
                _ => {
                    return std::result::Result::Err(
                        #serde_crate_name::SerdeErr::InvalidValue("unknown enum variant index"),
                    )
                }
            })
        }
    }
}
