use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Derives `deep_copy::DeepCopy`.
///
/// Structs with named fields are copied field-by-field, each field through its own `DeepCopy`
/// impl.
///
/// Enums must consist solely of single-field tuple variants (the shape `superstruct` generates);
/// the inner value of the active variant is deep-copied and re-wrapped in the same variant.
#[proc_macro_derive(DeepCopy)]
pub fn deep_copy_derive(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);

    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = &item.generics.split_for_impl();

    let body = match &item.data {
        syn::Data::Struct(struct_data) => {
            let mut quotes = vec![];

            for field in struct_data.fields.iter() {
                let Some(ident) = &field.ident else {
                    panic!("deep_copy_derive only supports named struct fields.");
                };

                quotes.push(quote! {
                    #ident: deep_copy::DeepCopy::deep_copy(&self.#ident)
                });
            }

            quote! {
                Self {
                    #(
                        #quotes
                    ),*
                }
            }
        }
        syn::Data::Enum(enum_data) => {
            let mut arms = vec![];

            for variant in enum_data.variants.iter() {
                let variant_name = &variant.ident;
                match &variant.fields {
                    syn::Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                        arms.push(quote! {
                            #name::#variant_name(inner) => {
                                #name::#variant_name(deep_copy::DeepCopy::deep_copy(inner))
                            }
                        });
                    }
                    _ => panic!(
                        "deep_copy_derive only supports enums with single-field tuple variants."
                    ),
                }
            }

            quote! {
                match self {
                    #(
                        #arms
                    )*
                }
            }
        }
        syn::Data::Union(_) => panic!("deep_copy_derive does not support unions."),
    };

    let output = quote! {
        impl #impl_generics deep_copy::DeepCopy for #name #ty_generics #where_clause {
            fn deep_copy(&self) -> Self {
                #body
            }
        }
    };
    output.into()
}
