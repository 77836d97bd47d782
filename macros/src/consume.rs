//! `#[derive(MustConsume)]` expansion.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

/// Expand the derive into an empty marker impl, generics carried over.
pub fn expand_derive_must_consume(input: DeriveInput) -> TokenStream2 {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::tola_fmt::MustConsume for #ident #ty_generics #where_clause {}
    }
}
