//! `#[format_provider]` expansion.
//!
//! Turns a free formatting function into a `FormatProvider` impl keyed to
//! the type of its first parameter. The function itself is emitted unchanged
//! and stays callable.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

/// Expand `#[format_provider]` on a free function.
pub fn expand_format_provider(attr: TokenStream2, func: syn::ItemFn) -> TokenStream2 {
    if func.sig.inputs.len() != 3 {
        return syn::Error::new_spanned(
            &func.sig,
            "format_provider functions take (&T, &mut dyn core::fmt::Write, &str)",
        )
        .to_compile_error();
    }

    let target = match target_type(&attr, &func) {
        Ok(ty) => ty,
        Err(err) => return err.to_compile_error(),
    };

    let name = &func.sig.ident;

    quote! {
        #func

        impl ::tola_fmt::FormatProvider for #target {
            #[inline]
            fn format(
                &self,
                out: &mut dyn ::core::fmt::Write,
                options: &str,
            ) -> ::core::fmt::Result {
                #name(self, out, options)
            }
        }
    }
}

/// The explicit `#[format_provider(T)]` target, or the `&T` of the first
/// parameter.
fn target_type(attr: &TokenStream2, func: &syn::ItemFn) -> syn::Result<syn::Type> {
    if !attr.is_empty() {
        return syn::parse2(attr.clone());
    }

    let first = func.sig.inputs.first().ok_or_else(|| {
        syn::Error::new_spanned(&func.sig, "format_provider functions take at least a `&T` parameter")
    })?;

    let syn::FnArg::Typed(pattern) = first else {
        return Err(syn::Error::new_spanned(
            first,
            "format_provider expects a free function, not a method",
        ));
    };

    match pattern.ty.as_ref() {
        syn::Type::Reference(reference) => Ok(reference.elem.as_ref().clone()),
        other => Err(syn::Error::new_spanned(
            other,
            "the first parameter must be `&T`, the type the provider is keyed to",
        )),
    }
}
