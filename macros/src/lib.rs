//! Procedural macros for tola-fmt format adapters
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[format_provider]` | free fn | Generate a `FormatProvider` impl from a formatting function |
//! | `#[derive(MustConsume)]` | struct/enum | Mark an error-like type for the consume gate |

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations
// =============================================================================

mod consume;
mod provider;

// =============================================================================
// Attribute Macros
// =============================================================================

/// Implement `FormatProvider` for a type by delegating to a free function.
///
/// The function must have the shape
/// `fn(&T, &mut dyn core::fmt::Write, &str) -> core::fmt::Result`. The keyed
/// type `T` is read from the first parameter, or given explicitly with
/// `#[format_provider(T)]`.
///
/// ```ignore
/// #[format_provider]
/// fn point_format(value: &Point, out: &mut dyn fmt::Write, options: &str) -> fmt::Result {
///     write!(out, "({},{})", value.x, value.y)
/// }
/// ```
#[proc_macro_attribute]
pub fn format_provider(attr: TokenStream, item: TokenStream) -> TokenStream {
    let func = parse_macro_input!(item as syn::ItemFn);
    provider::expand_format_provider(attr.into(), func).into()
}

// =============================================================================
// Derive Macros
// =============================================================================

/// Mark a type as an error-like value for the consume gate.
///
/// Expands to an empty `MustConsume` impl; the adapter factory then refuses
/// to stream values of the type by value until they are wrapped in
/// `consumed(...)`.
#[proc_macro_derive(MustConsume)]
pub fn derive_must_consume(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    consume::expand_derive_must_consume(input).into()
}
