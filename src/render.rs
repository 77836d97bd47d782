//! # Adapter Contract
//!
//! [`Render`] is the single rendering contract every adapter variant exposes:
//! write the value into a borrowed sink, steered by an opaque options string.
//! A type that implements `Render` directly is already an adapter and passes
//! through [`adapt!`](crate::adapt) unchanged.

use core::fmt;

// =============================================================================
// Render - The Adapter Contract
// =============================================================================

/// Uniform rendering contract backing every adapter variant.
///
/// The sink is borrowed for the duration of a single call. The options text
/// is an opaque per-call string interpreted only by the capability backing
/// the adapter; the stream-backed variant ignores it entirely.
///
/// [`adapt!`](crate::adapt) reports its missing-capability refusal through
/// this trait: the final selection rung requires `Render`, so a type with no
/// formatting capability surfaces the message below at the call site.
#[diagnostic::on_unimplemented(
    message = "no formatting capability found for `{Self}`",
    label = "`{Self}` cannot be adapted for rendering",
    note = "implement `FormatProvider` for custom formatting, `core::fmt::Display` for plain streaming, or `Render` to make the type its own adapter"
)]
pub trait Render {
    /// Write the value into `out`, steered by `options`.
    fn render(&self, out: &mut dyn fmt::Write, options: &str) -> fmt::Result;
}

// =============================================================================
// Reference & Container Blankets
// =============================================================================

// Adapters may hold borrowed values: `adapt!(&v)` walks the same rungs with
// `T = &U`, so each capability has to pass through references.
impl<T: Render + ?Sized> Render for &T {
    #[inline]
    fn render(&self, out: &mut dyn fmt::Write, options: &str) -> fmt::Result {
        (**self).render(out, options)
    }
}

impl<T: Render + ?Sized> Render for &mut T {
    #[inline]
    fn render(&self, out: &mut dyn fmt::Write, options: &str) -> fmt::Result {
        (**self).render(out, options)
    }
}

#[cfg(feature = "alloc")]
impl<T: Render + ?Sized> Render for alloc::boxed::Box<T> {
    #[inline]
    fn render(&self, out: &mut dyn fmt::Write, options: &str) -> fmt::Result {
        (**self).render(out, options)
    }
}
