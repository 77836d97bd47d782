//! # Custom Formatter Capability
//!
//! A [`FormatProvider`] impl is a purpose-built formatter keyed to one type.
//! During selection it outranks `Display`: an explicit provider states
//! author intent, a streaming impl is often incidental.

use core::fmt;

// =============================================================================
// FormatProvider - Purpose-Built Formatting
// =============================================================================

/// Purpose-built formatter for a single type.
///
/// The options text belongs to this capability: its grammar is whatever the
/// provider defines, and [`adapt!`](crate::adapt) passes it through
/// unchanged.
///
/// Providers can be written as free functions with the
/// [`#[format_provider]`](macro@crate::format_provider) attribute:
///
/// ```
/// use core::fmt;
/// use tola_fmt::{Render, adapt, format_provider};
///
/// struct Hex(u32);
///
/// #[format_provider]
/// fn hex_format(value: &Hex, out: &mut dyn fmt::Write, options: &str) -> fmt::Result {
///     match options {
///         "upper" => write!(out, "{:X}", value.0),
///         _ => write!(out, "{:x}", value.0),
///     }
/// }
///
/// let mut text = String::new();
/// adapt!(Hex(48879)).render(&mut text, "upper").unwrap();
/// assert_eq!(text, "BEEF");
/// ```
pub trait FormatProvider {
    /// Format the value into `out` according to `options`.
    fn format(&self, out: &mut dyn fmt::Write, options: &str) -> fmt::Result;
}

// =============================================================================
// Reference & Container Blankets
// =============================================================================

impl<T: FormatProvider + ?Sized> FormatProvider for &T {
    #[inline]
    fn format(&self, out: &mut dyn fmt::Write, options: &str) -> fmt::Result {
        (**self).format(out, options)
    }
}

impl<T: FormatProvider + ?Sized> FormatProvider for &mut T {
    #[inline]
    fn format(&self, out: &mut dyn fmt::Write, options: &str) -> fmt::Result {
        (**self).format(out, options)
    }
}

#[cfg(feature = "alloc")]
impl<T: FormatProvider + ?Sized> FormatProvider for alloc::boxed::Box<T> {
    #[inline]
    fn format(&self, out: &mut dyn fmt::Write, options: &str) -> fmt::Result {
        (**self).format(out, options)
    }
}
