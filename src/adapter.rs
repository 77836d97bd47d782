//! # Adapter Variants
//!
//! One owning wrapper per backing capability. The pass-through case has no
//! wrapper: a value that implements [`Render`] comes out of
//! [`adapt!`](crate::adapt) unchanged. The missing-capability case is an
//! absent impl rather than an inert type.

use core::fmt;
use core::fmt::Display;

use crate::provider::FormatProvider;
use crate::render::Render;

// =============================================================================
// ProviderAdapter - Custom-Formatter Backed
// =============================================================================

/// Adapter backed by the value's [`FormatProvider`] impl.
pub struct ProviderAdapter<T> {
    item: T,
}

impl<T: FormatProvider> ProviderAdapter<T> {
    /// Wrap a value whose provider will do the rendering.
    pub fn new(item: T) -> Self {
        ProviderAdapter { item }
    }
}

impl<T: FormatProvider> Render for ProviderAdapter<T> {
    fn render(&self, out: &mut dyn fmt::Write, options: &str) -> fmt::Result {
        self.item.format(out, options)
    }
}

// =============================================================================
// DisplayAdapter - Stream Backed
// =============================================================================

/// Adapter backed by the value's [`Display`] impl.
///
/// Generic streaming has no options grammar; the options text is ignored.
pub struct DisplayAdapter<T> {
    item: T,
}

impl<T: Display> DisplayAdapter<T> {
    /// Wrap a value rendered through its `Display` impl.
    pub fn new(item: T) -> Self {
        DisplayAdapter { item }
    }
}

impl<T: Display> Render for DisplayAdapter<T> {
    fn render(&self, out: &mut dyn fmt::Write, _options: &str) -> fmt::Result {
        write!(out, "{}", self.item)
    }
}
