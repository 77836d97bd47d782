//! # Error-Value Gate
//!
//! A value that carries failure state (a deferred result, a pending error)
//! can often be rendered through the generic streaming path, but doing so by
//! value would silently discard the failure it represents. Types opt into
//! the gate with the [`MustConsume`] marker; the factory then refuses to
//! stream them by value until the caller wraps them in [`consumed`].
//!
//! Borrowed values are not gated: rendering `&err` leaves ownership, and the
//! duty to handle the failure, with the caller.
//!
//! The gate guards only the streaming path. A marked type with its own
//! provider or adapter impl renders through that as usual, and a marked type
//! with no stream support stays a plain missing capability.

use core::fmt;
use core::fmt::Display;

use crate::render::Render;

// =============================================================================
// MustConsume - The Marker
// =============================================================================

/// Marker for error-like values whose by-value rendering must be explicit.
///
/// The crate marks no types itself. Mark your own deferred-failure types,
/// either with `#[derive(MustConsume)]` or an empty impl, and the factory
/// starts refusing to stream them by value:
///
/// ```compile_fail
/// use core::fmt;
/// use tola_fmt::{adapt, Render};
///
/// struct Timeout;
///
/// impl tola_fmt::MustConsume for Timeout {}
///
/// impl fmt::Display for Timeout {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("timed out")
///     }
/// }
///
/// // refused: the failure state would be dropped without acknowledgement
/// let _ = adapt!(Timeout);
/// ```
///
/// The marker travels through `Box`: a boxed error is still an owned error.
pub trait MustConsume {}

#[cfg(feature = "alloc")]
impl<E: MustConsume + ?Sized> MustConsume for alloc::boxed::Box<E> {}

// =============================================================================
// ConsumeAcknowledged - The Gate Bound
// =============================================================================

/// Bound required by the consume rung of the selection ladder.
///
/// Only [`Consumed`] satisfies it, so an owned, marked value cannot reach a
/// stream-backed adapter without passing through [`consumed`].
#[diagnostic::on_unimplemented(
    message = "rendering `{Self}` by value would silently discard its failure state",
    label = "owned error-like value in a rendering position",
    note = "wrap it in `consumed(...)` to mark the failure as intentionally spent, or pass a reference to keep ownership"
)]
pub trait ConsumeAcknowledged {}

impl<E: MustConsume> ConsumeAcknowledged for Consumed<E> {}

// =============================================================================
// Consumed - The Acknowledged Wrapper
// =============================================================================

/// An error-like value whose rendering has been explicitly acknowledged.
///
/// Owns the value and renders its failure text through `Display`, ignoring
/// options like every stream-backed path.
pub struct Consumed<E> {
    error: E,
}

/// Acknowledge an owned error-like value for rendering.
///
/// The returned wrapper is its own adapter, so it passes straight through
/// [`adapt!`](crate::adapt):
///
/// ```
/// use core::fmt;
/// use tola_fmt::{adapt, consumed, Render};
///
/// struct Timeout(&'static str);
///
/// impl tola_fmt::MustConsume for Timeout {}
///
/// impl fmt::Display for Timeout {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "timed out after {}", self.0)
///     }
/// }
///
/// let mut text = String::new();
/// adapt!(consumed(Timeout("30s"))).render(&mut text, "").unwrap();
/// assert_eq!(text, "timed out after 30s");
/// ```
pub fn consumed<E: MustConsume>(error: E) -> Consumed<E> {
    Consumed { error }
}

impl<E: MustConsume + Display> Render for Consumed<E> {
    fn render(&self, out: &mut dyn fmt::Write, _options: &str) -> fmt::Result {
        write!(out, "{}", self.error)
    }
}
