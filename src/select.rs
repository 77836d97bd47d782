//! # Adapter Factory
//!
//! [`adapt!`](crate::adapt) turns a value into an adapter by walking a fixed
//! ladder of selection rungs, most specific capability first:
//!
//! 1. already an adapter ([`Render`]): returned unchanged
//! 2. custom formatter ([`FormatProvider`]): wrapped in [`ProviderAdapter`]
//! 3. consume gate ([`MustConsume`] on a stream operator): refused until
//!    [`consumed`]
//! 4. stream operator ([`core::fmt::Display`]): wrapped in [`DisplayAdapter`]
//! 5. missing: refused with a capability diagnostic
//!
//! ## How It Works
//!
//! Each rung is a single-method trait implemented at a distinct reference
//! depth of [`Select`]. One method-resolution pass over `&&&&&Select<T>`
//! tries the deepest rung first and stops at the first rung whose capability
//! bound holds, so precedence is decided entirely by the type system. No
//! runtime branch survives; exactly one rung is compiled into use per type.
//!
//! ```text
//! &&&&&Select<T>
//!   -> &&&&Select<T>   T: Render                  => Passthrough
//!   -> &&&Select<T>    T: FormatProvider          => ByProvider
//!   -> &&Select<T>     T: MustConsume + Display   => ConsumeGuard
//!   -> &Select<T>      T: Display                 => ByStream
//!   -> Select<T>       (always)                   => NoCapability
//! ```
//!
//! The gate rung needs the mark and stream support together; a marked type
//! with nothing to stream falls past it to the missing rung.
//!
//! The two refusal rungs resolve successfully and fail afterwards: their
//! `adapt` signatures carry a bound no type on that rung can satisfy, which
//! turns construction into the diagnostic on [`Render`] or
//! [`ConsumeAcknowledged`].
//!
//! ## Generic Contexts
//!
//! Rung bounds are checked against what is known of `T` at the call site.
//! Inside a generic function that is the declared bounds of the type
//! parameter, so `adapt!` follows what the signature promises, not the full
//! capability set of the eventual instantiation.

use core::fmt::Display;
use core::marker::PhantomData;

use crate::adapter::{DisplayAdapter, ProviderAdapter};
use crate::classify::Classification;
use crate::consume::{ConsumeAcknowledged, Consumed, MustConsume, consumed};
use crate::provider::FormatProvider;
use crate::render::Render;

// =============================================================================
// Select - The Resolution Carrier
// =============================================================================

/// Selection wrapper; carries the candidate type through method resolution.
pub struct Select<T>(PhantomData<T>);

impl<T> Select<T> {
    /// Build a selection carrier for the type of `value` without taking it.
    pub fn of(_value: &T) -> Select<T> {
        Select(PhantomData)
    }
}

// =============================================================================
// Selection Tags
// =============================================================================

/// Ties each selection tag back to the resolver's verdict.
pub trait SelectionKind {
    /// The classification this rung realizes.
    const CLASSIFICATION: Classification;
}

/// Rung 1: the value is its own adapter.
pub struct Passthrough;

/// Rung 2: wrap the value's custom formatter.
pub struct ByProvider;

/// Rung 3: owned error-like value; streaming requires acknowledgement.
pub struct ConsumeGuard;

/// Rung 4: wrap the value's generic stream support.
pub struct ByStream;

/// Rung 5: nothing to wrap; constructing the adapter reports the failure.
pub struct NoCapability;

impl SelectionKind for Passthrough {
    const CLASSIFICATION: Classification = Classification::AlreadyAdapter;
}
impl SelectionKind for ByProvider {
    const CLASSIFICATION: Classification = Classification::CustomFormatter;
}
// The gate guards the stream path; it is not a fifth category.
impl SelectionKind for ConsumeGuard {
    const CLASSIFICATION: Classification = Classification::StreamOperator;
}
impl SelectionKind for ByStream {
    const CLASSIFICATION: Classification = Classification::StreamOperator;
}
impl SelectionKind for NoCapability {
    const CLASSIFICATION: Classification = Classification::MissingCapability;
}

// =============================================================================
// Rung Traits (method-priority ladder)
// =============================================================================
//
// Reference depth encodes precedence: method resolution for `&&&&&Select<T>`
// visits `&&&&Select<T>` impls before `&&&Select<T>` impls and so on down to
// `Select<T>`, the unconditional fallback. A rung whose bound does not hold
// is skipped during probing.

pub trait PassthroughKind {
    fn render_kind(&self) -> Passthrough {
        Passthrough
    }
}
impl<T: Render> PassthroughKind for &&&&Select<T> {}

pub trait ProviderKind {
    fn render_kind(&self) -> ByProvider {
        ByProvider
    }
}
impl<T: FormatProvider> ProviderKind for &&&Select<T> {}

pub trait ConsumeGuardKind {
    fn render_kind(&self) -> ConsumeGuard {
        ConsumeGuard
    }
}
impl<T: MustConsume + Display> ConsumeGuardKind for &&Select<T> {}

pub trait StreamKind {
    fn render_kind(&self) -> ByStream {
        ByStream
    }
}
impl<T: Display> StreamKind for &Select<T> {}

pub trait MissingKind {
    fn render_kind(&self) -> NoCapability {
        NoCapability
    }
}
impl<T> MissingKind for Select<T> {}

// =============================================================================
// Tag Constructors
// =============================================================================

impl Passthrough {
    /// The value already conforms; hand it back untouched.
    #[inline(always)]
    pub fn adapt<T: Render>(self, value: T) -> T {
        value
    }
}

impl ByProvider {
    #[inline(always)]
    pub fn adapt<T: FormatProvider>(self, value: T) -> ProviderAdapter<T> {
        ProviderAdapter::new(value)
    }
}

impl ConsumeGuard {
    /// Unsatisfiable on this rung: only [`Consumed`] meets the bound, and
    /// `Consumed` is `Render`, which wins two rungs earlier. Reaching this
    /// signature reports the acknowledgement diagnostic at the call site.
    #[inline(always)]
    pub fn adapt<T>(self, value: T) -> Consumed<T>
    where
        T: MustConsume + ConsumeAcknowledged,
    {
        consumed(value)
    }
}

impl ByStream {
    #[inline(always)]
    pub fn adapt<T: Display>(self, value: T) -> DisplayAdapter<T> {
        DisplayAdapter::new(value)
    }
}

impl NoCapability {
    /// Unsatisfiable on this rung: a `Render` type passes through four rungs
    /// earlier. Reaching this signature reports the missing-capability
    /// diagnostic at the call site.
    #[inline(always)]
    pub fn adapt<T: Render>(self, value: T) -> T {
        value
    }
}

// =============================================================================
// adapt! - The Factory Entry Point
// =============================================================================

/// Adapt a value into a format adapter.
///
/// Selects the rendering strategy for the value's type at compile time, most
/// specific capability first ([`Render`](crate::Render), then
/// [`FormatProvider`](crate::FormatProvider), then [`core::fmt::Display`]),
/// and returns the matching adapter variant behind the common
/// [`Render`](crate::Render) contract. The value is moved into the adapter;
/// pass a reference to adapt a borrow instead.
///
/// ```
/// use tola_fmt::{Render, adapt};
///
/// let mut text = String::new();
/// adapt!(42).render(&mut text, "anything").unwrap();
/// assert_eq!(text, "42");
/// ```
///
/// A type with no formatting capability is refused at compile time:
///
/// ```compile_fail
/// use tola_fmt::{Render, adapt};
///
/// struct Opaque(u32);
///
/// // no formatting capability found for `Opaque`
/// let _ = adapt!(Opaque(7));
/// ```
#[macro_export]
macro_rules! adapt {
    ($value:expr) => {
        match $value {
            value => {
                use $crate::select::*;
                (&&&&&$crate::select::Select::of(&value)).render_kind().adapt(value)
            }
        }
    };
}
