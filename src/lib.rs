#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables the Box blankets in no_std

//! # tola-fmt
//!
//! Capability-driven format adapters with compile-time strategy selection.
//!
//! **One entry point, zero runtime dispatch.**
//!
//! ## Architecture
//!
//! `tola-fmt` turns an arbitrary value into a rendering adapter without the
//! caller naming a strategy. The factory inspects which formatting
//! capability the value's type offers and picks exactly one, most specific
//! first:
//!
//! | rung | capability                | result                     |
//! |------|---------------------------|----------------------------|
//! | 1    | [`Render`]                | the value itself           |
//! | 2    | [`FormatProvider`]        | [`ProviderAdapter`]        |
//! | 3    | [`MustConsume`](trait@MustConsume) gate | refused until [`consumed`] |
//! | 4    | [`core::fmt::Display`]    | [`DisplayAdapter`]         |
//! | 5    | none                      | compile-time refusal       |
//!
//! Rung 3 guards rung 4: it fires only for marked types that also stream, so
//! a mark on an otherwise capability-free type leaves it on rung 5.
//!
//! ### 1. Probing
//! Inherent consts shadow trait-default consts, so `Probe::<T>::HAS_C` reads
//! `true` exactly when `T` implements capability `C` and `false` otherwise,
//! with no build error either way.
//!
//! ### 2. Resolution
//! [`Classification::resolve`] folds the probe results into one verdict;
//! [`classify!`] does it for a named type.
//!
//! ### 3. Selection
//! **Autoref/Method Priority**: each strategy lives at a distinct reference
//! depth of `Select<T>`, and one method-resolution pass over
//! `&&&&&Select<T>` lands on the deepest rung whose bound holds.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Capabilities                                            |
//! |  - Render (contract), FormatProvider, Display, MustConsume        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Probing & Resolution                                    |
//! |  - Probe<T> consts, Classification, classify!                     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Variants & Factory                                      |
//! |  - ProviderAdapter, DisplayAdapter, Consumed, adapt!              |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Features
//!
//! - **Compile-time Selection**: the winning strategy is fixed per type; no
//!   trait objects, no runtime branch
//! - **Strict Precedence**: adapter beats provider beats stream; ties are
//!   impossible
//! - **Compile-time Refusal**: a type with no capability fails the build at
//!   the adaptation site, naming the type
//! - **Error-Value Gate**: owned error-like values must be explicitly
//!   consumed before the stream path will take them
//!
//! ## Quick Start
//!
//! ```
//! use core::fmt;
//! use tola_fmt::prelude::*;
//! use tola_fmt::{adapt, classify};
//!
//! // A type with its own formatter
//! struct Celsius(f32);
//!
//! impl FormatProvider for Celsius {
//!     fn format(&self, out: &mut dyn fmt::Write, options: &str) -> fmt::Result {
//!         match options {
//!             "unit" => write!(out, "{}\u{b0}C", self.0),
//!             _ => write!(out, "{}", self.0),
//!         }
//!     }
//! }
//!
//! // The factory picks the provider over Display, options flow through
//! let mut text = String::new();
//! adapt!(Celsius(21.5)).render(&mut text, "unit").unwrap();
//! assert_eq!(text, "21.5\u{b0}C");
//!
//! // Plain types take the stream path
//! assert_eq!(classify!(u32), Classification::StreamOperator);
//! ```

// Allow `::tola_fmt` to work inside the crate itself
extern crate self as tola_fmt;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Capabilities
// =============================================================================
pub mod consume;
pub mod provider;
pub mod render;

// =============================================================================
// Layer 1: Probing & Resolution
// =============================================================================
pub mod classify;
pub mod probe;

// =============================================================================
// Layer 2: Variants & Factory
// =============================================================================
pub mod adapter;
pub mod select;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use adapter::{DisplayAdapter, ProviderAdapter};
pub use classify::Classification;
pub use consume::{ConsumeAcknowledged, Consumed, MustConsume, consumed};
pub use probe::Probe;
pub use provider::FormatProvider;
pub use render::Render;

// Re-export proc-macros
pub use macros::{MustConsume, format_provider};

/// Common items for adapter construction and classification.
pub mod prelude {
    pub use crate::adapter::{DisplayAdapter, ProviderAdapter};
    pub use crate::classify::Classification;
    pub use crate::consume::{Consumed, MustConsume, consumed};
    pub use crate::probe::Probe;
    pub use crate::provider::FormatProvider;
    pub use crate::render::Render;
    pub use macros::{MustConsume, format_provider};
    // Note: adapt! and classify! are #[macro_export] so they're at crate root
}
