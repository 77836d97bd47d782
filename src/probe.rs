//! # Capability Probes
//!
//! One compile-time const per capability, answering "does `T` offer this
//! operation?" from `T`'s trait impls alone. No value of `T` is constructed,
//! and a missing capability reads as `false`, never as a build error.
//!
//! ## How It Works
//!
//! For each capability trait `C`:
//! 1. A fallback trait declares `const HAS_C: bool = false` and is
//!    implemented for every `Probe<T>`.
//! 2. An inherent impl on `Probe<T>` where `T: C` declares `HAS_C = true`.
//!
//! Inherent consts shadow trait consts, so `Probe::<T>::HAS_C` reads the
//! inherent `true` exactly when the bound holds and falls back to the trait
//! default otherwise. The fallback traits are an implementation detail;
//! import them anonymously (`use tola_fmt::probe::StreamFallback as _;`) or
//! reach for [`classify!`](crate::classify), which imports them itself.
//!
//! Because the capability is a trait impl, a probe can only be satisfied by
//! the exact operation signature the trait fixes; a stray method that merely
//! shares a name never registers.
//!
//! ## Probes
//!
//! | Const | True when |
//! |-------|-----------|
//! | `Probe::<T>::HAS_ADAPTER` | `T` implements [`Render`](crate::Render) |
//! | `Probe::<T>::HAS_PROVIDER` | `T` implements [`FormatProvider`](crate::FormatProvider) |
//! | `Probe::<T>::HAS_STREAM` | `T` implements [`core::fmt::Display`] |
//! | `Probe::<T>::MUST_CONSUME` | `T` is marked [`MustConsume`](trait@crate::MustConsume) |
//!
//! ## Limitation
//!
//! Probes read the capabilities of **concrete** types. Inside a generic
//! function they see only the declared bounds of the type parameter, not the
//! full capability set of the eventual instantiation.

use core::marker::PhantomData;

use crate::consume::MustConsume;

/// Probe wrapper; carries the examined type, holds nothing.
pub struct Probe<T: ?Sized>(PhantomData<T>);

// =============================================================================
// Capability Probing (generated)
// =============================================================================

/// Generate the fallback trait and inherent const for one capability.
macro_rules! impl_probe {
    // The consume mark reads as MUST_CONSUME rather than HAS_CONSUME.
    (MustConsume) => {
        #[doc(hidden)]
        pub trait ConsumeFallback {
            const MUST_CONSUME: bool = false;
        }
        impl<T: ?Sized> ConsumeFallback for Probe<T> {}
        impl<T: MustConsume + ?Sized> Probe<T> {
            pub const MUST_CONSUME: bool = true;
        }
    };
    ($Cap:path as $name:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$name Fallback>] {
                const [<HAS_ $name:upper>]: bool = false;
            }
            impl<T: ?Sized> [<$name Fallback>] for Probe<T> {}
            impl<T: $Cap + ?Sized> Probe<T> {
                pub const [<HAS_ $name:upper>]: bool = true;
            }
        }
    };
}

impl_probe!(crate::render::Render as Adapter);
impl_probe!(crate::provider::FormatProvider as Provider);
impl_probe!(core::fmt::Display as Stream);
impl_probe!(MustConsume);
