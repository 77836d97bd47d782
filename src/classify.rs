//! # Priority Resolver
//!
//! Folds the three capability facts into exactly one [`Classification`],
//! first match wins:
//!
//! 1. already an adapter (`Render`)
//! 2. custom formatter (`FormatProvider`)
//! 3. stream operator (`Display`)
//! 4. missing capability
//!
//! An adapter is never re-wrapped, and a purpose-built provider outranks an
//! incidental streaming impl. The resolver is total: a type with no
//! capability classifies as [`MissingCapability`](Classification::MissingCapability)
//! here, and only the factory refuses it.

// =============================================================================
// Classification - The Resolver Verdict
// =============================================================================

/// The single winning capability category for a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The type already conforms to the adapter contract.
    AlreadyAdapter,
    /// A purpose-built `FormatProvider` impl exists.
    CustomFormatter,
    /// Only generic stream support (`Display`) exists.
    StreamOperator,
    /// No formatting capability at all; `adapt!` refuses such types.
    MissingCapability,
}

impl Classification {
    /// The precedence rule, stated once; first match wins.
    pub const fn resolve(has_adapter: bool, has_provider: bool, has_stream: bool) -> Self {
        if has_adapter {
            Classification::AlreadyAdapter
        } else if has_provider {
            Classification::CustomFormatter
        } else if has_stream {
            Classification::StreamOperator
        } else {
            Classification::MissingCapability
        }
    }

    /// Human-readable strategy name for reports and demos.
    pub const fn describe(self) -> &'static str {
        match self {
            Classification::AlreadyAdapter => "already an adapter",
            Classification::CustomFormatter => "custom formatter",
            Classification::StreamOperator => "stream operator",
            Classification::MissingCapability => "no formatting capability",
        }
    }
}

// =============================================================================
// classify! - Resolve a Concrete Type
// =============================================================================

/// Classify a concrete type by probing its capabilities.
///
/// Evaluates at compile time; the result is an ordinary [`Classification`]
/// value, so resolver behavior can be asserted in tests:
///
/// ```
/// use tola_fmt::{classify, Classification};
///
/// assert_eq!(classify!(u32), Classification::StreamOperator);
///
/// struct Opaque;
/// assert_eq!(classify!(Opaque), Classification::MissingCapability);
/// ```
#[macro_export]
macro_rules! classify {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::probe::{AdapterFallback as _, ProviderFallback as _, StreamFallback as _};
        $crate::Classification::resolve(
            $crate::probe::Probe::<$T>::HAS_ADAPTER,
            $crate::probe::Probe::<$T>::HAS_PROVIDER,
            $crate::probe::Probe::<$T>::HAS_STREAM,
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::Classification;

    #[test]
    fn test_resolve_truth_table() {
        use Classification::*;
        // (adapter, provider, stream) -> winner, all eight combinations
        let table = [
            ((false, false, false), MissingCapability),
            ((false, false, true), StreamOperator),
            ((false, true, false), CustomFormatter),
            ((false, true, true), CustomFormatter),
            ((true, false, false), AlreadyAdapter),
            ((true, false, true), AlreadyAdapter),
            ((true, true, false), AlreadyAdapter),
            ((true, true, true), AlreadyAdapter),
        ];
        for ((adapter, provider, stream), expected) in table {
            assert_eq!(Classification::resolve(adapter, provider, stream), expected);
        }
    }

    #[test]
    fn test_resolve_in_const_context() {
        const VERDICT: Classification = Classification::resolve(false, true, true);
        assert_eq!(VERDICT, Classification::CustomFormatter);
    }

    #[test]
    fn test_describe_names_every_variant() {
        assert_eq!(Classification::AlreadyAdapter.describe(), "already an adapter");
        assert_eq!(Classification::CustomFormatter.describe(), "custom formatter");
        assert_eq!(Classification::StreamOperator.describe(), "stream operator");
        assert_eq!(
            Classification::MissingCapability.describe(),
            "no formatting capability"
        );
    }
}
