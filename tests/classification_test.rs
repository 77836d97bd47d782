//! Probe and resolver behavior over a zoo of capability combinations.
//!
//! Probes answer from trait impls alone, degrade to `false` instead of
//! erroring, and the resolver picks exactly one winner per type.

use std::fmt;

use tola_fmt::probe::{
    AdapterFallback as _, ConsumeFallback as _, Probe, ProviderFallback as _, StreamFallback as _,
};
use tola_fmt::{Classification, FormatProvider, MustConsume, Render, classify};

// =============================================================================
// Test Types
// =============================================================================

struct ProviderOnly;

impl FormatProvider for ProviderOnly {
    fn format(&self, out: &mut dyn fmt::Write, _options: &str) -> fmt::Result {
        out.write_str("provider-only")
    }
}

struct DisplayOnly;

impl fmt::Display for DisplayOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("display-only")
    }
}

struct BothCaps;

impl FormatProvider for BothCaps {
    fn format(&self, out: &mut dyn fmt::Write, _options: &str) -> fmt::Result {
        out.write_str("both")
    }
}

impl fmt::Display for BothCaps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("both")
    }
}

struct AdapterOnly;

impl Render for AdapterOnly {
    fn render(&self, out: &mut dyn fmt::Write, _options: &str) -> fmt::Result {
        out.write_str("adapter-only")
    }
}

struct NoCaps;

/// Display-capable error value carrying the consume mark.
struct Marked;

impl MustConsume for Marked {}

impl fmt::Display for Marked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("marked")
    }
}

// =============================================================================
// Probes
// =============================================================================

#[test]
fn test_probe_reports_implemented_capabilities() {
    assert!(Probe::<ProviderOnly>::HAS_PROVIDER);
    assert!(!Probe::<ProviderOnly>::HAS_STREAM);
    assert!(!Probe::<ProviderOnly>::HAS_ADAPTER);

    assert!(Probe::<DisplayOnly>::HAS_STREAM);
    assert!(!Probe::<DisplayOnly>::HAS_PROVIDER);

    assert!(Probe::<AdapterOnly>::HAS_ADAPTER);
    assert!(!Probe::<AdapterOnly>::HAS_STREAM);

    assert!(Probe::<BothCaps>::HAS_PROVIDER);
    assert!(Probe::<BothCaps>::HAS_STREAM);
}

#[test]
fn test_probe_degrades_to_false_without_erroring() {
    assert!(!Probe::<NoCaps>::HAS_ADAPTER);
    assert!(!Probe::<NoCaps>::HAS_PROVIDER);
    assert!(!Probe::<NoCaps>::HAS_STREAM);
    assert!(!Probe::<NoCaps>::MUST_CONSUME);
}

#[test]
fn test_probe_sees_std_types() {
    assert!(Probe::<u32>::HAS_STREAM);
    assert!(Probe::<String>::HAS_STREAM);
    assert!(Probe::<str>::HAS_STREAM);
    assert!(!Probe::<String>::HAS_PROVIDER);
    assert!(!Probe::<u32>::HAS_ADAPTER);
}

#[test]
fn test_probe_follows_references() {
    // Capability blankets carry providers and adapters through `&T`.
    assert!(Probe::<&ProviderOnly>::HAS_PROVIDER);
    assert!(Probe::<&AdapterOnly>::HAS_ADAPTER);
    assert!(Probe::<&DisplayOnly>::HAS_STREAM);
}

#[test]
fn test_consume_mark_stops_at_the_borrow() {
    assert!(Probe::<Marked>::MUST_CONSUME);
    // A borrow does not own the failure, so it is not gated.
    assert!(!Probe::<&Marked>::MUST_CONSUME);
}

#[cfg(feature = "alloc")]
#[test]
fn test_consume_mark_travels_through_box() {
    assert!(Probe::<Box<Marked>>::MUST_CONSUME);
    assert!(!Probe::<Box<DisplayOnly>>::MUST_CONSUME);
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_classify_picks_exactly_one_winner() {
    assert_eq!(classify!(ProviderOnly), Classification::CustomFormatter);
    assert_eq!(classify!(DisplayOnly), Classification::StreamOperator);
    assert_eq!(classify!(AdapterOnly), Classification::AlreadyAdapter);
    assert_eq!(classify!(NoCaps), Classification::MissingCapability);
}

#[test]
fn test_classify_prefers_provider_over_stream() {
    assert_eq!(classify!(BothCaps), Classification::CustomFormatter);
}

#[test]
fn test_classify_missing_capability_is_not_an_error() {
    // The resolver is total; only the factory refuses.
    struct Opaque;
    assert_eq!(classify!(Opaque), Classification::MissingCapability);
}

#[test]
fn test_classify_std_types() {
    assert_eq!(classify!(u32), Classification::StreamOperator);
    assert_eq!(classify!(&str), Classification::StreamOperator);
    assert_eq!(classify!(String), Classification::StreamOperator);
}

#[test]
fn test_marked_types_still_classify_by_capability() {
    // The gate guards the factory; it does not add a category.
    assert_eq!(classify!(Marked), Classification::StreamOperator);
}

#[test]
fn test_mark_without_capability_stays_missing() {
    // The mark gates a path; it does not create one.
    struct Tombstone;
    impl MustConsume for Tombstone {}

    assert!(Probe::<Tombstone>::MUST_CONSUME);
    assert_eq!(classify!(Tombstone), Classification::MissingCapability);
}
