#![allow(dead_code, unused)]

//! Demonstrations of the compile-time refusals.
//!
//! The erroring lines are kept commented, each with the diagnostic it
//! produces; the enforced equivalents live as `compile_fail` doctests on
//! `adapt!` and `MustConsume`.

use std::fmt;

use tola_fmt::prelude::*;
use tola_fmt::adapt;

// Scenario 1: No capability at all.
struct Opaque {
    raw: [u8; 4],
}

// Scenario 2: Owned error-like value whose only rendering path is streaming.
#[derive(MustConsume)]
struct LostUpdate;

impl fmt::Display for LostUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("update was lost")
    }
}

// Scenario 3: Marked, but with no stream path for the gate to guard.
#[derive(MustConsume)]
struct Unprintable;

#[test]
fn test_missing_capability_refusal() {
    let opaque = Opaque { raw: [0; 4] };

    // error: no formatting capability found for `Opaque`
    // let _ = adapt!(opaque);

    let _ = opaque;
}

#[test]
fn test_unacknowledged_consume_refusal() {
    // error: rendering `LostUpdate` by value would silently discard its failure state
    // let _ = adapt!(LostUpdate);

    // Both escapes compile: acknowledge the consume, or keep ownership.
    let mut text = String::new();
    adapt!(consumed(LostUpdate)).render(&mut text, "").unwrap();
    assert_eq!(text, "update was lost");

    let kept = LostUpdate;
    let mut borrowed = String::new();
    adapt!(&kept).render(&mut borrowed, "").unwrap();
    assert_eq!(borrowed, "update was lost");
}

#[test]
fn test_marked_without_stream_support_gets_the_missing_refusal() {
    let value = Unprintable;

    // The mark adds no capability, so the diagnostic is the missing one,
    // not a dead-end demand for `consumed(...)`.
    // error: no formatting capability found for `Unprintable`
    // let _ = adapt!(value);

    let _ = value;
}
