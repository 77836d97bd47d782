//! Strategy selection report.
//!
//! Classifies a handful of types, then renders each through `adapt!` to show
//! that the chosen rung and the resolver verdict line up. Run with:
//!
//! ```sh
//! cargo run --example strategy_report
//! ```

use core::fmt;

use tola_fmt::prelude::*;
use tola_fmt::{adapt, classify};

/// Provider-backed temperature.
struct Celsius(f32);

impl FormatProvider for Celsius {
    fn format(&self, out: &mut dyn fmt::Write, options: &str) -> fmt::Result {
        match options {
            "unit" => write!(out, "{}\u{b0}C", self.0),
            _ => write!(out, "{}", self.0),
        }
    }
}

/// A type that is already an adapter.
struct Banner(&'static str);

impl Render for Banner {
    fn render(&self, out: &mut dyn fmt::Write, options: &str) -> fmt::Result {
        if options.is_empty() {
            out.write_str(self.0)
        } else {
            write!(out, "[{}] {}", options, self.0)
        }
    }
}

/// Error-like value that demands explicit consumption.
#[derive(MustConsume)]
struct Expired;

impl fmt::Display for Expired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("lease expired")
    }
}

fn line(label: &str, adapter: &impl Render, options: &str) {
    let mut text = String::new();
    adapter.render(&mut text, options).unwrap();
    println!("  {label:<22} options={options:?}  -> {text:?}");
}

fn main() {
    println!("=== Strategy Report ===\n");

    println!("Classification:");
    println!("  u32                    {}", classify!(u32).describe());
    println!("  &str                   {}", classify!(&str).describe());
    println!("  Celsius                {}", classify!(Celsius).describe());
    println!("  Banner                 {}", classify!(Banner).describe());
    println!("  Expired                {}", classify!(Expired).describe());

    println!("\nRendering:");
    line("adapt!(7_u32)", &adapt!(7_u32), "ignored");
    line("adapt!(Celsius(21.5))", &adapt!(Celsius(21.5)), "unit");
    line("adapt!(Banner(..))", &adapt!(Banner("report ready")), "info");
    line("adapt!(consumed(..))", &adapt!(consumed(Expired)), "");

    // A borrow of an error value skips the gate; ownership stays here.
    let pending = Expired;
    line("adapt!(&pending)", &adapt!(&pending), "");

    assert_eq!(classify!(Celsius), Classification::CustomFormatter);
    assert_eq!(classify!(Banner), Classification::AlreadyAdapter);

    println!("\n=== DONE ===");
}
