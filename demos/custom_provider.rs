//! Authoring a custom formatter with `#[format_provider]`.
//!
//! The attribute keys a free formatting function to its `&T` parameter and
//! generates the `FormatProvider` impl, so the type immediately outranks its
//! own `Display` impl in the factory. Run with:
//!
//! ```sh
//! cargo run --example custom_provider
//! ```

use core::fmt;

use tola_fmt::prelude::*;
use tola_fmt::{adapt, classify, format_provider};

struct Duration {
    secs: u64,
}

// Still present, and still ignored by the factory once a provider exists.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.secs)
    }
}

/// Options grammar: "" plain seconds, "clock" HH:MM:SS.
#[format_provider]
fn duration_format(value: &Duration, out: &mut dyn fmt::Write, options: &str) -> fmt::Result {
    match options {
        "clock" => {
            let h = value.secs / 3600;
            let m = (value.secs % 3600) / 60;
            let s = value.secs % 60;
            write!(out, "{h:02}:{m:02}:{s:02}")
        }
        _ => write!(out, "{}s", value.secs),
    }
}

fn main() {
    println!("=== Custom Provider ===\n");

    let uptime = Duration { secs: 4000 };
    println!("classification: {}", classify!(Duration).describe());

    let mut plain = String::new();
    adapt!(&uptime).render(&mut plain, "").unwrap();
    println!("plain:          {plain}");

    let mut clock = String::new();
    adapt!(&uptime).render(&mut clock, "clock").unwrap();
    println!("clock:          {clock}");

    assert_eq!(plain, "4000s");
    assert_eq!(clock, "01:06:40");
    assert_eq!(classify!(Duration), Classification::CustomFormatter);

    println!("\n=== DONE ===");
}
