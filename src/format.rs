//! Compact formatting of large counters.
//!
//! Counter values from a busy Pi-hole run into the millions; the panel rows
//! have room for half a dozen characters. Values abbreviate to `K`/`M`
//! suffixes with one or two decimals:
//!
//! - `999`       -> `"999"`
//! - `1_500`     -> `"1.5K"`
//! - `2_500_000` -> `"2.50M"`
//!
//! Formatting writes into a `heapless::String`, so the render path does not
//! allocate. Worst case is `"18446744073709551615"` for a raw `u64`, hence
//! the 24-byte capacity.

use core::fmt::Write;

use heapless::String;

/// Abbreviate a counter for display.
pub fn abbreviate(n: u64) -> String<24> {
    let mut out = String::new();
    if n >= 1_000_000 {
        let millions = n as f64 / 1_000_000.0;
        write!(out, "{millions:.2}M").ok();
    } else if n >= 1_000 {
        let thousands = n as f64 / 1_000.0;
        write!(out, "{thousands:.1}K").ok();
    } else {
        write!(out, "{n}").ok();
    }
    out
}
