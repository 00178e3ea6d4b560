// Crate-level lints: allow the casts that 1bpp pixel math needs
#![allow(clippy::cast_possible_truncation)] // f32->i32, u32->i32 casts in layout math
#![allow(clippy::cast_precision_loss)] // u64->f64 in counter abbreviation
#![allow(clippy::cast_sign_loss)] // i32->u32 where the value is known non-negative
#![allow(clippy::cast_possible_wrap)] // u32->i32 for pixel coordinates

//! Pi-hole statistics on a 2.13" e-paper panel.
//!
//! A single-loop monitoring agent: poll the Pi-hole API on a fixed
//! interval, render the counters into a 250x122 1-bit frame, push the
//! frame to the panel (or to a PNG preview when no panel driver is
//! available), sleep, repeat. Ctrl-C clears the panel and exits.
//!
//! ```text
//! ┌──────────────────────────────────┐
//! │ Pi-hole Stats              12:41 │  header + clock
//! ├──────────────────────────────────┤
//! │ Queries: 50.0K                   │
//! │ Blocked: 12.0K                   │
//! │ 24.0%  blocked                   │
//! │ [██████░░░░░░░░░░░░░░░░░░░░░░░]  │  block-rate bar
//! │ Lists: 150.0K domains            │
//! └──────────────────────────────────┘
//! ```
//!
//! # Architecture
//!
//! [`run::run_loop`] drives one cycle per interval: a [`fetch::StatsSource`]
//! produces an optional [`stats::StatsSnapshot`], [`screens`] render it into
//! a [`render::Frame`], and a [`run::FrameSink`] (normally
//! [`display::DisplaySink`]) pushes it to the device. Every failure mode is
//! non-fatal: fetch failures render the offline screen, device failures log
//! a degraded outcome, and the loop keeps running.

pub mod config;
pub mod display;
pub mod fetch;
pub mod format;
pub mod render;
pub mod run;
pub mod screens;
pub mod stats;
pub mod styles;
pub mod widgets;
