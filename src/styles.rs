//! Pre-computed text styles for the three type sizes.
//!
//! The original design loads three TrueType fonts at startup and falls back
//! to a built-in default if loading fails. Here the font set is compiled in:
//! `embedded-graphics` mono fonts are `const` data, so there is no load step
//! and no failure path. The three handles map as:
//!
//! - large: `ProFont` 24pt (the percentage figure)
//! - medium: `FONT_10X20` (header title, offline and updating messages)
//! - small: `FONT_6X10` (stat rows, clock, bar caption)
//!
//! Styles and alignments are `const` (the constructors are const fn in
//! embedded-graphics 0.8), so no style objects are built per frame.
//!
//! All text is drawn top-anchored: the layout in [`crate::config`] gives the
//! top edge of each row, not a baseline.

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

use crate::render::INK;

// =============================================================================
// Font Set
// =============================================================================

/// Large font for the headline percentage (~16px wide glyphs).
pub const FONT_LARGE: &MonoFont = &PROFONT_24_POINT;

/// Medium font for titles and status messages.
pub const FONT_MEDIUM: &MonoFont = &FONT_10X20;

/// Small font for stat rows and captions.
pub const FONT_SMALL: &MonoFont = &FONT_6X10;

// =============================================================================
// Text Alignment Styles (top-anchored)
// =============================================================================

/// Left-aligned, top-anchored. The default for stat rows.
pub const LEFT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned, top-anchored. Used for the header clock.
pub const RIGHT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

/// Centered, top-anchored. Used for the updating screen.
pub const CENTER_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Character Styles (ink on paper)
// =============================================================================

/// Large ink text for the percentage figure.
pub const VALUE_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(FONT_LARGE, INK);

/// Medium ink text for titles and status messages.
pub const TITLE_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(FONT_MEDIUM, INK);

/// Small ink text for stat rows.
pub const LABEL_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(FONT_SMALL, INK);
