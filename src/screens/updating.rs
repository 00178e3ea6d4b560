//! The "Updating" spinner screen.
//!
//! Ten-frame text spinner, one glyph per frame, cycling with period 10.
//! Each frame is a pure function of its index: `draw_updating_frame(k)` and
//! `draw_updating_frame(k + 10)` are byte-identical.
//!
//! The glyph cycle is plain ASCII because the mono fonts carry no braille
//! range; the sequence sweeps through dot, bar, and ring shapes to read as
//! rotation on a slow panel.
//!
//! This screen feeds the same display sink as the stats screen but is not
//! wired into the default update cycle; see
//! [`play_updating_animation`](crate::run::play_updating_animation).

use core::fmt::Write;

use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::config::{CENTER_X, CENTER_Y};
use crate::render::{Frame, blank_frame};
use crate::styles::{CENTER_TOP, TITLE_STYLE};

/// Spinner glyph cycle, in animation order. All ten are distinct.
pub const SPINNER_GLYPHS: [char; 10] = ['.', ':', '\'', '|', '/', '-', '\\', '*', 'o', '+'];

/// Message position (centered, slightly above the middle).
const MESSAGE_POS: Point = Point::new(CENTER_X, CENTER_Y - 10);

/// Render one spinner frame for `index` (wraps modulo the glyph count).
pub fn draw_updating_frame(index: usize) -> Frame {
    let glyph = SPINNER_GLYPHS[index % SPINNER_GLYPHS.len()];
    let mut message: String<16> = String::new();
    write!(message, "Updating {glyph}").ok();

    let mut frame = blank_frame();
    Text::with_text_style(&message, MESSAGE_POS, TITLE_STYLE, CENTER_TOP)
        .draw(&mut frame)
        .ok();
    frame
}
