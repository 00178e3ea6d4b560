//! The 1-bit frame type and ink/paper color conventions.
//!
//! A [`Frame`] is an owned, fixed-size monochrome framebuffer matching the
//! panel controller's RAM layout: one bit per pixel, packed MSB-first,
//! rows padded to a byte boundary (250px -> 32 bytes per row). The panel
//! sink pushes [`Frame::data`] to the driver verbatim; preview mode expands
//! the same bits into a grayscale PNG.
//!
//! # Color Convention
//!
//! E-paper is white where a bit is set, so `BinaryColor::On` is the paper
//! background and `BinaryColor::Off` is black ink. [`blank_frame`] returns a
//! frame cleared to paper; renderers then draw with [`INK`].
//!
//! Drawing into a `Frame` cannot fail (the draw target error type is
//! `Infallible`), so renderers stay pure `inputs -> Frame` functions with no
//! error path.

use embedded_graphics::framebuffer::{Framebuffer, buffer_size};
use embedded_graphics::image::GetPixel;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::pixelcolor::raw::{LittleEndian, RawU1};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

// =============================================================================
// Frame Geometry
// =============================================================================

/// Frame width as `usize` for const-generic arithmetic.
pub const FRAME_WIDTH: usize = DISPLAY_WIDTH as usize;

/// Frame height as `usize`.
pub const FRAME_HEIGHT: usize = DISPLAY_HEIGHT as usize;

/// Total packed buffer size in bytes.
pub const FRAME_BYTES: usize = buffer_size::<BinaryColor>(FRAME_WIDTH, FRAME_HEIGHT);

/// Packed bytes per pixel row (width rounded up to a whole byte).
pub const ROW_BYTES: usize = FRAME_BYTES / FRAME_HEIGHT;

// =============================================================================
// Colors
// =============================================================================

/// Black foreground (bit = 0).
pub const INK: BinaryColor = BinaryColor::Off;

/// White background (bit = 1).
pub const PAPER: BinaryColor = BinaryColor::On;

// =============================================================================
// Frame Type
// =============================================================================

/// One panel-sized monochrome bitmap. Produced by a renderer, consumed
/// exactly once by the display sink, then discarded.
pub type Frame =
    Framebuffer<BinaryColor, RawU1, LittleEndian, FRAME_WIDTH, FRAME_HEIGHT, FRAME_BYTES>;

/// Create a frame cleared to the paper (white) background.
pub fn blank_frame() -> Frame {
    let mut frame = Frame::new();
    frame.clear(PAPER).ok();
    frame
}

/// Count ink (black) pixels inside `area`, clipped to the frame.
///
/// Used by layout assertions: text and bar fills show up as ink counts in
/// their designated rows.
pub fn ink_pixels_in(frame: &Frame, area: &Rectangle) -> u32 {
    let mut count = 0;
    for point in area.points() {
        if frame.pixel(point) == Some(INK) {
            count += 1;
        }
    }
    count
}

/// Packed bytes for the rows starting at `from_row`, to the bottom edge.
///
/// Lets tests compare everything below the wall-clock header against a
/// reference rendering without pinning the clock.
pub fn rows_from(frame: &Frame, from_row: usize) -> &[u8] {
    &frame.data()[from_row * ROW_BYTES..]
}
