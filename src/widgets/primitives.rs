//! Progress bar drawing.
//!
//! An outlined rectangle with a proportional ink fill growing left to
//! right. The outline is always drawn, even at 0% (empty interior). The
//! fill fraction is deliberately not clamped at the top end: percentages
//! above 100 from malformed upstream data request a fill wider than the
//! interior, which simply clips at the frame edge and reads as a full bar.
//! Negative percentages floor at an empty fill.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::config::BAR_INTERIOR;
use crate::render::{Frame, INK, PAPER};

/// Paper interior, painted before the outline and fill.
const BAR_BLANK_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_fill(PAPER);

/// 1px ink outline.
const BAR_OUTLINE_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(INK, 1);

/// Solid ink fill.
const BAR_FILL_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_fill(INK);

/// Fill width in pixels for a given percentage of the bar interior.
///
/// Monotonically non-decreasing in `percent`; 0 at 0%, [`BAR_INTERIOR`] at
/// 100%, wider (and later clipped) above 100%, empty below 0%.
pub fn bar_fill_width(percent: f32) -> u32 {
    let width = (BAR_INTERIOR as f32 * (percent / 100.0)) as i32;
    width.max(0) as u32
}

/// Draw the bar outline and proportional fill at `(x, y)`.
pub fn draw_progress_bar(frame: &mut Frame, x: i32, y: i32, width: u32, height: u32, percent: f32) {
    let outline = Rectangle::new(Point::new(x, y), Size::new(width, height));
    outline.into_styled(BAR_BLANK_STYLE).draw(frame).ok();
    outline.into_styled(BAR_OUTLINE_STYLE).draw(frame).ok();

    let fill = bar_fill_width(percent);
    if fill > 0 {
        Rectangle::new(Point::new(x + 1, y + 1), Size::new(fill, height - 2))
            .into_styled(BAR_FILL_STYLE)
            .draw(frame)
            .ok();
    }
}
