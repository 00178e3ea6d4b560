//! Stats screen header: title, wall-clock, separator line.
//!
//! Layout is fixed: "Pi-hole Stats" left-aligned in the medium font, the
//! clock right-aligned in the small font on the same row, and a full-width
//! 1px separator underneath. The clock is passed in by the caller so the
//! renderer stays a pure function; only minutes are shown since the panel
//! refreshes every ten minutes anyway.

use core::fmt::Write;

use chrono::{NaiveTime, Timelike};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::config::{DISPLAY_WIDTH, MARGIN_X, SEPARATOR_Y, TOP_Y};
use crate::render::{Frame, INK};
use crate::styles::{LABEL_STYLE, LEFT_TOP, RIGHT_TOP, TITLE_STYLE};

// =============================================================================
// Header Layout Constants
// =============================================================================

/// Title position (left margin, top row).
const TITLE_POS: Point = Point::new(MARGIN_X, TOP_Y);

/// Clock position (right-aligned, 5px from the edge).
const CLOCK_POS: Point = Point::new((DISPLAY_WIDTH - 5) as i32, TOP_Y);

/// Separator endpoints (full width, valid x is 0..=width-1).
const SEPARATOR_START: Point = Point::new(0, SEPARATOR_Y);
const SEPARATOR_END: Point = Point::new((DISPLAY_WIDTH - 1) as i32, SEPARATOR_Y);

/// 1px ink stroke for the separator.
const SEPARATOR_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(INK, 1);

/// Draw the header row and separator.
pub fn draw_title_bar(frame: &mut Frame, clock: NaiveTime) {
    Text::with_text_style("Pi-hole Stats", TITLE_POS, TITLE_STYLE, LEFT_TOP)
        .draw(frame)
        .ok();

    let mut hhmm: String<8> = String::new();
    write!(hhmm, "{:02}:{:02}", clock.hour(), clock.minute()).ok();
    Text::with_text_style(&hhmm, CLOCK_POS, LABEL_STYLE, RIGHT_TOP)
        .draw(frame)
        .ok();

    Line::new(SEPARATOR_START, SEPARATOR_END)
        .into_styled(SEPARATOR_STYLE)
        .draw(frame)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{blank_frame, ink_pixels_in};
    use embedded_graphics::primitives::Rectangle;

    #[test]
    fn test_separator_spans_full_width() {
        let mut frame = blank_frame();
        draw_title_bar(&mut frame, NaiveTime::from_hms_opt(12, 34, 0).unwrap());
        let separator_row =
            Rectangle::new(Point::new(0, SEPARATOR_Y), Size::new(DISPLAY_WIDTH, 1));
        assert_eq!(ink_pixels_in(&frame, &separator_row), DISPLAY_WIDTH);
    }

    #[test]
    fn test_clock_renders_zero_padded() {
        let mut a = blank_frame();
        let mut b = blank_frame();
        draw_title_bar(&mut a, NaiveTime::from_hms_opt(9, 5, 0).unwrap());
        draw_title_bar(&mut b, NaiveTime::from_hms_opt(9, 5, 59).unwrap());
        // Seconds are not displayed, so these frames are identical.
        assert_eq!(a.data(), b.data());
        // A different minute changes the clock area.
        let mut c = blank_frame();
        draw_title_bar(&mut c, NaiveTime::from_hms_opt(9, 6, 0).unwrap());
        assert_ne!(a.data(), c.data());
    }

    #[test]
    fn test_header_leaves_body_blank() {
        let mut frame = blank_frame();
        draw_title_bar(&mut frame, NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        let body = Rectangle::new(
            Point::new(0, SEPARATOR_Y + 1),
            Size::new(DISPLAY_WIDTH, crate::config::DISPLAY_HEIGHT - (SEPARATOR_Y as u32 + 1)),
        );
        assert_eq!(ink_pixels_in(&frame, &body), 0);
    }
}
