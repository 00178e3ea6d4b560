//! The main statistics screen.
//!
//! Renders one snapshot into the fixed layout described in
//! [`crate::config`]: header row with clock, two counter rows, the headline
//! block percentage with its progress bar, and the blocklist size. With no
//! snapshot the screen is just the offline message, so a glance at the
//! panel distinguishes "Pi-hole down" from "0 queries".
//!
//! The wall clock is a parameter, not read here, so rendering is a pure
//! function of `(snapshot, clock)` and tests can pin the header.

use core::fmt::Write;

use chrono::NaiveTime;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::config::{
    BAR_HEIGHT, BAR_WIDTH, BAR_X, BAR_Y, BLOCKED_Y, LISTS_Y, MARGIN_X, OFFLINE_X, OFFLINE_Y,
    PERCENT_LABEL_X, PERCENT_Y, QUERIES_Y,
};
use crate::format::abbreviate;
use crate::render::{Frame, blank_frame};
use crate::stats::StatsSnapshot;
use crate::styles::{LABEL_STYLE, LEFT_TOP, TITLE_STYLE, VALUE_STYLE};
use crate::widgets::{draw_progress_bar, draw_title_bar};

/// Render the stats screen, or the offline screen when `stats` is `None`.
pub fn draw_stats_screen(stats: Option<&StatsSnapshot>, clock: NaiveTime) -> Frame {
    let mut frame = blank_frame();

    let Some(stats) = stats else {
        Text::with_text_style(
            "Pi-hole Offline",
            Point::new(OFFLINE_X, OFFLINE_Y),
            TITLE_STYLE,
            LEFT_TOP,
        )
        .draw(&mut frame)
        .ok();
        return frame;
    };

    draw_title_bar(&mut frame, clock);

    let mut line: String<48> = String::new();
    write!(line, "Queries: {}", abbreviate(stats.queries_today)).ok();
    Text::with_text_style(&line, Point::new(MARGIN_X, QUERIES_Y), LABEL_STYLE, LEFT_TOP)
        .draw(&mut frame)
        .ok();

    line.clear();
    write!(line, "Blocked: {}", abbreviate(stats.blocked_today)).ok();
    Text::with_text_style(&line, Point::new(MARGIN_X, BLOCKED_Y), LABEL_STYLE, LEFT_TOP)
        .draw(&mut frame)
        .ok();

    line.clear();
    write!(line, "{:.1}%", stats.percent_blocked).ok();
    Text::with_text_style(&line, Point::new(MARGIN_X, PERCENT_Y), VALUE_STYLE, LEFT_TOP)
        .draw(&mut frame)
        .ok();
    Text::with_text_style(
        "blocked",
        Point::new(PERCENT_LABEL_X, PERCENT_Y + 5),
        LABEL_STYLE,
        LEFT_TOP,
    )
    .draw(&mut frame)
    .ok();

    draw_progress_bar(&mut frame, BAR_X, BAR_Y, BAR_WIDTH, BAR_HEIGHT, stats.percent_blocked);

    line.clear();
    write!(line, "Lists: {} domains", abbreviate(stats.domains_blocked)).ok();
    Text::with_text_style(&line, Point::new(MARGIN_X, LISTS_Y), LABEL_STYLE, LEFT_TOP)
        .draw(&mut frame)
        .ok();

    frame
}
