//! Widget components shared by the screen renderers.
//!
//! - [`header`]: title row with wall-clock and separator line
//! - [`primitives`]: progress bar drawing
//!
//! Widgets draw into a [`Frame`](crate::render::Frame) at positions from
//! [`crate::config`]; they hold no state of their own.

mod header;
mod primitives;

pub use header::draw_title_bar;
pub use primitives::{bar_fill_width, draw_progress_bar};
