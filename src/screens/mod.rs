//! Screen renderers.
//!
//! Each screen is a pure function from inputs to a finished
//! [`Frame`](crate::render::Frame):
//!
//! - [`stats`]: the main statistics layout, or the offline message when no
//!   snapshot is available
//! - [`updating`]: the cyclic "Updating" spinner frames
//!
//! The update loop renders the stats screen each cycle; the updating screen
//! feeds the same display sink but is not part of the default cycle.

mod stats;
mod updating;

pub use stats::draw_stats_screen;
pub use updating::{SPINNER_GLYPHS, draw_updating_frame};
