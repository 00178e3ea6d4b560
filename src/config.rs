//! Application configuration constants.
//!
//! Everything here is fixed at compile time: the endpoint URL, the poll
//! cadence, the panel geometry, and the vertical layout of the stats screen.
//! There are no runtime flags, config files, or environment variables.
//!
//! Layout positions are pre-computed as `const` from the row advances so the
//! renderer never does per-frame arithmetic and the screen layout is obvious
//! from this one file:
//!
//! ```text
//! y=5    Pi-hole Stats                 HH:MM
//! y=25   ──────────────────────────────────
//! y=30   Queries: 50.0K
//! y=48   Blocked: 12.0K
//! y=66   24.0%  blocked
//! y=96   [██████░░░░░░░░░░░░░░░░░░░░░░░░░░]
//! y=111  Lists: 150.0K domains
//! ```

use std::time::Duration;

// =============================================================================
// Endpoint and Timing Configuration
// =============================================================================

/// Pi-hole statistics endpoint polled each cycle.
pub const PIHOLE_API_URL: &str = "http://localhost/admin/api.php";

/// Time between update cycles (10 minutes).
pub const UPDATE_INTERVAL: Duration = Duration::from_secs(600);

/// Upper bound on one statistics fetch, including connect time.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Pause after pushing a frame to the panel. E-paper controllers need a
/// moment before the next command; preview mode ignores this.
pub const PANEL_SETTLE: Duration = Duration::from_secs(2);

// =============================================================================
// Display Configuration
// =============================================================================

/// Panel width in pixels (2.13" e-paper: 250x122).
pub const DISPLAY_WIDTH: u32 = 250;

/// Panel height in pixels.
pub const DISPLAY_HEIGHT: u32 = 122;

/// Preview-mode output path, overwritten every cycle.
pub const PREVIEW_PATH: &str = "/tmp/pihole-display.png";

/// Screen center X coordinate, pre-computed as i32 for drawing code.
pub const CENTER_X: i32 = (DISPLAY_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (DISPLAY_HEIGHT / 2) as i32;

// =============================================================================
// Stats Screen Layout (pre-computed vertical cursor positions)
// =============================================================================

/// Left margin for text rows.
pub const MARGIN_X: i32 = 5;

/// Top of the header row.
pub const TOP_Y: i32 = 5;

/// Y of the 1px separator line under the header.
pub const SEPARATOR_Y: i32 = TOP_Y + 20;

/// "Queries:" row (header advance: 25px).
pub const QUERIES_Y: i32 = TOP_Y + 25;

/// "Blocked:" row (18px below queries).
pub const BLOCKED_Y: i32 = QUERIES_Y + 18;

/// Large percentage row (18px below blocked).
pub const PERCENT_Y: i32 = BLOCKED_Y + 18;

/// X offset of the small "blocked" label to the right of the percentage.
pub const PERCENT_LABEL_X: i32 = 104;

/// Progress bar top (30px below the percentage row).
pub const BAR_Y: i32 = PERCENT_Y + 30;

/// Progress bar left edge.
pub const BAR_X: i32 = 10;

/// Progress bar outline width (panel width minus 10px margin each side).
pub const BAR_WIDTH: u32 = DISPLAY_WIDTH - 20;

/// Progress bar outline height.
pub const BAR_HEIGHT: u32 = 10;

/// Usable fill width inside the 1px bar outline.
pub const BAR_INTERIOR: u32 = BAR_WIDTH - 2;

/// "Lists:" row (15px below the bar).
pub const LISTS_Y: i32 = BAR_Y + 15;

/// Position of the "Pi-hole Offline" message when a fetch fails.
pub const OFFLINE_X: i32 = 10;

/// See [`OFFLINE_X`].
pub const OFFLINE_Y: i32 = 50;
