//! Display sinks: the physical panel and the PNG preview fallback.
//!
//! The vendor panel driver is a collaborator behind the [`PanelDriver`]
//! trait; this crate ships no hardware backend. [`DisplaySink::detect`]
//! performs the capability check once at startup and, with no backend
//! compiled in, selects preview mode — the sink variant never changes for
//! the rest of the run.
//!
//! Showing a frame never raises to the caller. Failures surface as a typed
//! [`ShowOutcome::Degraded`] value so the update loop can log them and
//! carry on with stale panel content until the next cycle. Shutdown
//! teardown is likewise best-effort: each step is logged and driver errors
//! are swallowed, because a failed cleanup must not block process exit.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use embedded_graphics::image::GetPixel;
use embedded_graphics::prelude::*;
use image::{GrayImage, Luma};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, PREVIEW_PATH};
use crate::render::{Frame, INK};

// =============================================================================
// Panel Driver Collaborator
// =============================================================================

/// Error raised by a vendor panel driver.
#[derive(Debug, Error)]
#[error("panel driver {op} failed: {reason}")]
pub struct PanelError {
    /// Driver operation that failed (`init`, `clear`, `display`, `sleep`).
    pub op: &'static str,
    pub reason: String,
}

impl PanelError {
    pub fn new(op: &'static str, reason: impl Into<String>) -> Self {
        Self { op, reason: reason.into() }
    }
}

/// Interface to a vendor e-paper driver. Buffer layout is the packed 1bpp
/// format of [`Frame::data`](crate::render::Frame).
pub trait PanelDriver {
    /// Wake and initialize the controller.
    fn init(&mut self) -> Result<(), PanelError>;
    /// Clear panel RAM to `fill` (0xFF = white).
    fn clear(&mut self, fill: u8) -> Result<(), PanelError>;
    /// Push a full frame buffer and refresh.
    fn display(&mut self, buffer: &[u8]) -> Result<(), PanelError>;
    /// Enter deep sleep.
    fn sleep(&mut self) -> Result<(), PanelError>;
}

// =============================================================================
// Sink
// =============================================================================

/// Failure shown as a degraded outcome instead of an error return.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error(transparent)]
    Panel(#[from] PanelError),
    #[error("writing preview image: {0}")]
    Preview(#[from] image::ImageError),
}

/// Result of pushing one frame to the sink. Never an `Err`: a degraded
/// show leaves stale content on the device and the loop keeps running.
#[must_use]
#[derive(Debug)]
pub enum ShowOutcome {
    Shown,
    Degraded(DisplayError),
}

/// Output device selected once at startup.
pub enum DisplaySink {
    /// Physical panel behind a vendor driver.
    Panel {
        driver: Box<dyn PanelDriver>,
        /// Pause after each refresh; the controller needs settle time.
        settle: Duration,
    },
    /// No panel available: write each frame as a PNG.
    Preview { path: PathBuf },
}

impl DisplaySink {
    /// One-time capability check. No panel backend is compiled into this
    /// crate, so this always lands in preview mode, the same way the
    /// original falls back when the vendor library is not importable.
    pub fn detect() -> Self {
        info!(path = PREVIEW_PATH, "no panel driver available, using image preview mode");
        Self::preview(PREVIEW_PATH)
    }

    /// Panel-mode sink. Initializes and clears the panel best-effort, the
    /// way the device is prepared at startup. `settle` is the pause after
    /// each refresh, normally [`PANEL_SETTLE`](crate::config::PANEL_SETTLE).
    pub fn panel(mut driver: Box<dyn PanelDriver>, settle: Duration) -> Self {
        info!("initializing e-paper panel");
        if let Err(err) = driver.init().and_then(|()| driver.clear(0xFF)) {
            warn!(error = %err, "panel init failed, continuing degraded");
        }
        Self::Panel { driver, settle }
    }

    /// Preview-mode sink writing PNGs to `path`.
    pub fn preview(path: impl Into<PathBuf>) -> Self {
        Self::Preview { path: path.into() }
    }

    /// Push one frame to the device. Internal failures are returned as a
    /// degraded outcome for the caller to log; they are never fatal.
    pub fn show(&mut self, frame: &Frame) -> ShowOutcome {
        match self {
            Self::Panel { driver, settle } => match driver.display(frame.data()) {
                Ok(()) => {
                    thread::sleep(*settle);
                    ShowOutcome::Shown
                }
                Err(err) => ShowOutcome::Degraded(err.into()),
            },
            Self::Preview { path } => match write_preview(frame, path) {
                Ok(()) => {
                    debug!(path = %path.display(), "preview frame written");
                    ShowOutcome::Shown
                }
                Err(err) => ShowOutcome::Degraded(err.into()),
            },
        }
    }

    /// Best-effort teardown on shutdown: wake the panel, clear it to white,
    /// and put it to sleep. Every error is logged and swallowed; preview
    /// mode has nothing to clean up.
    pub fn shutdown(&mut self) {
        let Self::Panel { driver, .. } = self else {
            return;
        };
        info!("clearing panel before exit");
        if let Err(err) = driver.init() {
            warn!(error = %err, "panel re-init failed during shutdown");
        }
        if let Err(err) = driver.clear(0xFF) {
            warn!(error = %err, "panel clear failed during shutdown");
        }
        info!("putting panel to sleep");
        if let Err(err) = driver.sleep() {
            warn!(error = %err, "panel sleep failed during shutdown");
        }
    }
}

/// Expand the packed 1bpp frame into a grayscale PNG at `path`,
/// overwriting any previous preview.
fn write_preview(frame: &Frame, path: &Path) -> Result<(), image::ImageError> {
    let img = GrayImage::from_fn(DISPLAY_WIDTH, DISPLAY_HEIGHT, |x, y| {
        if frame.pixel(Point::new(x as i32, y as i32)) == Some(INK) {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    });
    img.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::blank_frame;
    use crate::screens::draw_updating_frame;

    use std::sync::{Arc, Mutex};

    /// Scripted panel driver recording calls and failing on demand. The
    /// call log is shared so tests can inspect it after handing the driver
    /// to the sink.
    #[derive(Default)]
    struct MockPanel {
        calls: Arc<Mutex<Vec<&'static str>>>,
        fail_ops: Vec<&'static str>,
    }

    impl MockPanel {
        fn with_log() -> (Self, Arc<Mutex<Vec<&'static str>>>) {
            let panel = Self::default();
            let log = Arc::clone(&panel.calls);
            (panel, log)
        }

        fn failing(ops: &[&'static str]) -> (Self, Arc<Mutex<Vec<&'static str>>>) {
            let (mut panel, log) = Self::with_log();
            panel.fail_ops = ops.to_vec();
            (panel, log)
        }

        fn call(&mut self, op: &'static str) -> Result<(), PanelError> {
            self.calls.lock().unwrap().push(op);
            if self.fail_ops.contains(&op) {
                Err(PanelError::new(op, "injected failure"))
            } else {
                Ok(())
            }
        }
    }

    impl PanelDriver for MockPanel {
        fn init(&mut self) -> Result<(), PanelError> {
            self.call("init")
        }
        fn clear(&mut self, _fill: u8) -> Result<(), PanelError> {
            self.call("clear")
        }
        fn display(&mut self, buffer: &[u8]) -> Result<(), PanelError> {
            assert_eq!(buffer.len(), crate::render::FRAME_BYTES);
            self.call("display")
        }
        fn sleep(&mut self) -> Result<(), PanelError> {
            self.call("sleep")
        }
    }

    #[test]
    fn test_panel_show_pushes_buffer() {
        let (panel, log) = MockPanel::with_log();
        let mut sink = DisplaySink::panel(Box::new(panel), Duration::ZERO);
        let outcome = sink.show(&blank_frame());
        assert!(matches!(outcome, ShowOutcome::Shown));
        assert_eq!(*log.lock().unwrap(), ["init", "clear", "display"]);
    }

    #[test]
    fn test_panel_display_failure_is_degraded_not_fatal() {
        let (panel, _log) = MockPanel::failing(&["display"]);
        let mut sink = DisplaySink::panel(Box::new(panel), Duration::ZERO);
        let outcome = sink.show(&blank_frame());
        assert!(matches!(outcome, ShowOutcome::Degraded(DisplayError::Panel(_))));
        // The sink stays usable for the next cycle.
        let again = sink.show(&blank_frame());
        assert!(matches!(again, ShowOutcome::Degraded(_)));
    }

    #[test]
    fn test_shutdown_clears_and_sleeps_panel() {
        let (panel, log) = MockPanel::with_log();
        let mut sink = DisplaySink::panel(Box::new(panel), Duration::ZERO);
        sink.shutdown();
        assert_eq!(*log.lock().unwrap(), ["init", "clear", "init", "clear", "sleep"]);
    }

    #[test]
    fn test_shutdown_swallows_driver_errors() {
        let (panel, log) = MockPanel::failing(&["init", "clear", "sleep"]);
        let mut sink = DisplaySink::panel(Box::new(panel), Duration::ZERO);
        // Must not panic; all three teardown steps are still attempted.
        // (Constructor init also failed, so its clear was skipped.)
        sink.shutdown();
        assert_eq!(log.lock().unwrap()[1..], ["init", "clear", "sleep"]);
    }

    #[test]
    fn test_preview_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pihole-display.png");
        let mut sink = DisplaySink::preview(&path);
        let outcome = sink.show(&draw_updating_frame(0));
        assert!(matches!(outcome, ShowOutcome::Shown));

        let img = image::open(&path).unwrap().to_luma8();
        assert_eq!(img.dimensions(), (DISPLAY_WIDTH, DISPLAY_HEIGHT));
        // The frame has ink, so the PNG must contain black pixels.
        assert!(img.pixels().any(|p| p.0[0] == 0));
        assert!(img.pixels().any(|p| p.0[0] == 255));
    }

    #[test]
    fn test_preview_overwrites_previous_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pihole-display.png");
        let mut sink = DisplaySink::preview(&path);
        let _ = sink.show(&draw_updating_frame(0));
        let first = std::fs::read(&path).unwrap();
        let _ = sink.show(&draw_updating_frame(1));
        let second = std::fs::read(&path).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_preview_unwritable_path_is_degraded() {
        let mut sink = DisplaySink::preview("/nonexistent-dir/pihole-display.png");
        let outcome = sink.show(&blank_frame());
        assert!(matches!(outcome, ShowOutcome::Degraded(DisplayError::Preview(_))));
    }

    #[test]
    fn test_detect_selects_preview_mode() {
        let sink = DisplaySink::detect();
        assert!(matches!(sink, DisplaySink::Preview { .. }));
    }
}
