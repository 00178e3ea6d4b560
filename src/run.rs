//! The update loop and cooperative shutdown.
//!
//! One thread, one cycle shape: fetch -> render -> show -> log -> sleep.
//! A failed fetch renders the offline screen and waits for the next cycle;
//! the next cycle is the retry, there is no extra backoff. The loop blocks
//! at exactly two points, the bounded fetch and the inter-cycle sleep, and
//! the sleep is interruptible so an interrupt signal ends the run promptly
//! instead of up to one full interval later.
//!
//! On shutdown the display sink runs its best-effort teardown (panel
//! clear and sleep) and the loop returns.

use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use chrono::Local;
use tracing::{info, warn};

use crate::display::{DisplaySink, ShowOutcome};
use crate::fetch::StatsSource;
use crate::render::Frame;
use crate::screens::{SPINNER_GLYPHS, draw_stats_screen, draw_updating_frame};

// =============================================================================
// Shutdown Handle
// =============================================================================

/// Cooperative shutdown flag with an interruptible sleep.
///
/// The ctrlc handler calls [`request`](Self::request) from the signal
/// thread; the loop observes it either at the top of a cycle or mid-sleep.
#[derive(Clone, Default)]
pub struct Shutdown {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown and wake any in-progress sleep.
    pub fn request(&self) {
        let (flag, wakeup) = &*self.inner;
        *flag.lock().unwrap_or_else(|e| e.into_inner()) = true;
        wakeup.notify_all();
    }

    pub fn is_requested(&self) -> bool {
        let (flag, _) = &*self.inner;
        *flag.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Sleep up to `duration`. Returns `true` if shutdown was requested
    /// before the time elapsed (the sleep wakes immediately on request).
    pub fn sleep(&self, duration: Duration) -> bool {
        let (flag, wakeup) = &*self.inner;
        let deadline = Instant::now() + duration;
        let mut requested = flag.lock().unwrap_or_else(|e| e.into_inner());
        while !*requested {
            let now = Instant::now();
            let Some(remaining) = deadline.checked_duration_since(now).filter(|d| !d.is_zero())
            else {
                return false;
            };
            let (guard, _timeout) = wakeup
                .wait_timeout(requested, remaining)
                .unwrap_or_else(|e| e.into_inner());
            requested = guard;
        }
        true
    }
}

// =============================================================================
// Frame Sink Seam
// =============================================================================

/// Where rendered frames go. Implemented by [`DisplaySink`]; tests use
/// recording sinks to observe the loop's output.
pub trait FrameSink {
    fn show(&mut self, frame: &Frame) -> ShowOutcome;
    /// Best-effort teardown when the loop exits.
    fn shutdown(&mut self);
}

impl FrameSink for DisplaySink {
    fn show(&mut self, frame: &Frame) -> ShowOutcome {
        DisplaySink::show(self, frame)
    }

    fn shutdown(&mut self) {
        DisplaySink::shutdown(self);
    }
}

// =============================================================================
// Update Loop
// =============================================================================

/// Run fetch/render/show cycles until shutdown is requested, then tear
/// down the sink. Degraded shows are logged and never break the loop.
pub fn run_loop<S, K>(source: &mut S, sink: &mut K, shutdown: &Shutdown, interval: Duration)
where
    S: StatsSource,
    K: FrameSink,
{
    while !shutdown.is_requested() {
        let stats = source.fetch();
        let frame = draw_stats_screen(stats.as_ref(), Local::now().time());

        if let ShowOutcome::Degraded(err) = sink.show(&frame) {
            warn!(error = %err, "display degraded, continuing with stale content");
        }

        match &stats {
            Some(stats) => info!(
                queries = stats.queries_today,
                blocked = stats.blocked_today,
                percent = stats.percent_blocked,
                "display updated"
            ),
            None => info!("pi-hole offline, showing offline screen"),
        }

        if shutdown.sleep(interval) {
            break;
        }
    }

    info!("shutting down");
    sink.shutdown();
}

/// Play one revolution of the "Updating" spinner through the sink,
/// spreading the ten frames over `duration`.
///
/// Not part of the default cycle; available for callers that want visual
/// feedback during a slow refresh.
pub fn play_updating_animation<K: FrameSink>(sink: &mut K, duration: Duration) {
    let frame_time = duration / SPINNER_GLYPHS.len() as u32;
    for index in 0..SPINNER_GLYPHS.len() {
        let frame = draw_updating_frame(index);
        if let ShowOutcome::Degraded(err) = sink.show(&frame) {
            warn!(error = %err, "display degraded during animation");
        }
        thread::sleep(frame_time);
    }
}
