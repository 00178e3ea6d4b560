//! Process entry point: logging, signal handling, sink detection, loop.

use color_eyre::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pihole_epd::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, PIHOLE_API_URL, UPDATE_INTERVAL};
use pihole_epd::display::DisplaySink;
use pihole_epd::fetch::HttpFetcher;
use pihole_epd::run::{Shutdown, run_loop};

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(
        endpoint = PIHOLE_API_URL,
        interval_secs = UPDATE_INTERVAL.as_secs(),
        width = DISPLAY_WIDTH,
        height = DISPLAY_HEIGHT,
        "pi-hole display starting"
    );

    let mut sink = DisplaySink::detect();
    let mut fetcher = HttpFetcher::new(PIHOLE_API_URL)?;

    let shutdown = Shutdown::new();
    let handler = shutdown.clone();
    ctrlc::set_handler(move || handler.request())?;

    run_loop(&mut fetcher, &mut sink, &shutdown, UPDATE_INTERVAL);
    Ok(())
}
