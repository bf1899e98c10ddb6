// src/main.rs

// Declare modules
pub mod config;
pub mod grid;
pub mod orchestrator;
pub mod platform;
pub mod renderer;

use crate::config::CONFIG;
use crate::platform::Platform; // Trait needed for platform methods

use anyhow::Context;
use log::info;

/// Main entry point for the `embers` toy.
///
/// Fills the terminal with colored embers, then fades the red ones to yellow
/// each time the user presses enter, until none remain. The two failure modes
/// are both at startup: the terminal size cannot be determined, or the
/// terminal leaves no room for the grid once the status line is reserved.
/// Either one exits with a clear message and non-zero status.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting embers...");

    let mut platform =
        platform::default_platform().context("Failed to initialize terminal platform")?;
    let mut rng = rand::thread_rng();

    // Keep the run result aside so the terminal is restored either way.
    let result = orchestrator::run(platform.as_mut(), &CONFIG, &mut rng);

    platform
        .cleanup()
        .context("Failed to restore terminal state")?;
    result?;

    info!("embers exited successfully.");
    Ok(())
}
