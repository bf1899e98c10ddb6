// src/orchestrator/mod.rs

//! Drives the animation from start to finish.
//!
//! Sizes the grid from the platform's terminal snapshot (reserving one row
//! for the status line), runs the one-time fill pass, then alternates
//! render / wait-for-step / fade until no red cells remain, and finally draws
//! one last frame without the prompt. For any fade chance above zero the loop
//! terminates with probability 1, since red cells only ever leave the red
//! state.

use crate::config::Config;
use crate::grid::Grid;
use crate::platform::Platform;
use crate::renderer;

use anyhow::{Context, Result};
use log::{debug, info};
use rand::Rng;


/// Rows reserved under the grid for the status line.
const STATUS_LINE_ROWS: usize = 1;

/// Runs the whole animation against the given platform.
///
/// The random generator is owned by the caller so the entire run can be
/// driven deterministically in tests. Fails fatally when the terminal leaves
/// no room for the grid after the status line is reserved.
pub fn run<R: Rng>(platform: &mut dyn Platform, config: &Config, rng: &mut R) -> Result<()> {
    let dims = platform.dimensions();
    info!("Animating a {}x{} cell terminal.", dims.cols, dims.rows);

    let grid_rows = dims.rows.saturating_sub(STATUS_LINE_ROWS);
    let mut grid =
        Grid::new(grid_rows, dims.cols).context("Terminal leaves no room for the grid")?;

    grid.fill(config.animation.density, rng);
    info!("Fill pass complete: {} red cells.", grid.red_count());

    let mut passes = 0usize;
    while grid.any_red() {
        let frame = renderer::build_frame(&grid, Some(&config.ui.prompt));
        platform.render(&frame)?;
        platform.wait_for_step()?;
        grid.fade(config.animation.fade_chance, rng);
        passes += 1;
        debug!("Fade pass {}: {} red cells remain.", passes, grid.red_count());
    }

    // One last frame, without the prompt.
    platform.render(&renderer::build_frame(&grid, None))?;
    info!("All embers faded after {} passes.", passes);
    Ok(())
}
