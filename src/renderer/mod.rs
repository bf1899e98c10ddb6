// src/renderer/mod.rs

//! Translates a [`Grid`] into a single ANSI frame string.
//!
//! Building a frame is kept separate from writing it: the platform backend
//! only prints and flushes what this module produces, so the glyph and color
//! mapping can be tested without a terminal. A frame clears the screen, homes
//! the cursor, then emits one glyph per cell in row-major order. The grid is
//! sized to the terminal width, so rows align through the terminal's own line
//! wrapping with exactly one row of glyphs per screen line.

use crate::grid::{Cell, Grid};

#[cfg(test)]
mod tests;

// --- ANSI Escape Code Constants ---
const CLEAR_SCREEN_AND_HOME: &str = "\x1b[2J\x1b[H"; // Clear entire screen and move cursor to home
const SGR_FG_YELLOW: &str = "\x1b[33m";
const SGR_FG_RED: &str = "\x1b[31m";
const SGR_RESET_ALL: &str = "\x1b[0m";

/// Glyph drawn for a faded ember.
const YELLOW_GLYPH: char = 'x';
/// Glyph drawn for a live ember.
const RED_GLYPH: char = 'o';

/// Builds one complete frame for the given grid.
///
/// When `prompt` is `Some`, the status line is appended after the last cell;
/// the final frame of the animation passes `None` to omit it.
pub fn build_frame(grid: &Grid, prompt: Option<&str>) -> String {
    // Rough capacity: a colored cell costs about ten bytes.
    let mut frame =
        String::with_capacity(CLEAR_SCREEN_AND_HOME.len() + grid.rows() * grid.cols() * 10);
    frame.push_str(CLEAR_SCREEN_AND_HOME);
    for row in grid.iter_rows() {
        for cell in row {
            push_cell(&mut frame, *cell);
        }
    }
    if let Some(prompt) = prompt {
        frame.push_str(prompt);
    }
    frame
}

/// Appends the glyph (and SGR color, if any) for a single cell.
fn push_cell(frame: &mut String, cell: Cell) {
    match cell {
        Cell::Empty => frame.push(' '),
        Cell::Yellow => {
            frame.push_str(SGR_FG_YELLOW);
            frame.push(YELLOW_GLYPH);
            frame.push_str(SGR_RESET_ALL);
        }
        Cell::Red => {
            frame.push_str(SGR_FG_RED);
            frame.push(RED_GLYPH);
            frame.push_str(SGR_RESET_ALL);
        }
    }
}
