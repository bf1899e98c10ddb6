// src/grid/mod.rs

//! The animation model: a fixed-size 2D grid of colored cells and the
//! probabilistic transformations applied to it.
//!
//! The grid is created once from the terminal dimensions, filled once, and
//! then mutated in place by repeated fade passes until no red cells remain.
//! All randomness comes from a `rand::Rng` supplied by the caller, so tests
//! can drive the transformations with a seeded generator.

use anyhow::{bail, Result};
use log::trace;
use rand::Rng;


/// The state of a single grid cell.
///
/// `Empty` cells are never revisited after the fill pass, and `Yellow` is
/// absorbing: the only transition the animation performs afterwards is
/// `Red -> Yellow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Nothing drawn at this position.
    #[default]
    Empty,
    /// A faded ember, drawn as a yellow `x`.
    Yellow,
    /// A live ember, drawn as a red `o`.
    Red,
}

/// A fixed-size 2D grid of [`Cell`]s stored row-major.
///
/// Dimensions are set at creation and never change; terminal resizes during
/// the run are deliberately not handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a `rows x cols` grid with every cell [`Cell::Empty`].
    ///
    /// A zero dimension is rejected: a grid with nothing to animate is a
    /// startup error for the caller to surface, not a valid value.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            bail!(
                "degenerate grid dimensions {}x{}: nothing to animate",
                rows,
                cols
            );
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// Sets the cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col] = cell;
    }

    /// Iterates over the grid one row at a time, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// Re-rolls every cell: with probability `density` the cell becomes
    /// colored (then `Yellow` or `Red` with equal odds), otherwise it is
    /// left `Empty`.
    ///
    /// `density` outside `[0.0, 1.0]` is clamped. Intended as a one-time
    /// initialization pass; calling it again re-randomizes already-colored
    /// cells with the same odds.
    pub fn fill<R: Rng>(&mut self, density: f64, rng: &mut R) {
        let density = density.clamp(0.0, 1.0);
        for cell in &mut self.cells {
            *cell = if rng.gen_bool(density) {
                if rng.gen_bool(0.5) {
                    Cell::Red
                } else {
                    Cell::Yellow
                }
            } else {
                Cell::Empty
            };
        }
        trace!(
            "fill: density={}, {} red cells after pass",
            density,
            self.red_count()
        );
    }

    /// One fade pass: every `Red` cell independently turns `Yellow` with
    /// probability `fade_chance`; `Yellow` and `Empty` cells are untouched.
    ///
    /// `fade_chance` outside `[0.0, 1.0]` is clamped. Each cell's decision
    /// is independent of all others and of prior passes, so for any
    /// `fade_chance > 0` repeated passes drive the red count to zero with
    /// probability 1.
    pub fn fade<R: Rng>(&mut self, fade_chance: f64, rng: &mut R) {
        let fade_chance = fade_chance.clamp(0.0, 1.0);
        for cell in &mut self.cells {
            if *cell == Cell::Red && rng.gen_bool(fade_chance) {
                *cell = Cell::Yellow;
            }
        }
        trace!(
            "fade: chance={}, {} red cells remain",
            fade_chance,
            self.red_count()
        );
    }

    /// True iff at least one cell is `Red`. Pure query, no side effect.
    pub fn any_red(&self) -> bool {
        self.cells.iter().any(|c| *c == Cell::Red)
    }

    /// Number of `Red` cells currently on the grid.
    pub fn red_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Red).count()
    }
}
