// src/renderer/tests.rs

// --- Unit Tests ---
use super::*;
use crate::grid::{Cell, Grid};
use test_log::test; // For logging within tests

/// Helper: a 1-row grid with the given cells, in order.
fn row_grid(cells: &[Cell]) -> Grid {
    let mut grid = Grid::new(1, cells.len()).expect("test dimensions are valid");
    for (col, cell) in cells.iter().enumerate() {
        grid.set_cell(0, col, *cell);
    }
    grid
}

#[test]
fn frame_starts_by_clearing_the_screen() {
    let grid = Grid::new(2, 2).unwrap();
    let frame = build_frame(&grid, None);
    assert!(
        frame.starts_with("\x1b[2J\x1b[H"),
        "every frame must clear the screen and home the cursor first"
    );
}

#[test]
fn empty_cells_render_as_plain_spaces() {
    let grid = Grid::new(2, 3).unwrap();
    let frame = build_frame(&grid, None);
    assert_eq!(
        frame,
        format!("\x1b[2J\x1b[H{}", " ".repeat(6)),
        "an all-Empty grid is six spaces with no SGR sequences"
    );
}

#[test]
fn colored_cells_use_the_fixed_glyph_mapping() {
    let grid = row_grid(&[Cell::Red, Cell::Empty, Cell::Yellow]);
    let frame = build_frame(&grid, None);
    assert_eq!(
        frame, "\x1b[2J\x1b[H\x1b[31mo\x1b[0m \x1b[33mx\x1b[0m",
        "Red is a red 'o', Empty a space, Yellow a yellow 'x', in grid order"
    );
}

#[test]
fn prompt_is_appended_after_the_cells_when_present() {
    let grid = row_grid(&[Cell::Yellow]);
    let with_prompt = build_frame(&grid, Some("Press enter to fade"));
    assert!(
        with_prompt.ends_with("Press enter to fade"),
        "status line must follow the last cell"
    );
    let without_prompt = build_frame(&grid, None);
    assert!(
        !without_prompt.contains("Press enter to fade"),
        "the final frame omits the status line"
    );
    assert!(
        with_prompt.starts_with(&without_prompt),
        "the prompt must be the only difference between the two frames"
    );
}

#[test]
fn frame_emits_one_glyph_per_cell() {
    let mut grid = Grid::new(3, 4).unwrap();
    grid.set_cell(1, 2, Cell::Red);
    let frame = build_frame(&grid, None);
    // Strip the escape sequences; what remains is one printable glyph per cell.
    let stripped = frame
        .replace("\x1b[2J\x1b[H", "")
        .replace("\x1b[31m", "")
        .replace("\x1b[33m", "")
        .replace("\x1b[0m", "");
    assert_eq!(stripped.chars().count(), 12, "3x4 grid should produce 12 glyphs");
    assert_eq!(stripped.chars().filter(|c| *c == 'o').count(), 1);
}
