//! Plain-text rendering of a grid with highlighted cells.

use crate::coordinates::Coordinate;
use crate::grid::GridManager;
use std::collections::HashSet;
use std::fmt::Write;

/// Render `grid` one row per line, cells separated by a space. Highlighted
/// cells are wrapped in brackets; the rest are padded to the same width.
#[must_use]
pub fn render_grid(grid: &GridManager, highlights: &[Coordinate]) -> String {
    let highlights: HashSet<&Coordinate> = highlights.iter().collect();
    let mut out = String::with_capacity(grid.size() * (grid.size() * 4 + 1));

    for (row, cells) in grid.rows().iter().enumerate() {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(column, c)| {
                if highlights.contains(&Coordinate::new(column, row)) {
                    format!("[{c}]")
                } else {
                    format!(" {c} ")
                }
            })
            .collect();
        // writing to a String cannot fail
        let _ = writeln!(out, "{}", line.join(" ").trim_end());
    }

    out
}
