//! Grid-to-linear traversals.
//!
//! Each [`Traversal`] reads the grid along one axis, line by line, and
//! flattens it into a [`LinearView`]. Only one reading direction per axis is
//! produced here; the view's derived reverse supplies the other.
//!
//! | Traversal      | Lines                 | Line order                                        |
//! |----------------|-----------------------|---------------------------------------------------|
//! | `Horizontal`   | rows, left → right    | top row first                                     |
//! | `Vertical`     | columns, top → bottom | left column first                                 |
//! | `DiagonalNwSe` | ↘ diagonals           | top-right corner inward along the top edge, then down the left edge  |
//! | `DiagonalNeSw` | ↙ diagonals           | top-left corner inward along the top edge, then down the right edge  |
//!
//! For `ABC|DEF|GHI` the four values are `ABC|DEF|GHI`, `ADG|BEH|CFI`,
//! `C|BF|AEI|DH|G` and `A|BD|CEG|FH|I`.

use crate::coordinates::Coordinate;
use crate::grid::GridManager;
use crate::grid_char::BOUNDARY_DELIMITER;
use crate::linear_view::LinearView;
use log::debug;
use std::fmt;

/// The closed set of axes a word can be read along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right.
    DiagonalNwSe,
    /// Top-right to bottom-left.
    DiagonalNeSw,
}

/// Every traversal, in the order the word finder tries them.
pub const ALL_TRAVERSALS: [Traversal; 4] = [
    Traversal::Horizontal,
    Traversal::Vertical,
    Traversal::DiagonalNwSe,
    Traversal::DiagonalNeSw,
];

impl Traversal {
    /// Flatten `grid` along this axis.
    #[must_use]
    pub fn to_linear_view(self, grid: &GridManager) -> LinearView {
        let lines = match self {
            Traversal::Horizontal => horizontal_lines(grid.size()),
            Traversal::Vertical => vertical_lines(grid.size()),
            Traversal::DiagonalNwSe => diagonal_nw_se_lines(grid.size()),
            Traversal::DiagonalNeSw => diagonal_ne_sw_lines(grid.size()),
        };
        let view = join_lines(grid, &lines);
        debug!("{self} traversal: {}", view.value());
        view
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Traversal::Horizontal => "horizontal",
            Traversal::Vertical => "vertical",
            Traversal::DiagonalNwSe => "diagonal NW-SE",
            Traversal::DiagonalNeSw => "diagonal NE-SW",
        };
        write!(f, "{s}")
    }
}

fn horizontal_lines(n: usize) -> Vec<Vec<Coordinate>> {
    (0..n)
        .map(|row| (0..n).map(|column| Coordinate::new(column, row)).collect())
        .collect()
}

fn vertical_lines(n: usize) -> Vec<Vec<Coordinate>> {
    (0..n)
        .map(|column| (0..n).map(|row| Coordinate::new(column, row)).collect())
        .collect()
}

// Starts run from the top-right corner leftwards along the top edge, then down
// the left edge. Each diagonal steps one column right and one row down.
fn diagonal_nw_se_lines(n: usize) -> Vec<Vec<Coordinate>> {
    let top_edge = (0..n).rev().map(|column| Coordinate::new(column, 0));
    let left_edge = (1..n).map(|row| Coordinate::new(0, row));

    top_edge
        .chain(left_edge)
        .map(|start| {
            // cells left before hitting the right or bottom edge
            let length = n - start.column.max(start.row);
            (0..length)
                .map(|k| Coordinate::new(start.column + k, start.row + k))
                .collect()
        })
        .collect()
}

// Starts run from the top-left corner rightwards along the top edge, then down
// the right edge. Each diagonal steps one column left and one row down.
fn diagonal_ne_sw_lines(n: usize) -> Vec<Vec<Coordinate>> {
    let top_edge = (0..n).map(|column| Coordinate::new(column, 0));
    let right_edge = (1..n).map(|row| Coordinate::new(n - 1, row));

    top_edge
        .chain(right_edge)
        .map(|start| {
            let length = (start.column + 1).min(n - start.row);
            (0..length)
                .map(|k| Coordinate::new(start.column - k, start.row + k))
                .collect()
        })
        .collect()
}

/// Concatenate lines with exactly one delimiter between consecutive lines.
/// Delimiters take a string position but never a coordinate slot.
fn join_lines(grid: &GridManager, lines: &[Vec<Coordinate>]) -> LinearView {
    let n = grid.size();
    let mut value = String::with_capacity(n * n + lines.len());
    let mut index_to_grid_position = Vec::with_capacity(n * n);

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            value.push(BOUNDARY_DELIMITER);
        }
        for &coordinate in line {
            if let Some(c) = grid.cell(coordinate) {
                value.push(c.to_ascii_uppercase());
                index_to_grid_position.push(coordinate);
            }
        }
    }

    LinearView::from_validated_grid(value, index_to_grid_position)
}
