//! `grid`: ownership and one-time validation of a puzzle grid.
//!
//! A `GridManager` can only be obtained through validation, so every
//! downstream traversal may assume a non-empty square grid of single
//! alphanumeric characters and never re-validates.
//!
//! Validation order matters because callers assert on the first failure:
//! 1. grid present
//! 2. at least one row and one column
//! 3. every row as long as the number of rows
//! 4. every cell exactly one character, then every cell in `[a-zA-Z0-9]`
//!    (cells are visited column by column, top to bottom)

use crate::coordinates::Coordinate;
use crate::errors::GridError;
use crate::grid_char::{GridChar, BOUNDARY_DELIMITER};
use log::debug;

/// Raw grid as produced by a loader: outer vector = rows, inner = cells.
pub type RawGrid = Vec<Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridManager {
    cells: Vec<Vec<char>>,
}

impl GridManager {
    /// Validate `rows` and take ownership of the grid.
    ///
    /// # Errors
    ///
    /// Returns the first [`GridError`] encountered, in the documented order.
    pub fn new(rows: RawGrid) -> Result<GridManager, GridError> {
        let cells = validate_grid(&rows)?;
        debug!("validated {n}x{n} grid", n = cells.len());
        Ok(GridManager { cells })
    }

    /// Like [`GridManager::new`], for callers whose grid may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NullGrid`] for `None`, otherwise as [`GridManager::new`].
    pub fn from_optional(rows: Option<RawGrid>) -> Result<GridManager, GridError> {
        rows.map_or(Err(GridError::NullGrid), GridManager::new)
    }

    /// Side length N of the N×N grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Character at `coordinate`, or `None` when outside the grid.
    #[must_use]
    pub fn cell(&self, coordinate: Coordinate) -> Option<char> {
        self.cells.get(coordinate.row)?.get(coordinate.column).copied()
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<char>] {
        &self.cells
    }
}

fn validate_grid(rows: &RawGrid) -> Result<Vec<Vec<char>>, GridError> {
    let rows_count = rows.len();
    let columns_count = rows.first().map_or(0, Vec::len);

    if rows_count == 0 || columns_count == 0 {
        return Err(GridError::EmptyGrid);
    }

    if rows.iter().any(|row| row.len() != rows_count) {
        return Err(GridError::NotSquare);
    }

    for column in 0..columns_count {
        for row in rows {
            let cell = &row[column];
            let mut chars = cell.chars();
            match (chars.next(), chars.next()) {
                (Some(_), Some(_)) => return Err(GridError::MultiCharacterCell),
                (Some(c), None) if c.is_cell_char() => {}
                _ => return Err(GridError::InvalidCharacter { cell: cell.clone() }),
            }
        }
    }

    let cells: Vec<Vec<char>> = rows
        .iter()
        .map(|row| row.iter().filter_map(|cell| cell.chars().next()).collect())
        .collect();
    debug_assert!(cells.iter().flatten().all(|c| *c != BOUNDARY_DELIMITER));

    Ok(cells)
}

#[cfg(test)]
pub(crate) fn grid_from_str(source: &str) -> RawGrid {
    source
        .split(BOUNDARY_DELIMITER)
        .map(|row| row.chars().map(String::from).collect())
        .collect()
}
