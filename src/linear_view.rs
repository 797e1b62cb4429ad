//! `linear_view`: a grid flattened along one axis.
//!
//! A `LinearView` holds the grid read line by line along a single axis, with
//! consecutive lines joined by [`BOUNDARY_DELIMITER`]. Alongside the string it
//! keeps the coordinate of every non-delimiter character: the n-th cell
//! character of `value` came from `index_to_grid_position[n]`.
//!
//! The opposite reading direction comes for free: on construction the view
//! derives `reversed_value` (the character reverse of `value`) and
//! `reversed_index_to_grid_position`, where
//! `reversed[len - 1 - i] == forward[i]` for every cell index `i`.
//!
//! [`BOUNDARY_DELIMITER`]: crate::grid_char::BOUNDARY_DELIMITER

use crate::coordinates::Coordinate;
use crate::errors::LinearViewError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearView {
    value: String,
    index_to_grid_position: Vec<Coordinate>,
    reversed_value: String,
    reversed_index_to_grid_position: Vec<Coordinate>,
}

impl LinearView {
    /// Build a view and derive its reverse.
    ///
    /// # Errors
    ///
    /// Returns [`LinearViewError::EmptyValue`] if `value` is empty, or
    /// [`LinearViewError::EmptyIndexMap`] if no coordinates were supplied.
    pub fn new(
        value: impl Into<String>,
        index_to_grid_position: Vec<Coordinate>,
    ) -> Result<LinearView, LinearViewError> {
        let value = value.into();

        if value.is_empty() {
            return Err(LinearViewError::EmptyValue);
        }
        if index_to_grid_position.is_empty() {
            return Err(LinearViewError::EmptyIndexMap);
        }

        Ok(LinearView::from_validated_grid(value, index_to_grid_position))
    }

    // Traversals of a validated grid always yield at least one cell.
    pub(crate) fn from_validated_grid(value: String, index_to_grid_position: Vec<Coordinate>) -> LinearView {
        let reversed_value: String = value.chars().rev().collect();
        let reversed_index_to_grid_position: Vec<Coordinate> =
            index_to_grid_position.iter().rev().copied().collect();

        LinearView {
            value,
            index_to_grid_position,
            reversed_value,
            reversed_index_to_grid_position,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn index_to_grid_position(&self) -> &[Coordinate] {
        &self.index_to_grid_position
    }

    #[must_use]
    pub fn reversed_value(&self) -> &str {
        &self.reversed_value
    }

    #[must_use]
    pub fn reversed_index_to_grid_position(&self) -> &[Coordinate] {
        &self.reversed_index_to_grid_position
    }
}
