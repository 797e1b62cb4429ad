//! Per-axis search over a [`LinearView`].
//!
//! A [`SearchOrientation`] answers both reading directions of its axis: the
//! forward `value` first, then the derived `reversed_value`. Targets are
//! ASCII upper-cased before matching, so their character count never changes.
//!
//! Matching runs against the delimited string, so a target that would run off
//! the end of one line into the start of the next can never match. Once a
//! match is found the delimiters preceding it are discounted to recover the
//! coordinate index:
//!
//! ```text
//! value:  ABC|DEF|GHI      "DEF" matches at byte 4
//! before: "ABC|"           one delimiter  -> coordinate index 3
//! map:    [.., 3:(0,1), 4:(1,1), 5:(2,1), ..]
//! ```

use crate::coordinates::{Coordinate, CoordinateList};
use crate::errors::GridError;
use crate::grid::{GridManager, RawGrid};
use crate::grid_char::GridChar;
use crate::linear_view::LinearView;
use crate::traversal::{Traversal, ALL_TRAVERSALS};
use instant::Instant;
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOrientation {
    linear_view: LinearView,
}

impl SearchOrientation {
    /// Run `traversal` over `grid` once and keep the resulting view.
    #[must_use]
    pub fn from_traversal(grid: &GridManager, traversal: Traversal) -> Self {
        SearchOrientation { linear_view: traversal.to_linear_view(grid) }
    }

    #[must_use]
    pub fn from_linear_view(linear_view: LinearView) -> Self {
        SearchOrientation { linear_view }
    }

    #[must_use]
    pub fn linear_view(&self) -> &LinearView {
        &self.linear_view
    }

    /// Whether `target` (case-insensitive) reads along this axis in either direction.
    #[must_use]
    pub fn is_search_target_found(&self, target: &str) -> bool {
        if target.is_empty() {
            return false;
        }
        let target = target.to_ascii_uppercase();
        self.linear_view.value().contains(&target) || self.linear_view.reversed_value().contains(&target)
    }

    /// Coordinates of the first occurrence of `target`, one per character.
    ///
    /// The forward direction wins when the target reads both ways. Returns
    /// `None` for an empty target or when the target is absent.
    #[must_use]
    pub fn get_coordinates_of_search_target(&self, target: &str) -> Option<CoordinateList> {
        if target.is_empty() {
            return None;
        }
        let target = target.to_ascii_uppercase();
        let view = &self.linear_view;

        let (source, index_to_grid_position, match_index) = match view.value().find(&target) {
            Some(i) => (view.value(), view.index_to_grid_position(), i),
            None => {
                let i = view.reversed_value().find(&target)?;
                (view.reversed_value(), view.reversed_index_to_grid_position(), i)
            }
        };

        let start = source[..match_index].chars().filter(|c| !c.is_boundary()).count();
        let length = target.chars().count();

        let coordinates: Option<Vec<Coordinate>> = index_to_grid_position
            .get(start..start + length)
            .map(<[Coordinate]>::to_vec);
        if coordinates.is_none() {
            debug!("linear view maps fewer cells than its value holds; cannot place \"{target}\"");
        }

        coordinates.map(CoordinateList::new)
    }
}

/// Builds the searchable orientations for a grid: one bidirectional
/// orientation per [`Traversal`], in [`ALL_TRAVERSALS`] order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOrientationManager;

impl SearchOrientationManager {
    #[must_use]
    pub fn new() -> Self {
        SearchOrientationManager
    }

    #[must_use]
    pub fn get_search_orientations(&self, grid: &GridManager) -> Vec<SearchOrientation> {
        let t_build = Instant::now();
        let orientations: Vec<SearchOrientation> = ALL_TRAVERSALS
            .iter()
            .map(|&traversal| SearchOrientation::from_traversal(grid, traversal))
            .collect();
        debug!(
            "built {} search orientations for {n}x{n} grid in {:?}",
            orientations.len(),
            t_build.elapsed(),
            n = grid.size()
        );
        orientations
    }

    /// Validate `rows` first, then build the orientations.
    ///
    /// # Errors
    ///
    /// Returns the [`GridError`] raised by validation.
    pub fn get_search_orientations_for_rows(&self, rows: RawGrid) -> Result<Vec<SearchOrientation>, GridError> {
        let grid = GridManager::new(rows)?;
        Ok(self.get_search_orientations(&grid))
    }
}
