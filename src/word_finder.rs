//! Locating words across every search orientation of a grid.
//!
//! # Error Handling
//!
//! Construction uses [`WordFinderError`]:
//!
//! - W001: `EmptyOrientations` (No orientations to search)
//!
//! A word that cannot be found is not an error: the result is an empty
//! [`CoordinateList`] carrying the caller's not-found message.
//!
//! # Examples
//!
//! ```
//! use wordsearch::grid::GridManager;
//! use wordsearch::word_finder::WordFinder;
//!
//! let rows = ["ABC", "DEF", "GHI"]
//!     .iter()
//!     .map(|row| row.chars().map(String::from).collect())
//!     .collect();
//! let grid = GridManager::new(rows)?;
//! let finder = WordFinder::for_grid(&grid);
//!
//! let found = finder.get_coordinates_of_search_target("gda", "not here");
//! assert_eq!(found.to_string(), "(0,2),(0,1),(0,0)");
//!
//! let missing = finder.get_coordinates_of_search_target("CDE", "not here");
//! assert_eq!(missing.to_string(), "not here");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::coordinates::{Coordinate, CoordinateList};
use crate::errors::format_error_with_code_and_help;
use crate::grid::GridManager;
use crate::search_orientation::{SearchOrientation, SearchOrientationManager};
use log::{debug, warn};
use std::collections::HashSet;

/// Placeholder replaced by the word in a not-found template.
pub const WORD_PLACEHOLDER: &str = "{word}";

/// Default not-found template used when solving a whole puzzle.
pub const DEFAULT_NOT_FOUND_TEMPLATE: &str = "Did not find {word} in puzzle.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordFinderError {
    #[error("searchOrientations list is empty.")]
    EmptyOrientations,
}

impl WordFinderError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            WordFinderError::EmptyOrientations => "W001",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            WordFinderError::EmptyOrientations => "No orientations to search",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            WordFinderError::EmptyOrientations => "A word finder needs at least one search orientation; with none, no word could ever be found.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            WordFinderError::EmptyOrientations => Some("Build orientations with SearchOrientationManager, or use WordFinder::for_grid"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

#[derive(Debug, Clone)]
pub struct WordFinder {
    search_orientations: Vec<SearchOrientation>,
}

impl WordFinder {
    /// # Errors
    ///
    /// Returns [`WordFinderError::EmptyOrientations`] if `search_orientations` is empty.
    pub fn new(search_orientations: Vec<SearchOrientation>) -> Result<WordFinder, WordFinderError> {
        if search_orientations.is_empty() {
            return Err(WordFinderError::EmptyOrientations);
        }
        Ok(WordFinder { search_orientations })
    }

    /// A finder over all orientations of `grid`.
    #[must_use]
    pub fn for_grid(grid: &GridManager) -> WordFinder {
        WordFinder {
            search_orientations: SearchOrientationManager::new().get_search_orientations(grid),
        }
    }

    #[must_use]
    pub fn search_orientations(&self) -> &[SearchOrientation] {
        &self.search_orientations
    }

    /// Coordinates from the first orientation (in order) that contains `target`,
    /// or an empty list carrying `not_found_message`.
    #[must_use]
    pub fn get_coordinates_of_search_target(&self, target: &str, not_found_message: &str) -> CoordinateList {
        let found = self
            .search_orientations
            .iter()
            .enumerate()
            .find_map(|(i, orientation)| {
                let coordinates = orientation.get_coordinates_of_search_target(target)?;
                debug!("\"{target}\" found by orientation {i}");
                Some(coordinates)
            });

        found.unwrap_or_else(|| CoordinateList::not_found(not_found_message))
    }

    /// Locate every word in `words`, in order.
    ///
    /// Blank entries are skipped. Each missing word carries
    /// `not_found_template` with [`WORD_PLACEHOLDER`] replaced by the word.
    #[must_use]
    pub fn solve<S: AsRef<str>>(&self, words: &[S], not_found_template: &str) -> PuzzleSolution {
        let results = words
            .iter()
            .map(|w| w.as_ref().trim())
            .filter(|w| !w.is_empty())
            .map(|word| {
                let message = not_found_template.replace(WORD_PLACEHOLDER, word);
                let coordinates = self.get_coordinates_of_search_target(word, &message);
                if coordinates.is_empty() {
                    warn!("{message}");
                }
                WordResult { word: word.to_string(), coordinates }
            })
            .collect();

        PuzzleSolution { results }
    }
}

/// Outcome for one requested word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordResult {
    pub word: String,
    pub coordinates: CoordinateList,
}

impl WordResult {
    #[must_use]
    pub fn is_found(&self) -> bool {
        !self.coordinates.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSolution {
    pub results: Vec<WordResult>,
}

impl PuzzleSolution {
    /// Union of every found coordinate, without duplicates, in first-seen order.
    #[must_use]
    pub fn highlighted(&self) -> Vec<Coordinate> {
        let mut seen = HashSet::new();
        self.results
            .iter()
            .flat_map(|r| r.coordinates.iter().copied())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_found()).count()
    }
}
