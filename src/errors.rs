//! Error types for grid validation and linear-view construction, with error codes and help.
//!
//! # Error Codes
//!
//! Each variant has a unique code for documentation lookup:
//!
//! - G001: `NullGrid` (No grid was supplied)
//! - G002: `EmptyGrid` (Zero rows and/or columns)
//! - G003: `NotSquare` (Row count differs from column count)
//! - G004: `MultiCharacterCell` (A cell holds more than one character)
//! - G005: `InvalidCharacter` (A cell holds a character outside `[a-zA-Z0-9]`)
//! - L001: `EmptyValue` (Linear view built from an empty string)
//! - L002: `EmptyIndexMap` (Linear view built without any coordinates)
//!
//! # Examples
//!
//! ```
//! use wordsearch::errors::GridError;
//! use wordsearch::grid::GridManager;
//!
//! let rows = vec![vec!["A".to_string(), "B".to_string()]];
//! match GridManager::new(rows) {
//!     Err(e) => {
//!         assert_eq!(e, GridError::NotSquare);
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

/// Failures raised while validating a grid. None are recoverable: the grid is
/// unusable until corrected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid is null.")]
    NullGrid,

    #[error("grid has zero rows and/or columns.")]
    EmptyGrid,

    #[error("grid has a mismatch between the number of rows and columns.")]
    NotSquare,

    #[error("grid has more than one character in at least one coordinate.")]
    MultiCharacterCell,

    #[error("grid is not valid - at least one element is an invalid character: {cell}")]
    InvalidCharacter { cell: String },
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::NullGrid => "G001",
            GridError::EmptyGrid => "G002",
            GridError::NotSquare => "G003",
            GridError::MultiCharacterCell => "G004",
            GridError::InvalidCharacter { .. } => "G005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridError::NullGrid => "No grid was supplied",
            GridError::EmptyGrid => "Grid has zero rows and/or columns",
            GridError::NotSquare => "Grid is not square",
            GridError::MultiCharacterCell => "Grid cell holds more than one character",
            GridError::InvalidCharacter { .. } => "Grid cell holds an invalid character",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GridError::NullGrid => "The puzzle description contained search words but no grid rows, or the caller passed no grid at all.",
            GridError::EmptyGrid => "A grid needs at least one row and one column before it can be searched.",
            GridError::NotSquare => "Only N×N grids are supported. Every row must contain exactly as many cells as there are rows.",
            GridError::MultiCharacterCell => "Each grid coordinate holds exactly one letter or digit. Multi-character cells are not supported.",
            GridError::InvalidCharacter { .. } => "Grid cells may only contain ASCII letters and digits. The '|' character is reserved as the line delimiter.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::NullGrid => Some("Add comma-separated grid rows after the search word line (e.g., 'A,B,C')"),
            GridError::NotSquare => Some("Make the number of cells in every row equal to the number of rows"),
            GridError::MultiCharacterCell => Some("Separate every letter with a comma (e.g., 'C,A,T' rather than 'CAT')"),
            GridError::InvalidCharacter { .. } => Some("Use only a-z, A-Z and 0-9 in grid cells"),
            GridError::EmptyGrid => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Failures raised when a `LinearView` is built from inconsistent parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinearViewError {
    #[error("value parameter is empty or null.")]
    EmptyValue,

    #[error("indexToGridPosition parameter has a count of zero.")]
    EmptyIndexMap,
}

impl LinearViewError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LinearViewError::EmptyValue => "L001",
            LinearViewError::EmptyIndexMap => "L002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            LinearViewError::EmptyValue => "Linear view string is empty",
            LinearViewError::EmptyIndexMap => "Linear view has no coordinates",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            LinearViewError::EmptyValue => "A linear view flattens at least one grid cell, so its string can never be empty.",
            LinearViewError::EmptyIndexMap => "Every non-delimiter character of a linear view must map back to a grid coordinate.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LinearViewError::EmptyValue => Some("Build linear views from a validated grid via a traversal"),
            LinearViewError::EmptyIndexMap => Some("Supply one coordinate per non-delimiter character of the value"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_grid_errors() -> Vec<GridError> {
        vec![
            GridError::NullGrid,
            GridError::EmptyGrid,
            GridError::NotSquare,
            GridError::MultiCharacterCell,
            GridError::InvalidCharacter { cell: "#".to_string() },
        ]
    }

    #[test]
    fn test_grid_error_messages() {
        assert_eq!(GridError::NullGrid.to_string(), "grid is null.");
        assert_eq!(GridError::EmptyGrid.to_string(), "grid has zero rows and/or columns.");
        assert_eq!(
            GridError::NotSquare.to_string(),
            "grid has a mismatch between the number of rows and columns."
        );
        assert_eq!(
            GridError::MultiCharacterCell.to_string(),
            "grid has more than one character in at least one coordinate."
        );
        assert_eq!(
            GridError::InvalidCharacter { cell: "$".to_string() }.to_string(),
            "grid is not valid - at least one element is an invalid character: $"
        );
    }

    #[test]
    fn test_linear_view_error_messages() {
        assert_eq!(LinearViewError::EmptyValue.to_string(), "value parameter is empty or null.");
        assert_eq!(
            LinearViewError::EmptyIndexMap.to_string(),
            "indexToGridPosition parameter has a count of zero."
        );
    }

    /// Test that all error variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        for err in all_grid_errors() {
            assert!(codes.insert(err.code()), "Duplicate error code found: {}", err.code());
        }
        for err in [LinearViewError::EmptyValue, LinearViewError::EmptyIndexMap] {
            assert!(codes.insert(err.code()), "Duplicate error code found: {}", err.code());
        }

        assert_eq!(codes.len(), 7);
    }

    #[test]
    fn test_error_code_format() {
        for err in all_grid_errors() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (G0XX)", code);
            assert!(code.starts_with("G0"));
            assert!(code[1..].parse::<u16>().is_ok());
        }
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        let err = GridError::NotSquare;
        let detailed = err.display_detailed();

        assert!(detailed.contains("G003"));
        assert!(detailed.contains(&err.to_string()));
        assert!(detailed.contains("every row"));
    }

    #[test]
    fn test_display_detailed_without_help() {
        let err = GridError::EmptyGrid;
        assert_eq!(err.display_detailed(), "grid has zero rows and/or columns. (G002)");
    }

    #[test]
    fn test_help_text_differs_from_message() {
        for err in all_grid_errors() {
            if let Some(help_text) = err.help() {
                assert!(help_text.len() > 10, "Help text for {:?} should be substantial", err);
                assert_ne!(help_text, err.to_string());
            }
        }
    }
}
