//! Generate error code documentation from the error enums themselves.
//!
//! Codes, descriptions, details and help text come straight from the
//! `code()`, `description()`, `details()` and `help()` methods of
//! `GridError`, `LinearViewError`, `WordFinderError` and `PuzzleError`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use wordsearch::errors::{GridError, LinearViewError};
use wordsearch::puzzle::PuzzleError;
use wordsearch::word_finder::WordFinderError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

fn all_grid_error_variants() -> Vec<GridError> {
    vec![
        GridError::NullGrid,
        GridError::EmptyGrid,
        GridError::NotSquare,
        GridError::MultiCharacterCell,
        GridError::InvalidCharacter { cell: "#".to_string() },
    ]
}

fn all_linear_view_error_variants() -> Vec<LinearViewError> {
    vec![LinearViewError::EmptyValue, LinearViewError::EmptyIndexMap]
}

fn all_word_finder_error_variants() -> Vec<WordFinderError> {
    vec![WordFinderError::EmptyOrientations]
}

fn all_puzzle_error_variants() -> Vec<PuzzleError> {
    vec![
        PuzzleError::Io {
            path: "puzzles/missing.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        },
        PuzzleError::MissingSearchWords,
        PuzzleError::MalformedLine { line_number: 3, line: "A,B\u{7},C".to_string() },
        PuzzleError::Grid(GridError::NotSquare),
        PuzzleError::Directory { path: "puzzles".to_string(), reason: "contains no files" },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**This document is generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Puzzle Errors (P001–P005)](#puzzle-errors)");
    println!("- [Grid Errors (G001–G005)](#grid-errors)");
    println!("- [Linear View Errors (L001–L002)](#linear-view-errors)");
    println!("- [Word Finder Errors (W001)](#word-finder-errors)\n");

    println!("## Puzzle Errors\n");
    println!("Errors raised while loading a puzzle description. Grid problems are wrapped as P004.\n");
    generate_error_docs!(all_puzzle_error_variants());

    println!("## Grid Errors\n");
    println!("Validation failures for the letter grid. The first failure found is reported.\n");
    generate_error_docs!(all_grid_error_variants());

    println!("## Linear View Errors\n");
    println!("Raised when a linear view is built by hand from inconsistent parts.\n");
    generate_error_docs!(all_linear_view_error_variants());

    println!("## Word Finder Errors\n");
    generate_error_docs!(all_word_finder_error_variants());

    println!("## Error Display Formats\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```\n");
}
