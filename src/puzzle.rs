//! `puzzle`: load puzzle descriptions into a validated grid plus search words.
//!
//! A puzzle description is plain text:
//! - The first non-empty line lists the search words, comma-separated.
//! - Every following non-empty line is one grid row, one cell per comma-separated value.
//!
//! ```text
//! DEF,GDA,AEI
//! A,B,C
//! D,E,F
//! G,H,I
//! ```
//!
//! Words and cells are trimmed; empty word entries are dropped. A line holding
//! a control character other than whitespace is malformed. The grid rows
//! go through [`GridManager`] validation, so a description with no grid rows
//! fails with `grid is null.`
//!
//! Parsing is WASM-safe (`parse_from_str`). Reading from disk and listing a
//! puzzle directory are native-only.

use crate::errors::{format_error_with_code_and_help, GridError};
use crate::grid::GridManager;
use log::debug;
use nom::bytes::complete::{tag, take_while};
use nom::combinator::all_consuming;
use nom::multi::separated_list1;
use nom::{IResult, Parser};

const FIELD_SEPARATOR: char = ',';

#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("failed to read puzzle '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("puzzle has no search words")]
    MissingSearchWords,

    #[error("malformed puzzle line {line_number}: \"{line}\"")]
    MalformedLine { line_number: usize, line: String },

    #[error("invalid puzzle grid: {0}")]
    Grid(#[from] GridError),

    #[error("puzzle directory {reason}: {path}")]
    Directory { path: String, reason: &'static str },
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::Io { .. } => "P001",
            PuzzleError::MissingSearchWords => "P002",
            PuzzleError::MalformedLine { .. } => "P003",
            PuzzleError::Grid(_) => "P004",
            PuzzleError::Directory { .. } => "P005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::Io { .. } => "Puzzle file could not be read",
            PuzzleError::MissingSearchWords => "Puzzle has no search word line",
            PuzzleError::MalformedLine { .. } => "Puzzle line could not be parsed",
            PuzzleError::Grid(_) => "Puzzle grid failed validation",
            PuzzleError::Directory { .. } => "Puzzle directory unusable",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            PuzzleError::Io { .. } => "The puzzle path does not exist, is not readable, or is not UTF-8 text.",
            PuzzleError::MissingSearchWords => "The first non-empty line of a puzzle must list the words to find, separated by commas.",
            PuzzleError::MalformedLine { .. } => "Each puzzle line must be a comma-separated list of values without control characters.",
            PuzzleError::Grid(_) => "The grid rows were read but the grid is not a valid square of single letters or digits (this wraps a grid error, see Grid Errors for specific codes).",
            PuzzleError::Directory { .. } => "The puzzle directory does not exist or holds no puzzle files.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::MissingSearchWords => Some("Start the puzzle with a line such as 'CAT,DOG,BIRD'"),
            PuzzleError::Directory { .. } => Some("Pass a directory containing at least one puzzle file"),
            PuzzleError::Grid(_) | PuzzleError::Io { .. } | PuzzleError::MalformedLine { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            PuzzleError::Grid(ge) => format!("{}\n  caused by: {}", self.code(), ge.display_detailed()),
            _ => format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// A loaded puzzle: the words to look for and the validated grid.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub search_words: Vec<String>,
    pub grid: GridManager,
}

// Anything but the separator and non-whitespace control characters.
fn is_field_char(c: char) -> bool {
    c != FIELD_SEPARATOR && (!c.is_control() || c.is_whitespace())
}

// One comma-separated line; fields may be empty. A control character
// stops the field short, so `all_consuming` rejects the line.
fn fields(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(separated_list1(tag(","), take_while(is_field_char))).parse(input)
}

fn parse_line(line: &str, line_number: usize) -> Result<Vec<String>, PuzzleError> {
    match fields(line) {
        Ok((_, values)) => Ok(values.into_iter().map(|v| v.trim().to_string()).collect()),
        Err(_) => Err(PuzzleError::MalformedLine { line_number, line: line.to_string() }),
    }
}

impl Puzzle {
    /// Parse a puzzle description from an in-memory string.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::MissingSearchWords`] when there is no word line
    /// (or it holds no words), and [`PuzzleError::Grid`] when the grid rows are
    /// missing or fail validation.
    pub fn parse_from_str(contents: &str) -> Result<Puzzle, PuzzleError> {
        let mut lines = contents
            .lines()
            .enumerate()
            .map(|(i, raw_line)| (i + 1, raw_line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (words_line_number, words_line) = lines.next().ok_or(PuzzleError::MissingSearchWords)?;
        let search_words: Vec<String> = parse_line(words_line, words_line_number)?
            .into_iter()
            .filter(|w| !w.is_empty())
            .collect();
        if search_words.is_empty() {
            return Err(PuzzleError::MissingSearchWords);
        }

        let rows = lines
            .map(|(line_number, line)| parse_line(line, line_number))
            .collect::<Result<Vec<_>, _>>()?;
        let rows = if rows.is_empty() { None } else { Some(rows) };

        let grid = GridManager::from_optional(rows)?;
        debug!("parsed puzzle with {} search words and a {n}x{n} grid", search_words.len(), n = grid.size());

        Ok(Puzzle { search_words, grid })
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Io`] if the file cannot be read, otherwise as
    /// [`Puzzle::parse_from_str`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Puzzle, PuzzleError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| PuzzleError::Io {
            path: path_ref.display().to_string(),
            source,
        })?;
        Self::parse_from_str(&data)
    }
}

/// Sorted paths of the regular files directly inside `dir`.
///
/// # Errors
///
/// Returns [`PuzzleError::Directory`] if `dir` is not a directory or holds no
/// files, and [`PuzzleError::Io`] if it cannot be listed.
#[cfg(not(target_arch = "wasm32"))]
pub fn list_puzzle_files<P: AsRef<std::path::Path>>(dir: P) -> Result<Vec<std::path::PathBuf>, PuzzleError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(PuzzleError::Directory { path: dir.display().to_string(), reason: "does not exist" });
    }

    let io_err = |source: std::io::Error| PuzzleError::Io { path: dir.display().to_string(), source };
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(PuzzleError::Directory { path: dir.display().to_string(), reason: "contains no files" });
    }
    paths.sort();
    Ok(paths)
}
