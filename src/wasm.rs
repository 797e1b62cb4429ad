use crate::coordinates::Coordinate;
use crate::errors::GridError;
use crate::grid::{GridManager, RawGrid};
use crate::log::init_logger;
use crate::puzzle::{Puzzle, PuzzleError};
use crate::word_finder::{WordFinder, DEFAULT_NOT_FOUND_TEMPLATE};
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "G003", "P002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<GridError> for WasmError {
    fn from(e: GridError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<PuzzleError> for WasmError {
    fn from(e: PuzzleError) -> Self {
        // surface the underlying grid error directly
        match e {
            PuzzleError::Grid(ge) => WasmError::from(ge),
            _ => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(str::to_string),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(code: &str, e: &serde_wasm_bindgen::Error) -> WasmError {
    WasmError {
        code: code.to_string(),
        message: format!("serialization failed: {e}"),
        description: "Failed to serialize result".to_string(),
        details: "The result could not be converted to JavaScript format.".to_string(),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
}

/// Initialize logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized ({})", env!("GIT_HASH_FULL"));
}

#[derive(serde::Serialize)]
struct WasmWordResult {
    word: String,
    found: bool,
    message: String,
    coordinates: Vec<Coordinate>,
}

/// JS entry: (grid_rows: string[][] | null, words: string[])
/// returns Array<{word, found, message, coordinates: {column, row}[]}>
#[wasm_bindgen]
pub fn find_words_wasm(grid_rows: JsValue, words: JsValue) -> Result<JsValue, JsValue> {
    let rows: Option<RawGrid> = serde_wasm_bindgen::from_value(grid_rows).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("grid_rows must be string[][]: {e}"),
        description: "Invalid grid format".to_string(),
        details: "The grid_rows parameter must be a JavaScript array of rows, each an array of one-character strings.".to_string(),
        help: Some("Pass e.g. [['A','B'],['C','D']]".to_string()),
    })?;
    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM002".to_string(),
        message: format!("words must be string[]: {e}"),
        description: "Invalid word list".to_string(),
        details: "The words parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Pass e.g. ['CAT', 'DOG']".to_string()),
    })?;

    let grid = GridManager::from_optional(rows).map_err(WasmError::from)?;
    let solution = WordFinder::for_grid(&grid).solve(&words, DEFAULT_NOT_FOUND_TEMPLATE);

    let results: Vec<WasmWordResult> = solution
        .results
        .into_iter()
        .map(|r| WasmWordResult {
            found: r.is_found(),
            message: r.coordinates.to_string(),
            coordinates: r.coordinates.coordinates().to_vec(),
            word: r.word,
        })
        .collect();

    serde_wasm_bindgen::to_value(&results).map_err(|e| serialization_error("WASM003", &e).into())
}

#[derive(serde::Serialize)]
struct WasmPuzzle {
    search_words: Vec<String>,
    grid: Vec<String>,
}

/// Parse a puzzle description (word line, then comma-separated grid rows).
/// Returns `{search_words: string[], grid: string[]}` with one string per row.
///
/// # Errors
/// Returns a `JsValue` error if the puzzle or its grid is invalid.
#[wasm_bindgen]
pub fn parse_puzzle(text: &str) -> Result<JsValue, JsValue> {
    let puzzle = Puzzle::parse_from_str(text).map_err(WasmError::from)?;
    let result = WasmPuzzle {
        grid: puzzle.grid.rows().iter().map(|row| row.iter().collect()).collect(),
        search_words: puzzle.search_words,
    };
    serde_wasm_bindgen::to_value(&result).map_err(|e| serialization_error("WASM004", &e).into())
}
