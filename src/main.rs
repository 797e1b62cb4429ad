use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use wordsearch::puzzle::{self, Puzzle, PuzzleError};
use wordsearch::render::render_grid;
use wordsearch::word_finder::{WordFinder, DEFAULT_NOT_FOUND_TEMPLATE};

/// Word search solver
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Puzzle file: first line = comma-separated words, then one comma-separated grid row per line
    #[arg(required_unless_present = "list")]
    puzzle: Option<PathBuf>,

    /// Search for this word instead of the puzzle's word list (repeatable)
    #[arg(short, long = "word")]
    words: Vec<String>,

    /// List the puzzle files in a directory and exit
    #[arg(short, long, value_name = "DIR", conflicts_with = "puzzle")]
    list: Option<PathBuf>,

    /// Do not print the grid after the coordinates
    #[arg(long)]
    no_grid: bool,

    /// Message printed for a word that is not in the grid ("{word}" is replaced by the word)
    #[arg(long, default_value = DEFAULT_NOT_FOUND_TEMPLATE)]
    not_found: String,
}

/// Entry point of the word search CLI.
///
/// Delegates to [`try_main`], printing any error with its code and help
/// before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var(wordsearch::log::DEBUG_ENV_VAR).is_ok();
    wordsearch::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Either list a puzzle directory, or load one puzzle from disk.
/// 3. Locate every requested word and print its coordinates on stdout.
/// 4. Print the grid with the solution highlighted.
/// 5. Print timings on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(dir) = &cli.list {
        for (i, path) in puzzle::list_puzzle_files(dir)?.iter().enumerate() {
            let name = path.file_name().map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
            println!("({}) {name}", i + 1);
        }
        return Ok(());
    }

    let Some(path) = cli.puzzle.as_ref() else {
        return Err("no puzzle file given".into());
    };

    // 1. Load and validate the puzzle
    let t_load = Instant::now();
    let puzzle = Puzzle::load_from_path(path)?;
    let load_secs = t_load.elapsed().as_secs_f64();
    log::info!("Loaded {} ({n}x{n})", path.display(), n = puzzle.grid.size());

    let words = if cli.words.is_empty() { &puzzle.search_words } else { &cli.words };

    // 2. Build the orientations and search
    let t_solve = Instant::now();
    let finder = WordFinder::for_grid(&puzzle.grid);
    let solution = finder.solve(words, &cli.not_found);
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // 3. Print coordinates
    for result in &solution.results {
        if result.is_found() {
            println!("{}: {}", result.word, result.coordinates);
        } else {
            println!("{}", result.coordinates);
        }
    }

    // 4. Print the grid with every found cell highlighted
    if !cli.no_grid {
        println!();
        print!("{}", render_grid(&puzzle.grid, &solution.highlighted()));
    }

    eprintln!(
        "Found {}/{} words; loaded in {:.3}s, solved in {:.3}s.",
        solution.found_count(),
        solution.results.len(),
        load_secs,
        solve_secs
    );

    Ok(())
}
