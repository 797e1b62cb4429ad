//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Ad-hoc timing of orientation construction and word lookup on *your* machine.
//! - Builds a deterministic pseudo-random N×N grid per size and searches for
//!   words cut from its rows and columns (always found) plus random words
//!   (usually not found).
//! - Reports the median over repeats.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:     `cargo run --bin bench_local --release`
//! - Multiple repeats:    `cargo run --bin bench_local --release -- -r 5`
//! - See all flags:       `cargo run --bin bench_local -- --help`

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Instant;
use wordsearch::grid::{GridManager, RawGrid};
use wordsearch::word_finder::WordFinder;

/// Simple local benchmark runner for the word finder.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of repeats per grid size (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Number of lookups per run
    #[arg(short = 'n', long = "lookups", default_value_t = 1_000)]
    num_lookups: usize,

    /// Seed for the grid generator
    #[arg(short, long, default_value_t = 0x5eed)]
    seed: u64,
}

const GRID_SIZES: [usize; 4] = [10, 50, 200, 500];
const WORD_LEN: usize = 6;

fn random_letter(rng: &mut StdRng) -> char {
    char::from(rng.gen_range(b'A'..=b'Z'))
}

fn random_grid(rng: &mut StdRng, n: usize) -> RawGrid {
    (0..n)
        .map(|_| (0..n).map(|_| random_letter(rng).to_string()).collect())
        .collect()
}

/// Half the words are cut from rows or columns (found), half are random.
fn lookup_words(rng: &mut StdRng, grid: &GridManager, count: usize) -> Vec<String> {
    let n = grid.size();
    let len = WORD_LEN.min(n);
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                let (fixed, start) = (rng.gen_range(0..n), rng.gen_range(0..=n - len));
                let rows = grid.rows();
                let word: String = if i % 4 == 0 {
                    rows[fixed][start..start + len].iter().collect()
                } else {
                    (start..start + len).map(|r| rows[r][fixed]).collect()
                };
                if i % 8 == 0 { word.chars().rev().collect() } else { word }
            } else {
                (0..len).map(|_| random_letter(rng)).collect()
            }
        })
        .collect()
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut summary: Vec<(usize, f64, f64, usize)> = Vec::with_capacity(GRID_SIZES.len());

    for n in GRID_SIZES {
        let grid = GridManager::new(random_grid(&mut rng, n))?;
        let words = lookup_words(&mut rng, &grid, cli.num_lookups);
        eprintln!("\n[{n}x{n}] {} lookups", words.len());

        let mut build_times = Vec::with_capacity(cli.num_repeats);
        let mut search_times = Vec::with_capacity(cli.num_repeats);
        let mut found = 0;

        for rep in 0..cli.num_repeats {
            let t_build = Instant::now();
            let finder = WordFinder::for_grid(black_box(&grid));
            let build_secs = t_build.elapsed().as_secs_f64();

            let t_search = Instant::now();
            found = words
                .iter()
                .filter(|w| !finder.get_coordinates_of_search_target(black_box(w), "").is_empty())
                .count();
            let search_secs = t_search.elapsed().as_secs_f64();

            eprintln!(
                "  run {:>2}/{:>2}: build {build_secs:.4}s, search {search_secs:.4}s ({found} found)",
                rep + 1,
                cli.num_repeats
            );
            build_times.push(build_secs);
            search_times.push(search_secs);
        }

        summary.push((n, median(build_times), median(search_times), found));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:>9} | {:>10} | {:>10} | {:>7}", "grid", "build (s)", "search (s)", "found");
    eprintln!("{:-<9}-+-{:-<10}-+-{:-<10}-+-{:-<7}", "", "", "", "");
    for (n, build, search, found) in &summary {
        let label = format!("{n}x{n}");
        eprintln!("{label:>9} | {build:>10.4} | {search:>10.4} | {found:>7}");
    }

    Ok(())
}
