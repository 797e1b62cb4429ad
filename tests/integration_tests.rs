//! Integration tests for the word search library.
//!
//! These exercise the full pipeline: puzzle text or file, grid validation,
//! the four traversals, and the word finder's coordinates.

use wordsearch::errors::GridError;
use wordsearch::grid::{GridManager, RawGrid};
use wordsearch::puzzle::{list_puzzle_files, Puzzle, PuzzleError};
use wordsearch::render::render_grid;
use wordsearch::word_finder::{WordFinder, DEFAULT_NOT_FOUND_TEMPLATE};
use wordsearch::{Coordinate, SearchOrientationManager};

/// Build a grid from "ABC|DEF|GHI" shorthand
fn grid(source: &str) -> GridManager {
    let rows: RawGrid = source
        .split('|')
        .map(|row| row.chars().map(String::from).collect())
        .collect();
    GridManager::new(rows).expect("test grid should be valid")
}

fn coords(pairs: &[(usize, usize)]) -> Vec<Coordinate> {
    pairs.iter().copied().map(Coordinate::from).collect()
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn test_row_left_to_right() {
        let finder = WordFinder::for_grid(&grid("ABC|DEF|GHI"));
        let found = finder.get_coordinates_of_search_target("DEF", "missing");
        assert_eq!(found.coordinates(), coords(&[(0, 1), (1, 1), (2, 1)]));
    }

    #[test]
    fn test_column_bottom_to_top() {
        let finder = WordFinder::for_grid(&grid("ABC|DEF|GHI"));
        let found = finder.get_coordinates_of_search_target("GDA", "missing");
        assert_eq!(found.coordinates(), coords(&[(0, 2), (0, 1), (0, 0)]));
    }

    #[test]
    fn test_diagonal_top_left_to_bottom_right() {
        let finder = WordFinder::for_grid(&grid("ABC|DEF|GHI"));
        let found = finder.get_coordinates_of_search_target("AEI", "missing");
        assert_eq!(found.coordinates(), coords(&[(0, 0), (1, 1), (2, 2)]));
    }

    #[test]
    fn test_wrapping_word_not_found() {
        let finder = WordFinder::for_grid(&grid("ABC|DEF|GHI"));
        let found = finder.get_coordinates_of_search_target("CDE", "CDE is not in this puzzle");
        assert!(found.is_empty());
        assert_eq!(found.to_string(), "CDE is not in this puzzle");
    }

    #[test]
    fn test_four_by_four_row() {
        let finder = WordFinder::for_grid(&grid("ABCD|EFGH|IJKL|MNOP"));
        let found = finder.get_coordinates_of_search_target("JKL", "missing");
        assert_eq!(found.coordinates(), coords(&[(1, 2), (2, 2), (3, 2)]));
    }
}

#[cfg(test)]
mod all_directions {
    use super::*;

    fn rust_terms() -> Puzzle {
        Puzzle::load_from_path(fixture("puzzles/rust_terms.txt")).unwrap()
    }

    fn locate(word: &str) -> Vec<Coordinate> {
        let puzzle = rust_terms();
        WordFinder::for_grid(&puzzle.grid)
            .get_coordinates_of_search_target(word, "missing")
            .coordinates()
            .to_vec()
    }

    #[test]
    fn test_puzzle_loads() {
        let puzzle = rust_terms();
        assert_eq!(puzzle.grid.size(), 8);
        assert_eq!(
            puzzle.search_words,
            vec!["RUST", "CARGO", "CRATE", "TRAIT", "BORROW", "LIFETIME", "MACRO", "ENUM"]
        );
    }

    #[test]
    fn test_east() {
        assert_eq!(locate("RUST"), coords(&[(1, 0), (2, 0), (3, 0), (4, 0)]));
    }

    #[test]
    fn test_west() {
        assert_eq!(locate("CARGO"), coords(&[(6, 7), (5, 7), (4, 7), (3, 7), (2, 7)]));
    }

    #[test]
    fn test_south() {
        assert_eq!(locate("CRATE"), coords(&[(1, 3), (1, 4), (1, 5), (1, 6), (1, 7)]));
    }

    #[test]
    fn test_north() {
        assert_eq!(locate("TRAIT"), coords(&[(0, 7), (0, 6), (0, 5), (0, 4), (0, 3)]));
    }

    #[test]
    fn test_south_east() {
        assert_eq!(
            locate("BORROW"),
            coords(&[(2, 1), (3, 2), (4, 3), (5, 4), (6, 5), (7, 6)])
        );
    }

    #[test]
    fn test_north_west_full_diagonal() {
        assert_eq!(
            locate("LIFETIME"),
            coords(&[(7, 7), (6, 6), (5, 5), (4, 4), (3, 3), (2, 2), (1, 1), (0, 0)])
        );
    }

    #[test]
    fn test_south_west() {
        assert_eq!(locate("MACRO"), coords(&[(7, 0), (6, 1), (5, 2), (4, 3), (3, 4)]));
    }

    #[test]
    fn test_north_east() {
        assert_eq!(locate("ENUM"), coords(&[(4, 4), (5, 3), (6, 2), (7, 1)]));
    }

    #[test]
    fn test_lowercase_search_word() {
        assert_eq!(locate("enum"), locate("ENUM"));
    }

    #[test]
    fn test_reversed_words_give_reversed_paths() {
        for word in rust_terms().search_words {
            let reversed: String = word.chars().rev().collect();
            let mut expected = locate(&word);
            expected.reverse();
            assert_eq!(locate(&reversed), expected, "reverse of {word}");
        }
    }

    #[test]
    fn test_solve_whole_puzzle() {
        let puzzle = rust_terms();
        let solution = WordFinder::for_grid(&puzzle.grid).solve(&puzzle.search_words, DEFAULT_NOT_FOUND_TEMPLATE);

        assert_eq!(solution.found_count(), 8);
        for result in &solution.results {
            let spelled: String = result
                .coordinates
                .iter()
                .filter_map(|c| puzzle.grid.cell(*c))
                .collect();
            assert_eq!(spelled, result.word);
        }
        // BORROW/MACRO share (4,3); LIFETIME/ENUM share (4,4)
        let letters: usize = solution.results.iter().map(|r| r.coordinates.len()).sum();
        assert_eq!(solution.highlighted().len(), letters - 2);
    }
}

#[cfg(test)]
mod puzzle_files {
    use super::*;

    #[test]
    fn test_lowercase_grid_is_searchable() {
        let puzzle = Puzzle::load_from_path(fixture("puzzles/lowercase.txt")).unwrap();
        let solution = WordFinder::for_grid(&puzzle.grid).solve(&puzzle.search_words, DEFAULT_NOT_FOUND_TEMPLATE);

        assert_eq!(solution.results[0].coordinates.to_string(), "(1,2),(2,2),(3,2)");
        assert_eq!(solution.results[1].coordinates.to_string(), "(3,3),(2,2),(1,1),(0,0)");
        assert_eq!(solution.results[2].coordinates.to_string(), "Did not find m1 in puzzle.");
    }

    #[test]
    fn test_abc_puzzle_output() {
        let puzzle = Puzzle::load_from_path(fixture("puzzles/abc.txt")).unwrap();
        let solution = WordFinder::for_grid(&puzzle.grid).solve(&puzzle.search_words, DEFAULT_NOT_FOUND_TEMPLATE);

        let lines: Vec<String> = solution.results.iter().map(|r| r.coordinates.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "(0,1),(1,1),(2,1)",
                "(0,2),(0,1),(0,0)",
                "(0,0),(1,1),(2,2)",
                "Did not find CDE in puzzle.",
            ]
        );

        let rendered = render_grid(&puzzle.grid, &solution.highlighted());
        assert_eq!(rendered, "[A]  B   C\n[D] [E] [F]\n[G]  H  [I]\n");
    }

    #[test]
    fn test_not_square_file() {
        let err = Puzzle::load_from_path(fixture("invalid/not_square.txt")).unwrap_err();
        assert!(matches!(err, PuzzleError::Grid(GridError::NotSquare)));
    }

    #[test]
    fn test_no_grid_file() {
        let err = Puzzle::load_from_path(fixture("invalid/no_grid.txt")).unwrap_err();
        assert!(matches!(err, PuzzleError::Grid(GridError::NullGrid)));
        assert!(err.display_detailed().contains("grid is null."));
    }

    #[test]
    fn test_bad_char_file() {
        let err = Puzzle::load_from_path(fixture("invalid/bad_char.txt")).unwrap_err();
        match err {
            PuzzleError::Grid(ge) => assert_eq!(
                ge.to_string(),
                "grid is not valid - at least one element is an invalid character: $"
            ),
            other => panic!("expected grid error, got {other:?}"),
        }
    }

    #[test]
    fn test_list_puzzle_files_sorted() {
        let files = list_puzzle_files(fixture("puzzles")).unwrap();
        let names: Vec<String> = files
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        assert_eq!(names, vec!["abc.txt", "lowercase.txt", "rust_terms.txt"]);
    }
}

#[cfg(test)]
mod orientation_manager {
    use super::*;

    #[test]
    fn test_raw_rows_validated_before_building() {
        let rows: RawGrid = vec![vec!["A".to_string(), "B".to_string()]];
        let err = SearchOrientationManager::new().get_search_orientations_for_rows(rows).unwrap_err();
        assert_eq!(err.to_string(), "grid has a mismatch between the number of rows and columns.");
    }

    #[test]
    fn test_orientations_feed_word_finder() {
        let orientations = SearchOrientationManager::new().get_search_orientations(&grid("AB|CD"));
        let finder = WordFinder::new(orientations).unwrap();
        assert_eq!(finder.get_coordinates_of_search_target("DA", "").to_string(), "(1,1),(0,0)");
    }
}
