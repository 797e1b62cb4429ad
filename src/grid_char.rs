// Character-class constants shared by the grid validator and the traversals
pub const BOUNDARY_DELIMITER: char = '|';

pub(crate) const VALID_CELL_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

// The delimiter must never be a legal cell, or a word could match across it.
const _: () = assert!(!BOUNDARY_DELIMITER.is_ascii_alphanumeric());

pub(crate) trait GridChar {
    fn is_cell_char(&self) -> bool;
    fn is_boundary(&self) -> bool;
}

impl GridChar for char {
    fn is_cell_char(&self) -> bool {
        VALID_CELL_CHARS.contains(*self)
    }
    fn is_boundary(&self) -> bool {
        *self == BOUNDARY_DELIMITER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_cell_char() {
        for c in VALID_CELL_CHARS.chars() {
            assert!(c.is_cell_char(), "'{}' should be a valid cell", c);
        }
    }

    #[test]
    fn test_is_not_cell_char() {
        assert!(!'|'.is_cell_char());
        assert!(!' '.is_cell_char());
        assert!(!'-'.is_cell_char());
        assert!(!'é'.is_cell_char());
        assert!(!'@'.is_cell_char());
    }

    #[test]
    fn test_boundary_is_never_a_cell() {
        assert!(BOUNDARY_DELIMITER.is_boundary());
        assert!(!BOUNDARY_DELIMITER.is_cell_char());
        assert!(!VALID_CELL_CHARS.contains(BOUNDARY_DELIMITER));
    }

    #[test]
    fn test_cell_char_constants() {
        assert_eq!(VALID_CELL_CHARS.len(), 62); // 26 + 26 + 10
        assert!(VALID_CELL_CHARS.chars().all(|c| !c.is_boundary()));
    }
}
