// Reusable library API, visible to both CLI and WASM builds
pub mod coordinates;
pub mod errors;
pub mod grid;
mod grid_char;
pub mod linear_view;
pub mod log;
pub mod puzzle;
pub mod render;
pub mod search_orientation;
pub mod traversal;
pub mod word_finder;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use coordinates::{Coordinate, CoordinateList};
pub use grid::GridManager;
pub use grid_char::BOUNDARY_DELIMITER;
pub use linear_view::LinearView;
pub use search_orientation::{SearchOrientation, SearchOrientationManager};
pub use traversal::Traversal;
pub use word_finder::WordFinder;
