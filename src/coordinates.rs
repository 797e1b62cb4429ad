use std::fmt;

/// A single grid cell, addressed as (column, row) from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct Coordinate {
    pub column: usize,
    pub row: usize,
}

impl Coordinate {
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Coordinate { column, row }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.column, self.row)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((column, row): (usize, usize)) -> Self {
        Coordinate { column, row }
    }
}

/// Ordered coordinates of a located word.
///
/// An empty list displays as its fallback message, which is how "not found"
/// reaches the caller: as a normal value rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateList {
    coordinates: Vec<Coordinate>,
    not_found_message: String,
}

impl CoordinateList {
    #[must_use]
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        CoordinateList { coordinates, not_found_message: String::new() }
    }

    /// An empty list carrying `message` as its display fallback.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        CoordinateList { coordinates: Vec::new(), not_found_message: message.into() }
    }

    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    #[must_use]
    pub fn not_found_message(&self) -> &str {
        &self.not_found_message
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.coordinates.iter()
    }

    #[must_use]
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.coordinates.contains(coordinate)
    }
}

impl fmt::Display for CoordinateList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.coordinates.is_empty() {
            return f.write_str(&self.not_found_message);
        }
        let joined: Vec<String> = self.coordinates.iter().map(Coordinate::to_string).collect();
        f.write_str(&joined.join(","))
    }
}

impl<'a> IntoIterator for &'a CoordinateList {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

impl IntoIterator for CoordinateList {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.into_iter()
    }
}
