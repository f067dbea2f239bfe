//! Board coordinates.
//!
//! Coordinates are signed so that a pointer dragged past the edge of the
//! board still has a representable position. Only in-bounds coordinates
//! address cells.

use serde::{Deserialize, Serialize};

use super::grid::GRID_SIZE;

/// A `(row, col)` position, 0-indexed from the top-left tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check if this coordinate addresses a tile on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        let n = GRID_SIZE as i32;
        self.row >= 0 && self.row < n && self.col >= 0 && self.col < n
    }

    /// Convert to array indices, or `None` if off the board.
    #[must_use]
    pub fn index(self) -> Option<(usize, usize)> {
        self.in_bounds()
            .then_some((self.row as usize, self.col as usize))
    }

    /// Iterate over every on-board coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        let n = GRID_SIZE as i32;
        (0..n).flat_map(move |row| (0..n).map(move |col| Coord::new(row, col)))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
