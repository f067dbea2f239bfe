//! Flip regions and move records.
//!
//! A `Region` is the target of one flip: an axis-aligned rectangle given by
//! its top-left corner and its extents. The selection logic only ever
//! produces squares, but the engine accepts any rectangle and ignores the
//! parts that fall off the board.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::grid::GRID_SIZE;

/// An axis-aligned rectangle of tiles.
///
/// ## Example
///
/// ```
/// use eclipse_grid::core::{Coord, Region};
///
/// let region = Region::square(3, 3, 4);
/// assert!(region.is_square());
///
/// // Only the on-board part is visited
/// let cells: Vec<Coord> = region.cells().collect();
/// assert_eq!(cells.len(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// Top row (may be negative or past the board).
    pub row: i32,
    /// Left column (may be negative or past the board).
    pub col: i32,
    /// Extent in columns. Non-positive means empty.
    pub width: i32,
    /// Extent in rows. Non-positive means empty.
    pub height: i32,
}

impl Region {
    /// Create a region from its origin and extents.
    #[must_use]
    pub const fn new(row: i32, col: i32, width: i32, height: i32) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }

    /// Create a square region.
    #[must_use]
    pub const fn square(row: i32, col: i32, side: i32) -> Self {
        Self::new(row, col, side, side)
    }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Check if `coord` lies inside the rectangle (on the board or not).
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= self.row
            && coord.col >= self.col
            && coord.row < self.row.saturating_add(self.height)
            && coord.col < self.col.saturating_add(self.width)
    }

    /// Iterate over the on-board tiles of this region in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let n = GRID_SIZE as i32;
        let rows = self.row.max(0)..self.row.saturating_add(self.height).min(n);
        let cols = self.col.max(0)..self.col.saturating_add(self.width).min(n);
        rows.flat_map(move |row| cols.clone().map(move |col| Coord::new(row, col)))
    }

    /// Bitmask of the on-board tiles (bit `row * N + col`).
    #[must_use]
    pub fn mask(&self) -> u32 {
        self.cells()
            .fold(0, |mask, c| mask | 1 << (c.row as usize * GRID_SIZE + c.col as usize))
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.row, self.col
        )
    }
}

/// One applied flip, kept in the session's move history.
///
/// Used for:
/// - Replay/debugging
/// - Presentation (animating the last move)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipRecord {
    /// Level the flip was made on.
    pub level_index: usize,

    /// Move number after this flip (first flip is 1).
    pub move_number: u32,

    /// The requested region, before clamping.
    pub region: Region,

    /// Tiles actually flipped (0 if the region was entirely off the board).
    pub cells_flipped: usize,
}

impl FlipRecord {
    /// Create a new flip record.
    #[must_use]
    pub fn new(level_index: usize, move_number: u32, region: Region, cells_flipped: usize) -> Self {
        Self {
            level_index,
            move_number,
            region,
            cells_flipped,
        }
    }
}
