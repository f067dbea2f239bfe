//! The fixed-size tile grid.
//!
//! ## Representation
//!
//! `Grid` is a plain `N×N` array of [`Cell`] with `N = GRID_SIZE`. It is
//! `Copy`, so a session's live grid can never alias a level's initial grid.
//!
//! ## Mask view
//!
//! For the solver, a grid also maps to a bitmask where bit `row * N + col`
//! is set iff that tile shows Sun. Flipping a region is an XOR with the
//! region's mask.
//!
//! ## Text format
//!
//! ```
//! use eclipse_grid::core::{Cell, Coord, Grid};
//!
//! let grid: Grid = "11000/11000/00111/00111/00111".parse().unwrap();
//! assert_eq!(grid.get(Coord::new(0, 0)), Some(Cell::Sun));
//! assert_eq!(grid.get(Coord::new(0, 2)), Some(Cell::Moon));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::Region;
use super::cell::Cell;
use super::coord::Coord;

/// Side length of the board.
pub const GRID_SIZE: usize = 5;

/// Number of tiles on the board.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Errors from building a grid out of untrusted input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A numeric cell value other than 0 or 1.
    #[error("invalid cell value {0} (expected 0 or 1)")]
    InvalidCell(u8),

    /// A text-format character that is not `0`, `1`, `.` or `#`.
    #[error("invalid cell symbol {0:?}")]
    InvalidSymbol(char),

    /// Wrong number of rows.
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    /// A row with the wrong number of cells.
    #[error("row {row}: expected {expected} cells, found {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// An `N×N` board of tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Create a grid from its rows.
    #[must_use]
    pub const fn new(cells: [[Cell; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Create a grid with every tile set to `cell`.
    #[must_use]
    pub const fn filled(cell: Cell) -> Self {
        Self {
            cells: [[cell; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Create a grid from 0/1 values.
    pub fn from_values(values: [[u8; GRID_SIZE]; GRID_SIZE]) -> Result<Self, GridError> {
        let mut grid = Self::default();
        for (r, row) in values.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                grid.cells[r][c] = Cell::try_from(value)?;
            }
        }
        Ok(grid)
    }

    /// Create a grid from a mask (bit `row * N + col` set = Sun).
    ///
    /// Bits at or above `CELL_COUNT` are ignored.
    #[must_use]
    pub fn from_mask(mask: u32) -> Self {
        let mut grid = Self::default();
        for (i, coord) in Coord::all().enumerate() {
            if mask >> i & 1 == 1 {
                grid.set(coord, Cell::Sun);
            }
        }
        grid
    }

    /// Mask view of this grid.
    #[must_use]
    pub fn to_mask(&self) -> u32 {
        Coord::all()
            .enumerate()
            .filter(|&(_, coord)| self.get(coord).is_some_and(Cell::is_sun))
            .fold(0, |mask, (i, _)| mask | 1 << i)
    }

    /// Get the tile at `coord`, or `None` if off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        coord.index().map(|(r, c)| self.cells[r][c])
    }

    /// Set the tile at `coord`.
    ///
    /// Returns false (and does nothing) if `coord` is off the board.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        match coord.index() {
            Some((r, c)) => {
                self.cells[r][c] = cell;
                true
            }
            None => false,
        }
    }

    /// Flip the tile at `coord`.
    ///
    /// Returns false (and does nothing) if `coord` is off the board.
    pub fn flip_cell(&mut self, coord: Coord) -> bool {
        match coord.index() {
            Some((r, c)) => {
                self.cells[r][c].flip();
                true
            }
            None => false,
        }
    }

    /// Flip every on-board tile inside `region`.
    ///
    /// Off-board parts of the region are skipped. Returns the number of
    /// tiles flipped.
    pub fn flip_region(&mut self, region: &Region) -> usize {
        region
            .cells()
            .filter(|&coord| self.flip_cell(coord))
            .count()
    }

    /// Check if every tile shows Moon.
    #[must_use]
    pub fn is_all_moon(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.is_moon())
    }

    /// Number of tiles showing Sun.
    #[must_use]
    pub fn sun_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_sun()).count()
    }

    /// Tiles as 0/1 values, row-major.
    #[must_use]
    pub fn values(&self) -> [[u8; GRID_SIZE]; GRID_SIZE] {
        self.cells.map(|row| row.map(Cell::value))
    }

    /// Iterate over `(coord, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::all().filter_map(move |coord| self.get(coord).map(|cell| (coord, cell)))
    }
}

impl std::str::FromStr for Grid {
    type Err = GridError;

    /// Parse rows of `0`/`1`/`.`/`#` separated by whitespace or `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != GRID_SIZE {
            return Err(GridError::RowCount {
                expected: GRID_SIZE,
                found: rows.len(),
            });
        }

        let mut grid = Self::default();
        for (r, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != GRID_SIZE {
                return Err(GridError::RowLength {
                    row: r,
                    expected: GRID_SIZE,
                    found,
                });
            }
            for (c, symbol) in row.chars().enumerate() {
                grid.cells[r][c] = Cell::from_symbol(symbol)?;
            }
        }
        Ok(grid)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
