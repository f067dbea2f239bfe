//! Tile state.
//!
//! Every tile shows one of two faces: `Sun` (encoded as 1) or `Moon`
//! (encoded as 0). A level is solved once every tile shows `Moon`.

use serde::{Deserialize, Serialize};

use super::grid::GridError;

/// A single tile on the board.
///
/// Serialized as the integer `0` (Moon) or `1` (Sun) so level packs can
/// be written as plain nested arrays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Cell {
    /// Dark face, value 0. The goal state.
    #[default]
    Moon = 0,
    /// Light face, value 1.
    Sun = 1,
}

impl Cell {
    /// The opposite face.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Cell::Sun => Cell::Moon,
            Cell::Moon => Cell::Sun,
        }
    }

    /// Flip this cell in place.
    pub fn flip(&mut self) {
        *self = self.flipped();
    }

    #[must_use]
    pub const fn is_sun(self) -> bool {
        matches!(self, Cell::Sun)
    }

    #[must_use]
    pub const fn is_moon(self) -> bool {
        matches!(self, Cell::Moon)
    }

    /// Numeric encoding (Sun = 1, Moon = 0).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Character used by the text format: `#` for Sun, `.` for Moon.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Sun => '#',
            Cell::Moon => '.',
        }
    }

    /// Parse a text-format character.
    ///
    /// Accepts `1`/`#` for Sun and `0`/`.` for Moon.
    pub fn from_symbol(c: char) -> Result<Self, GridError> {
        match c {
            '1' | '#' => Ok(Cell::Sun),
            '0' | '.' => Ok(Cell::Moon),
            other => Err(GridError::InvalidSymbol(other)),
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Moon),
            1 => Ok(Cell::Sun),
            other => Err(GridError::InvalidCell(other)),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.value()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Sun => write!(f, "Sun"),
            Cell::Moon => write!(f, "Moon"),
        }
    }
}
