//! The compiled-in level set.

use crate::core::{Cell, Grid};

use super::definition::{Level, LevelId};

const S: Cell = Cell::Sun;
const M: Cell = Cell::Moon;

/// Every tile lit. One full-board flip clears it.
pub const THE_SPARK: Grid = Grid::filled(S);

/// A lit frame around a dark 3×3 center.
pub const THE_VOID: Grid = Grid::new([
    [S, S, S, S, S],
    [S, M, M, M, S],
    [S, M, M, M, S],
    [S, M, M, M, S],
    [S, S, S, S, S],
]);

/// A lit 2×2 top-left corner and a lit 3×3 bottom-right corner.
pub const THE_CORNER: Grid = Grid::new([
    [S, S, M, M, M],
    [S, S, M, M, M],
    [M, M, S, S, S],
    [M, M, S, S, S],
    [M, M, S, S, S],
]);

/// Two overlapping 2×2 squares.
pub const FRAGMENTATION: Grid = Grid::new([
    [M, M, M, M, M],
    [M, M, S, S, M],
    [M, S, M, S, M],
    [M, S, S, M, M],
    [M, M, M, M, M],
]);

pub const DUALITY: Grid = Grid::new([
    [M, S, M, S, M],
    [S, M, S, M, S],
    [S, M, M, M, S],
    [M, S, M, S, M],
    [M, M, S, M, M],
]);

/// Build the built-in levels in play order.
#[must_use]
pub fn levels() -> Vec<Level> {
    vec![
        Level::new(
            LevelId::new(1),
            "The Spark",
            "A single spark can ignite the stars.",
            THE_SPARK,
        ),
        Level::new(LevelId::new(2), "The Void", "Stare into the abyss.", THE_VOID),
        Level::new(
            LevelId::new(3),
            "The Corner",
            "Darkness hides in the angles.",
            THE_CORNER,
        ),
        Level::new(
            LevelId::new(4),
            "Fragmentation",
            "The unity is breaking.",
            FRAGMENTATION,
        ),
        Level::new(
            LevelId::new(5),
            "Duality",
            "Two sides of the same coin.",
            DUALITY,
        ),
    ]
}
