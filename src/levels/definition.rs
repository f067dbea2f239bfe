//! Level definitions - static puzzle data.
//!
//! A `Level` is immutable: sessions copy its initial grid and never write
//! back, so a level can be replayed any number of times.

use serde::{Deserialize, Serialize};

use crate::core::Grid;

/// Unique identifier for a level definition.
///
/// Ids are chosen by whoever authors the level set. They identify a level
/// independently of its position in the play order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LevelId(pub u32);

impl LevelId {
    /// Create a new level ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for LevelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level({})", self.0)
    }
}

/// A puzzle: display text plus the starting grid.
///
/// ## Example
///
/// ```
/// use eclipse_grid::core::{Cell, Grid};
/// use eclipse_grid::levels::{Level, LevelId};
///
/// let level = Level::new(LevelId::new(7), "Noon", "All light.", Grid::filled(Cell::Sun));
/// assert_eq!(level.name, "Noon");
/// assert!(!level.is_trivial());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Unique identifier.
    pub id: LevelId,

    /// Display name.
    pub name: String,

    /// Flavor text shown under the name.
    #[serde(default)]
    pub lore: String,

    /// Starting tiles.
    pub initial_grid: Grid,
}

impl Level {
    /// Create a new level definition.
    #[must_use]
    pub fn new(id: LevelId, name: impl Into<String>, lore: impl Into<String>, initial_grid: Grid) -> Self {
        Self {
            id,
            name: name.into(),
            lore: lore.into(),
            initial_grid,
        }
    }

    /// A level whose starting grid is already solved.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.initial_grid.is_all_moon()
    }
}
