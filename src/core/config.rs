//! Engine configuration parameters.

use serde::{Deserialize, Serialize};

use super::grid::GRID_SIZE;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Smallest square side (in tiles) a drag must cover to trigger a flip.
    /// Default 2: a plain click never flips anything.
    /// Clamped to `1..=GRID_SIZE` when read through `min_side`.
    pub min_selection_side: usize,

    /// Keep a per-level history of applied flips.
    pub record_history: bool,

    /// Ignore flips once the level is won.
    pub lock_on_win: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_selection_side: 2,
            record_history: true,
            lock_on_win: true,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a custom minimum selection side.
    pub fn with_min_selection_side(mut self, side: usize) -> Self {
        self.min_selection_side = side.clamp(1, GRID_SIZE);
        self
    }

    /// Create a new config with history recording on or off.
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Create a new config with win locking on or off.
    pub fn with_lock_on_win(mut self, lock: bool) -> Self {
        self.lock_on_win = lock;
        self
    }

    /// Effective minimum side: at least 1 and at most the board side.
    #[must_use]
    pub fn min_side(&self) -> usize {
        self.min_selection_side.clamp(1, GRID_SIZE)
    }
}
