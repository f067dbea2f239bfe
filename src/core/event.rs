//! Session events.
//!
//! The session queues an event for every observable transition. The
//! presentation layer drains the queue after each input to trigger effects
//! (flip animations, the win overlay, a "game complete" screen) without
//! diffing state.

use serde::{Deserialize, Serialize};

use super::action::Region;

/// Something observable that happened in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A level was loaded (at startup, by `next_level`, or by level select).
    LevelStarted { level_index: usize },

    /// The current level was restored to its initial grid.
    LevelReset { level_index: usize },

    /// A flip was applied.
    Flipped { region: Region, cells_flipped: usize },

    /// The grid reached all-Moon.
    Won { level_index: usize, moves: u32 },

    /// `next_level` was requested on the final level.
    AllLevelsComplete,
}
