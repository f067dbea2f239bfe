//! Drag-selection state machine.
//!
//! ```text
//!          pointer_down(tile)             pointer_enter(tile)
//!   Idle ─────────────────────▶ Selecting ◀──────────────┐
//!    ▲                           │    └────────────────────┘
//!    └──────── pointer_up ───────┘
//! ```
//!
//! `pointer_up` always returns to `Idle`. It yields a flip target only if
//! the final square is at least `min_side` tiles wide.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Region, GRID_SIZE};

use super::square::SquareSelection;

/// Where the drag gesture is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    /// No drag in progress.
    #[default]
    Idle,
    /// Pointer is down. `start` is fixed for the gesture; `current` follows
    /// the pointer.
    Selecting { start: Coord, current: Coord },
}

/// Tracks one drag gesture at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionTracker {
    state: SelectionState,
    min_side: usize,
}

impl SelectionTracker {
    /// Create an idle tracker that accepts squares of at least `min_side`
    /// (clamped to `1..=GRID_SIZE`).
    #[must_use]
    pub fn new(min_side: usize) -> Self {
        Self {
            state: SelectionState::Idle,
            min_side: min_side.clamp(1, GRID_SIZE),
        }
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    #[must_use]
    pub fn min_side(&self) -> usize {
        self.min_side
    }

    #[must_use]
    pub fn is_selecting(&self) -> bool {
        matches!(self.state, SelectionState::Selecting { .. })
    }

    /// Begin a drag on tile `at`.
    ///
    /// Returns false (and stays as-is) if `at` is off the board. A press
    /// during an unfinished drag restarts it from `at`.
    pub fn pointer_down(&mut self, at: Coord) -> bool {
        if !at.in_bounds() {
            log::trace!("Pointer down off board at {at}");
            return false;
        }
        log::trace!("Selection started at {at}");
        self.state = SelectionState::Selecting {
            start: at,
            current: at,
        };
        true
    }

    /// Move the drag to `at`. Ignored while idle.
    pub fn pointer_enter(&mut self, at: Coord) {
        if let SelectionState::Selecting { current, .. } = &mut self.state {
            *current = at;
        }
    }

    /// Finish the drag.
    ///
    /// Returns the flip target if the final square is valid. The tracker is
    /// idle afterwards either way.
    pub fn pointer_up(&mut self) -> Option<Region> {
        let selection = self.selection();
        self.state = SelectionState::Idle;

        let selection = selection?;
        if selection.is_valid(self.min_side) {
            log::debug!("Selection released: {}", selection.region());
            Some(selection.region())
        } else {
            log::debug!("Selection released below minimum side {}", self.min_side);
            None
        }
    }

    /// Abandon the drag without flipping.
    pub fn cancel(&mut self) {
        self.state = SelectionState::Idle;
    }

    /// The square that would be flipped if released now.
    #[must_use]
    pub fn selection(&self) -> Option<SquareSelection> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Selecting { start, current } => SquareSelection::compute(start, current),
        }
    }

    /// Check if releasing now would flip something.
    #[must_use]
    pub fn is_valid_now(&self) -> bool {
        self.selection().is_some_and(|s| s.is_valid(self.min_side))
    }

    /// Check if `coord` is highlighted by the live selection.
    #[must_use]
    pub fn is_highlighted(&self, coord: Coord) -> bool {
        self.selection().is_some_and(|s| s.contains(coord))
    }
}

impl Default for SelectionTracker {
    fn default() -> Self {
        Self::new(2)
    }
}
