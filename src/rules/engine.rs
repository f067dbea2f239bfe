//! Puzzle trait for anything that accepts flips.
//!
//! `Session` implements the rules. `Board` forwards to its session. Code
//! that only needs to read the grid and issue flips (solutions, bindings,
//! tests) takes `impl Puzzle` and works with either.

use crate::core::{Grid, Region};

/// Result of a flip request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The level is already won; nothing changed and no move was counted.
    Locked,
    /// The flip was applied and counted as a move.
    Applied {
        /// Tiles actually flipped. 0 if the region was entirely off the board.
        cells_flipped: usize,
        /// Whether the grid is all-Moon after the flip.
        won: bool,
    },
}

impl FlipOutcome {
    /// Check if this flip counted as a move.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, FlipOutcome::Applied { .. })
    }

    /// Check if this flip solved the level.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, FlipOutcome::Applied { won: true, .. })
    }
}

/// Result of a `next_level` request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelAdvance {
    /// Moved to the level at this index.
    Advanced(usize),
    /// Already on the final level; nothing changed.
    AllComplete,
}

/// A flippable puzzle.
///
/// ## Implementation Notes
///
/// - `flip`: must never panic, whatever the region
/// - `is_won`: must equal `grid().is_all_moon()` after every flip
pub trait Puzzle {
    /// Current tiles.
    fn grid(&self) -> &Grid;

    /// Moves made on the current level.
    fn moves(&self) -> u32;

    /// Whether the current level is solved.
    fn is_won(&self) -> bool;

    /// Flip every on-board tile in `region`.
    fn flip(&mut self, region: Region) -> FlipOutcome;

    // === Convenience Methods ===

    /// Apply regions in order, stopping early if a flip is locked out.
    ///
    /// Returns the number of flips applied.
    fn flip_all<I>(&mut self, regions: I) -> usize
    where
        I: IntoIterator<Item = Region>,
        Self: Sized,
    {
        let mut applied = 0;
        for region in regions {
            if !self.flip(region).is_applied() {
                break;
            }
            applied += 1;
        }
        applied
    }
}
