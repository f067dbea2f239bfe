//! Solver output.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Region;
use crate::rules::Puzzle;

/// A set of flips that clears a grid.
///
/// Flips commute, so the order is only a presentation choice (smallest
/// squares first). SmallVec keeps typical solutions (under 8 moves) off
/// the heap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    regions: SmallVec<[Region; 8]>,
    optimal: bool,
}

impl Solution {
    /// Create a solution from its flips.
    #[must_use]
    pub fn new(regions: impl IntoIterator<Item = Region>, optimal: bool) -> Self {
        Self {
            regions: regions.into_iter().collect(),
            optimal,
        }
    }

    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Number of flips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Check if no shorter solution exists.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.optimal
    }

    /// Play every flip on `puzzle`.
    ///
    /// Returns the number of flips applied; fewer than `len()` only if the
    /// puzzle locked early.
    pub fn apply_to<P: Puzzle>(&self, puzzle: &mut P) -> usize {
        puzzle.flip_all(self.regions.iter().copied())
    }
}
