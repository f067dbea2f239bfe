//! GF(2) solver.
//!
//! A flip XORs the grid mask with the region mask, and flips commute, so a
//! solution is a subset of the move set whose masks XOR to the grid mask.
//! The solver:
//!
//! 1. Runs Gaussian elimination over the move masks, tracking which moves
//!    combine into each pivot row.
//! 2. Reduces the target mask to get one particular solution.
//! 3. Walks the null space (move subsets that XOR to zero) to find the
//!    subset with the fewest moves.
//!
//! For the default board (30 moves, rank 22) the null space has 2^8
//! elements, so step 3 is exhaustive.

use crate::core::{Grid, Region, CELL_COUNT, GRID_SIZE};
use crate::rules::Puzzle;

use super::solution::Solution;

/// Largest null-space dimension searched exhaustively.
///
/// Above this, the particular solution is returned as-is and marked
/// non-optimal.
pub const MAX_EXHAUSTIVE_NULLITY: usize = 16;

#[derive(Clone, Copy, Debug)]
struct Pivot {
    mask: u32,
    combo: u64,
}

/// Precomputed elimination for one move set.
#[derive(Clone, Debug)]
pub struct Solver {
    moves: Vec<Region>,
    pivots: [Option<Pivot>; CELL_COUNT],
    null_space: Vec<u64>,
}

impl Solver {
    /// Build a solver for square moves of side `min_side..=GRID_SIZE`.
    #[must_use]
    pub fn new(min_side: usize) -> Self {
        let n = GRID_SIZE as i32;
        let min_side = min_side.clamp(1, GRID_SIZE) as i32;

        let moves: Vec<Region> = (min_side..=n)
            .flat_map(|side| {
                (0..=n - side)
                    .flat_map(move |row| (0..=n - side).map(move |col| Region::square(row, col, side)))
            })
            .collect();
        debug_assert!(moves.len() <= 64, "move combos are tracked in a u64");

        let mut pivots = [None; CELL_COUNT];
        let mut null_space = Vec::new();

        for (index, region) in moves.iter().enumerate() {
            let (mask, combo) = reduce(&pivots, region.mask(), 1 << index);
            if mask == 0 {
                null_space.push(combo);
            } else {
                let bit = highest_bit(mask);
                pivots[bit] = Some(Pivot { mask, combo });
            }
        }

        log::debug!(
            "Solver ready: {} moves, rank {}, nullity {}",
            moves.len(),
            moves.len() - null_space.len(),
            null_space.len()
        );

        Self {
            moves,
            pivots,
            null_space,
        }
    }

    /// All candidate moves, smallest squares first.
    #[must_use]
    pub fn moves(&self) -> &[Region] {
        &self.moves
    }

    /// Number of independent move masks.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.moves.len() - self.null_space.len()
    }

    /// Dimension of the space of move subsets that change nothing.
    #[must_use]
    pub fn nullity(&self) -> usize {
        self.null_space.len()
    }

    /// Check if `grid` can be cleared to all-Moon.
    #[must_use]
    pub fn is_solvable(&self, grid: &Grid) -> bool {
        reduce(&self.pivots, grid.to_mask(), 0).0 == 0
    }

    /// Find a shortest list of flips that clears `grid`.
    ///
    /// Returns `None` if no combination of moves clears it. An already
    /// cleared grid yields an empty solution.
    #[must_use]
    pub fn solve(&self, grid: &Grid) -> Option<Solution> {
        let (rest, particular) = reduce(&self.pivots, grid.to_mask(), 0);
        if rest != 0 {
            return None;
        }

        let nullity = self.null_space.len();
        if nullity > MAX_EXHAUSTIVE_NULLITY {
            log::debug!("Nullity {nullity} too large for exhaustive search");
            return Some(Solution::new(self.regions(particular), false));
        }

        let mut best = particular;
        for subset in 1u64..(1 << nullity) {
            let combo = self
                .null_space
                .iter()
                .enumerate()
                .filter(|&(i, _)| subset >> i & 1 == 1)
                .fold(particular, |acc, (_, &null)| acc ^ null);
            if combo.count_ones() < best.count_ones() {
                best = combo;
            }
        }

        Some(Solution::new(self.regions(best), true))
    }

    /// Suggest the next flip for `puzzle`, or `None` if it is won or stuck.
    #[must_use]
    pub fn hint(&self, puzzle: &impl Puzzle) -> Option<Region> {
        if puzzle.is_won() {
            return None;
        }
        self.solve(puzzle.grid())?.regions().first().copied()
    }

    fn regions(&self, combo: u64) -> impl Iterator<Item = Region> + '_ {
        self.moves
            .iter()
            .enumerate()
            .filter(move |&(i, _)| combo >> i & 1 == 1)
            .map(|(_, &region)| region)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Eliminate `mask` against the pivots, highest bit first.
///
/// Returns the remainder and `combo` XORed with every pivot combo used.
fn reduce(pivots: &[Option<Pivot>; CELL_COUNT], mut mask: u32, mut combo: u64) -> (u32, u64) {
    for bit in (0..CELL_COUNT).rev() {
        if mask >> bit & 1 == 0 {
            continue;
        }
        if let Some(pivot) = pivots[bit] {
            mask ^= pivot.mask;
            combo ^= pivot.combo;
        }
    }
    (mask, combo)
}

fn highest_bit(mask: u32) -> usize {
    (u32::BITS - 1 - mask.leading_zeros()) as usize
}
