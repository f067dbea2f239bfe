//! Square region computation.
//!
//! A drag from `start` to `current` selects the largest square anchored at
//! `start` that extends toward `current` and stays on the board:
//!
//! - the side (minus one) is the larger of the row and column deltas
//! - the square grows in the direction of each delta (down/right when the
//!   delta is zero)
//! - the side is clamped by the distance from `start` to the board edge in
//!   both growth directions
//!
//! The result is recomputed from the two points on every pointer move; there
//! is nothing to cache or invalidate.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Region, GRID_SIZE};

/// A square of tiles chosen by a drag.
///
/// Always on the board and always square. `side` is in tiles, so a drag
/// that never left its starting tile has `side == 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SquareSelection {
    /// Drag anchor.
    pub start: Coord,
    /// Top-left tile (inclusive).
    pub top_left: Coord,
    /// Bottom-right tile (inclusive).
    pub bottom_right: Coord,
    /// Side length in tiles.
    pub side: usize,
}

impl SquareSelection {
    /// Compute the selection for a drag from `start` to `current`.
    ///
    /// Returns `None` if `start` is off the board. `current` may be anywhere.
    ///
    /// ```
    /// use eclipse_grid::core::Coord;
    /// use eclipse_grid::selection::SquareSelection;
    ///
    /// // Dragging up-left from (3, 3) past the board edge
    /// let sel = SquareSelection::compute(Coord::new(3, 3), Coord::new(-4, 1)).unwrap();
    /// assert_eq!(sel.top_left, Coord::new(0, 0));
    /// assert_eq!(sel.bottom_right, Coord::new(3, 3));
    /// assert_eq!(sel.side, 4);
    /// ```
    #[must_use]
    pub fn compute(start: Coord, current: Coord) -> Option<Self> {
        if !start.in_bounds() {
            return None;
        }

        let last = GRID_SIZE as i32 - 1;
        let dr = current.row.saturating_sub(start.row);
        let dc = current.col.saturating_sub(start.col);

        let sign_r = if dr >= 0 { 1 } else { -1 };
        let sign_c = if dc >= 0 { 1 } else { -1 };

        let size = dr.saturating_abs().max(dc.saturating_abs());

        // Room left on the board in each growth direction
        let limit_r = if sign_r > 0 { last - start.row } else { start.row };
        let limit_c = if sign_c > 0 { last - start.col } else { start.col };

        let actual = size.min(limit_r).min(limit_c);

        let end_r = start.row + sign_r * actual;
        let end_c = start.col + sign_c * actual;

        Some(Self {
            start,
            top_left: Coord::new(start.row.min(end_r), start.col.min(end_c)),
            bottom_right: Coord::new(start.row.max(end_r), start.col.max(end_c)),
            side: actual as usize + 1,
        })
    }

    /// Check if this selection is large enough to flip.
    #[must_use]
    pub fn is_valid(&self, min_side: usize) -> bool {
        self.side >= min_side
    }

    /// Check if `coord` is highlighted by this selection.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= self.top_left.row
            && coord.row <= self.bottom_right.row
            && coord.col >= self.top_left.col
            && coord.col <= self.bottom_right.col
    }

    /// The flip target for this selection.
    #[must_use]
    pub fn region(&self) -> Region {
        Region::square(self.top_left.row, self.top_left.col, self.side as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(start: (i32, i32), current: (i32, i32)) -> SquareSelection {
        SquareSelection::compute(start.into(), current.into()).unwrap()
    }

    #[test]
    fn test_no_movement_is_single_tile() {
        let s = sel((0, 0), (0, 0));
        assert_eq!(s.side, 1);
        assert_eq!(s.top_left, Coord::new(0, 0));
        assert_eq!(s.bottom_right, Coord::new(0, 0));
        assert!(!s.is_valid(2));
    }

    #[test]
    fn test_down_right() {
        let s = sel((1, 1), (2, 2));
        assert_eq!(s.side, 2);
        assert_eq!(s.region(), Region::square(1, 1, 2));
        assert!(s.is_valid(2));
    }

    #[test]
    fn test_larger_delta_wins() {
        // Row delta 1, column delta 3: side 4
        let s = sel((0, 0), (1, 3));
        assert_eq!(s.side, 4);
        assert_eq!(s.bottom_right, Coord::new(3, 3));
    }

    #[test]
    fn test_up_left_normalized() {
        let s = sel((4, 4), (2, 2));
        assert_eq!(s.top_left, Coord::new(2, 2));
        assert_eq!(s.bottom_right, Coord::new(4, 4));
        assert_eq!(s.region(), Region::square(2, 2, 3));
    }

    #[test]
    fn test_mixed_directions() {
        // Up and to the right
        let s = sel((3, 1), (2, 2));
        assert_eq!(s.top_left, Coord::new(2, 1));
        assert_eq!(s.bottom_right, Coord::new(3, 2));
        assert_eq!(s.side, 2);
    }

    #[test]
    fn test_zero_delta_grows_positive() {
        // Pure horizontal drag to the left still grows downward
        let s = sel((1, 3), (1, 1));
        assert_eq!(s.top_left, Coord::new(1, 1));
        assert_eq!(s.bottom_right, Coord::new(3, 3));
    }

    #[test]
    fn test_clamped_at_corner() {
        let s = sel((4, 4), (10, 10));
        assert_eq!(s.side, 1);
        assert!(!s.is_valid(2));

        let s = sel((2, 2), (10, 10));
        assert_eq!(s.top_left, Coord::new(2, 2));
        assert_eq!(s.bottom_right, Coord::new(4, 4));
        assert_eq!(s.side, 3);
    }

    #[test]
    fn test_clamped_by_tighter_axis() {
        // Plenty of room in rows, only one column to the right
        let s = sel((0, 3), (4, 4));
        assert_eq!(s.side, 2);
        assert_eq!(s.bottom_right, Coord::new(1, 4));
    }

    #[test]
    fn test_extreme_pointer() {
        let s = sel((2, 2), (i32::MIN, i32::MAX));
        assert!(s.top_left.in_bounds());
        assert!(s.bottom_right.in_bounds());
        assert_eq!(s.top_left, Coord::new(0, 2));
        assert_eq!(s.bottom_right, Coord::new(2, 4));
    }

    #[test]
    fn test_start_off_board() {
        assert!(SquareSelection::compute(Coord::new(-1, 0), Coord::new(2, 2)).is_none());
        assert!(SquareSelection::compute(Coord::new(5, 5), Coord::new(2, 2)).is_none());
    }

    #[test]
    fn test_contains() {
        let s = sel((1, 1), (3, 3));
        assert!(s.contains(Coord::new(1, 1)));
        assert!(s.contains(Coord::new(3, 3)));
        assert!(s.contains(Coord::new(2, 1)));
        assert!(!s.contains(Coord::new(0, 1)));
        assert!(!s.contains(Coord::new(4, 4)));
    }
}
