//! Board controller: session plus drag selection.
//!
//! The presentation layer owns one `Board`. Pointer events go to the
//! selection tracker; a completed valid drag becomes exactly one flip on
//! the session. Level chrome (reset, next level) talks to the session
//! directly and does not touch the selection.

use crate::core::{Coord, EngineConfig, Grid, Region, SessionEvent};
use crate::levels::{LevelError, LevelRegistry};
use crate::rules::{FlipOutcome, LevelAdvance, Puzzle, Session};
use crate::selection::SelectionTracker;

use super::input::PointerEvent;
use super::render::Frame;

/// A playable board.
///
/// ## Example
///
/// ```
/// use eclipse_grid::board::{Board, PointerEvent};
/// use eclipse_grid::core::Coord;
///
/// let mut board = Board::new();
/// let mut outcome = None;
/// for event in PointerEvent::drag(Coord::new(0, 0), Coord::new(4, 4)) {
///     outcome = board.handle(event).or(outcome);
/// }
///
/// assert!(outcome.unwrap().is_win());
/// assert_eq!(board.session().moves(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    session: Session,
    selection: SelectionTracker,
}

impl Board {
    /// A board on the built-in levels with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::with_session(Session::new())
    }

    /// A board on a custom level set.
    #[must_use]
    pub fn with_levels(levels: LevelRegistry, config: EngineConfig) -> Self {
        Self::with_session(Session::with_levels(levels, config))
    }

    /// Wrap an existing session.
    #[must_use]
    pub fn with_session(session: Session) -> Self {
        let selection = SelectionTracker::new(session.config().min_side());
        Self { session, selection }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    // === Pointer Input ===

    /// Dispatch one pointer event.
    ///
    /// Returns the flip outcome when the event completed a valid drag.
    pub fn handle(&mut self, event: PointerEvent) -> Option<FlipOutcome> {
        log::trace!("Pointer event {event:?}");
        match event {
            PointerEvent::Down(at) => {
                self.pointer_down(at);
                None
            }
            PointerEvent::Enter(at) => {
                self.pointer_enter(at);
                None
            }
            PointerEvent::Up => self.pointer_up(),
        }
    }

    /// Start a drag on tile `at`.
    ///
    /// Ignored while the level is won (and flips are locked) or when `at`
    /// is off the board. Returns whether a drag started.
    pub fn pointer_down(&mut self, at: Coord) -> bool {
        if self.flips_locked() {
            log::trace!("Pointer down ignored: level won");
            return false;
        }
        self.selection.pointer_down(at)
    }

    /// Extend the drag to `at`.
    pub fn pointer_enter(&mut self, at: Coord) {
        self.selection.pointer_enter(at);
    }

    /// Finish the drag, flipping the selected square if it is valid.
    pub fn pointer_up(&mut self) -> Option<FlipOutcome> {
        let region = self.selection.pointer_up()?;
        Some(self.session.flip(region))
    }

    /// Abandon the current drag.
    pub fn cancel_selection(&mut self) {
        self.selection.cancel();
    }

    // === Level Chrome ===

    pub fn reset_level(&mut self) {
        self.session.reset_level();
    }

    /// Advance to the next level. A drag begun on the old level is dropped.
    pub fn next_level(&mut self) -> LevelAdvance {
        let advance = self.session.next_level();
        if let LevelAdvance::Advanced(_) = advance {
            self.cancel_selection();
        }
        advance
    }

    /// Jump to a level. A drag begun on the old level is dropped.
    pub fn select_level(&mut self, index: usize) -> Result<(), LevelError> {
        self.session.select_level(index)?;
        self.cancel_selection();
        Ok(())
    }

    /// Take all session events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.session.drain_events()
    }

    // === Presentation ===

    /// Snapshot of everything a renderer draws.
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            grid: self.session.grid(),
            selection: self.selection.selection(),
            selection_valid: self.selection.is_valid_now(),
            won: self.session.is_won(),
            level: self.session.current_level(),
            level_index: self.session.level_index(),
            level_count: self.session.level_count(),
            moves: self.session.moves(),
        }
    }

    fn flips_locked(&self) -> bool {
        self.session.is_won() && self.session.config().lock_on_win
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Puzzle for Board {
    fn grid(&self) -> &Grid {
        self.session.grid()
    }

    fn moves(&self) -> u32 {
        self.session.moves()
    }

    fn is_won(&self) -> bool {
        self.session.is_won()
    }

    fn flip(&mut self, region: Region) -> FlipOutcome {
        self.session.flip(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    fn drag(board: &mut Board, from: (i32, i32), to: (i32, i32)) -> Option<FlipOutcome> {
        PointerEvent::drag(from.into(), to.into())
            .into_iter()
            .fold(None, |last, event| board.handle(event).or(last))
    }

    #[test]
    fn test_click_does_not_flip() {
        let mut board = Board::new();
        assert_eq!(drag(&mut board, (0, 0), (0, 0)), None);
        assert_eq!(board.session().moves(), 0);
        assert_eq!(*board.session().grid(), Grid::filled(Cell::Sun));
    }

    #[test]
    fn test_full_drag_wins_spark() {
        let mut board = Board::new();
        let outcome = drag(&mut board, (0, 0), (4, 4));

        assert_eq!(outcome, Some(FlipOutcome::Applied { cells_flipped: 25, won: true }));
        assert!(board.session().is_won());
        assert_eq!(board.session().moves(), 1);
    }

    #[test]
    fn test_drag_from_final_corner_outward_does_nothing() {
        let mut board = Board::new();
        assert_eq!(drag(&mut board, (4, 4), (10, 10)), None);
        assert_eq!(board.session().moves(), 0);
    }

    #[test]
    fn test_drag_past_edge_clamps() {
        let mut board = Board::new();
        let outcome = drag(&mut board, (2, 2), (10, 10));
        assert_eq!(outcome, Some(FlipOutcome::Applied { cells_flipped: 9, won: false }));

        let grid = board.session().grid();
        assert_eq!(grid.get(Coord::new(2, 2)), Some(Cell::Moon));
        assert_eq!(grid.get(Coord::new(4, 4)), Some(Cell::Moon));
        assert_eq!(grid.get(Coord::new(1, 1)), Some(Cell::Sun));
    }

    #[test]
    fn test_pointer_down_ignored_when_won() {
        let mut board = Board::new();
        drag(&mut board, (0, 0), (4, 4));

        assert!(!board.pointer_down(Coord::new(0, 0)));
        assert!(!board.selection().is_selecting());
        assert_eq!(board.pointer_up(), None);
    }

    #[test]
    fn test_up_without_down() {
        let mut board = Board::new();
        assert_eq!(board.handle(PointerEvent::Up), None);
        assert_eq!(board.session().moves(), 0);
    }

    #[test]
    fn test_frame_reflects_selection() {
        let mut board = Board::new();
        board.pointer_down(Coord::new(1, 1));

        let frame = board.frame();
        assert_eq!(frame.selection.map(|s| s.side), Some(1));
        assert!(!frame.selection_valid);

        board.pointer_enter(Coord::new(2, 2));
        let frame = board.frame();
        assert!(frame.selection_valid);
        assert_eq!(frame.level.name, "The Spark");
        assert_eq!(frame.level_count, 5);
    }

    #[test]
    fn test_next_level_via_board() {
        let mut board = Board::new();
        drag(&mut board, (0, 0), (4, 4));

        assert_eq!(board.next_level(), LevelAdvance::Advanced(1));
        assert_eq!(board.frame().level.name, "The Void");
        assert!(!board.frame().won);
    }
}
