//! Drag-selection tests through the board controller.
//!
//! These tests feed pointer event sequences to `Board` and check:
//! - Exactly one flip per completed valid drag
//! - No flip for clicks or single-tile selections
//! - Clamping when the pointer leaves the board

use eclipse_grid::board::{Board, PointerEvent, Renderer, TextRenderer};
use eclipse_grid::core::{Cell, Coord, EngineConfig, Grid, Region};
use eclipse_grid::levels::LevelRegistry;
use eclipse_grid::rules::{FlipOutcome, Puzzle};
use eclipse_grid::selection::{SelectionState, SquareSelection};
use eclipse_grid::solver::Solver;

fn play(board: &mut Board, events: &[PointerEvent]) -> Vec<FlipOutcome> {
    events.iter().filter_map(|&e| board.handle(e)).collect()
}

fn c(row: i32, col: i32) -> Coord {
    Coord::new(row, col)
}

// =============================================================================
// Validity
// =============================================================================

#[test]
fn test_click_never_flips() {
    let mut board = Board::new();

    for coord in Coord::all() {
        let outcomes = play(&mut board, &[PointerEvent::Down(coord), PointerEvent::Up]);
        assert!(outcomes.is_empty(), "click at {coord} flipped");
    }

    assert_eq!(board.moves(), 0);
    assert_eq!(*board.grid(), Grid::filled(Cell::Sun));
}

#[test]
fn test_released_back_on_start_does_not_flip() {
    let mut board = Board::new();
    let outcomes = play(
        &mut board,
        &[
            PointerEvent::Down(c(2, 2)),
            PointerEvent::Enter(c(3, 3)),
            PointerEvent::Enter(c(4, 4)),
            PointerEvent::Enter(c(2, 2)),
            PointerEvent::Up,
        ],
    );

    assert!(outcomes.is_empty());
    assert_eq!(board.moves(), 0);
}

#[test]
fn test_one_flip_per_gesture() {
    let mut board = Board::new();
    let outcomes = play(
        &mut board,
        &[
            PointerEvent::Down(c(0, 0)),
            PointerEvent::Enter(c(0, 1)),
            PointerEvent::Enter(c(1, 1)),
            PointerEvent::Enter(c(2, 2)),
            PointerEvent::Up,
            PointerEvent::Up,
        ],
    );

    assert_eq!(outcomes, vec![FlipOutcome::Applied { cells_flipped: 9, won: false }]);
    assert_eq!(board.moves(), 1);
    assert_eq!(board.selection().state(), SelectionState::Idle);
}

// =============================================================================
// Clamping
// =============================================================================

#[test]
fn test_corner_drag_outward_is_single_tile() {
    let sel = SquareSelection::compute(c(4, 4), c(10, 10)).unwrap();
    assert_eq!(sel.side, 1);
    assert_eq!(sel.top_left, c(4, 4));
    assert_eq!(sel.bottom_right, c(4, 4));

    let mut board = Board::new();
    let outcomes = play(&mut board, &PointerEvent::drag(c(4, 4), c(10, 10)));
    assert!(outcomes.is_empty());
    assert_eq!(board.moves(), 0);
}

#[test]
fn test_drag_past_edge_flips_feasible_square() {
    let mut board = Board::new();
    let outcomes = play(&mut board, &PointerEvent::drag(c(1, 1), c(-5, -5)));

    assert_eq!(outcomes, vec![FlipOutcome::Applied { cells_flipped: 4, won: false }]);
    let grid = board.grid();
    for coord in Region::square(0, 0, 2).cells() {
        assert_eq!(grid.get(coord), Some(Cell::Moon));
    }
    assert_eq!(grid.sun_count(), 21);
}

#[test]
fn test_every_selection_is_on_board_and_square() {
    for start in Coord::all() {
        for row in -6..=10 {
            for col in -6..=10 {
                let sel = SquareSelection::compute(start, c(row, col)).unwrap();
                assert!(sel.top_left.in_bounds());
                assert!(sel.bottom_right.in_bounds());
                assert_eq!(sel.bottom_right.row - sel.top_left.row + 1, sel.side as i32);
                assert_eq!(sel.bottom_right.col - sel.top_left.col + 1, sel.side as i32);
                assert!(sel.contains(start));
            }
        }
    }
}

// =============================================================================
// Interaction with session state
// =============================================================================

#[test]
fn test_drag_ignored_after_win_until_next_level() {
    let mut board = Board::new();
    play(&mut board, &PointerEvent::drag(c(0, 0), c(4, 4)));
    assert!(board.is_won());

    assert!(play(&mut board, &PointerEvent::drag(c(0, 0), c(1, 1))).is_empty());

    board.next_level();
    let outcomes = play(&mut board, &PointerEvent::drag(c(0, 0), c(4, 4)));
    assert_eq!(outcomes.len(), 1);
}

#[test]
fn test_reset_mid_drag_keeps_selection() {
    let mut board = Board::new();
    board.pointer_down(c(0, 0));
    board.pointer_enter(c(1, 1));
    board.reset_level();

    assert!(board.selection().is_selecting());
    assert!(board.pointer_up().is_some());
}

#[test]
fn test_custom_min_side() {
    let config = EngineConfig::default().with_min_selection_side(3);
    let mut board = Board::with_levels(LevelRegistry::builtin(), config);

    assert!(play(&mut board, &PointerEvent::drag(c(0, 0), c(1, 1))).is_empty());
    assert_eq!(play(&mut board, &PointerEvent::drag(c(0, 0), c(2, 2))).len(), 1);
}

#[test]
fn test_oversized_min_side_still_allows_full_board() {
    let config = EngineConfig::default().with_min_selection_side(9);
    let solver = Solver::new(config.min_side());
    let mut board = Board::with_levels(LevelRegistry::builtin(), config);

    assert_eq!(board.selection().min_side(), 5);
    assert_eq!(solver.hint(&board), Some(Region::square(0, 0, 5)));
    assert!(play(&mut board, &PointerEvent::drag(c(0, 0), c(3, 3))).is_empty());

    let outcomes = play(&mut board, &PointerEvent::drag(c(0, 0), c(4, 4)));
    assert_eq!(outcomes, vec![FlipOutcome::Applied { cells_flipped: 25, won: true }]);
}

#[test]
fn test_level_change_drops_drag() {
    let mut board = Board::new();
    board.pointer_down(c(0, 0));
    board.pointer_enter(c(2, 2));

    board.next_level();
    assert!(!board.selection().is_selecting());
    assert_eq!(board.pointer_up(), None);
    assert_eq!(board.moves(), 0);

    board.pointer_down(c(1, 1));
    board.select_level(3).unwrap();
    assert!(!board.selection().is_selecting());

    assert!(board.select_level(9).is_err());
}

#[test]
fn test_cancel_mid_drag() {
    let mut board = Board::new();
    board.handle(PointerEvent::Down(c(0, 0)));
    board.handle(PointerEvent::Enter(c(4, 4)));
    board.cancel_selection();

    assert!(board.frame().selection.is_none());
    assert_eq!(board.handle(PointerEvent::Up), None);
    assert_eq!(*board.grid(), Grid::filled(Cell::Sun));
}

#[test]
fn test_recorded_gesture_replay() {
    let recorded = r#"[
        {"Down": {"row": 0, "col": 0}},
        {"Enter": {"row": 4, "col": 4}},
        "Up",
        {"Down": {"row": 1, "col": 1}},
        {"Enter": {"row": 3, "col": 3}},
        "Up"
    ]"#;
    let events: Vec<PointerEvent> = serde_json::from_str(recorded).unwrap();

    let mut board = Board::new();
    board.next_level();
    let outcomes = play(&mut board, &events);

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[1].is_win());
    assert_eq!(board.moves(), 2);
}

#[test]
fn test_render_during_drag() {
    let mut board = Board::new();
    board.pointer_down(c(3, 3));
    board.pointer_enter(c(4, 4));

    let text = TextRenderer { show_header: false }.render(&board.frame());
    let rows: Vec<&str> = text.lines().collect();

    assert_eq!(rows[2], " #  #  #  #  # ");
    assert_eq!(rows[3], " #  #  # [#][#]");
    assert_eq!(rows[4], " #  #  # [#][#]");
}
