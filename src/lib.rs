//! # eclipse-grid
//!
//! Engine for a single-player Sun/Moon puzzle: a 5×5 board of two-faced
//! tiles where the player drags out a square and flips every tile in it,
//! aiming to turn the whole board to Moon.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: The session is a value owned by the caller. No
//!    global store, no interior mutability.
//!
//! 2. **Total Operations**: Flips, resets and level changes never fail.
//!    Out-of-range regions are clamped to the board. Errors exist only at
//!    the edges (parsing grids, loading level packs, selecting a level).
//!
//! 3. **Pure Selection**: The dragged square is a pure function of the
//!    drag's start and current tiles, so it is always square, always on
//!    the board, and trivial to test.
//!
//! ## Modules
//!
//! - `core`: Cells, coordinates, grid, regions, events, configuration
//! - `levels`: Level definitions, built-in levels, JSON level packs
//! - `rules`: `Session` state machine and the `Puzzle` trait
//! - `selection`: Square computation and the drag state machine
//! - `board`: Pointer input, controller, rendering boundary
//! - `solver`: Minimal-flip solutions and hints

pub mod core;
pub mod levels;
pub mod rules;
pub mod selection;
pub mod board;
pub mod solver;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Cell, Coord, Grid, GridError, GRID_SIZE,
    Region, FlipRecord, SessionEvent, EngineConfig,
};

pub use crate::levels::{Level, LevelId, LevelRegistry, LevelError};

pub use crate::rules::{Session, Puzzle, FlipOutcome, LevelAdvance};

pub use crate::selection::{SquareSelection, SelectionState, SelectionTracker};

pub use crate::board::{Board, PointerEvent, Frame, Renderer, TextRenderer};

pub use crate::solver::{Solver, Solution};
