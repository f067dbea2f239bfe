//! Drag-to-select square regions.
//!
//! - `SquareSelection`: pure function from `(start, current)` to an
//!   on-board square
//! - `SelectionTracker`: the `Idle`/`Selecting` state machine that turns a
//!   pointer gesture into at most one flip target

pub mod square;
pub mod tracker;

pub use square::SquareSelection;
pub use tracker::{SelectionState, SelectionTracker};
