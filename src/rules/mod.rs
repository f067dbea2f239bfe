//! Puzzle rules: the session state machine.
//!
//! `Session` owns the live grid and implements:
//! - Region flips with off-board clamping
//! - Win detection over the whole grid
//! - Reset and level progression
//!
//! The `Puzzle` trait is the narrow interface (read grid, issue flip) that
//! solutions and front-ends program against.

pub mod engine;
pub mod session;

pub use engine::{FlipOutcome, LevelAdvance, Puzzle};
pub use session::Session;
