//! Core engine types: cells, coordinates, grid, regions, events, configuration.
//!
//! These are value types with no knowledge of levels or sessions.

pub mod cell;
pub mod coord;
pub mod grid;
pub mod action;
pub mod event;
pub mod config;

pub use cell::Cell;
pub use coord::Coord;
pub use grid::{Grid, GridError, CELL_COUNT, GRID_SIZE};
pub use action::{FlipRecord, Region};
pub use event::SessionEvent;
pub use config::EngineConfig;
