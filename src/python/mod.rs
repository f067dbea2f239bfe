//! Python bindings for the eclipse-grid puzzle engine.
//!
//! # Quick Start
//!
//! ```python
//! import eclipse_grid as eg
//!
//! board = eg.Board()
//! board.pointer_down(0, 0)
//! board.pointer_enter(4, 4)
//! board.pointer_up()
//! assert board.is_won
//!
//! board.next_level()
//! print(board.render())
//! print(board.hint())
//! ```

use pyo3::prelude::*;

mod py_board;
mod py_core;

pub use py_board::*;
pub use py_core::*;

/// eclipse_grid: Sun/Moon square-flip puzzle engine.
///
/// This module provides:
/// - Board with drag selection and level progression
/// - Region and EngineConfig value types
/// - Solver-backed hints
#[pymodule]
fn eclipse_grid(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRegion>()?;
    m.add_class::<PyEngineConfig>()?;
    m.add_class::<PyBoard>()?;

    Ok(())
}
