//! Board bindings for Python.

use numpy::PyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::{Board, Renderer, TextRenderer};
use crate::core::Coord;
use crate::levels::LevelRegistry;
use crate::rules::{LevelAdvance, Puzzle};
use crate::solver::Solver;

use super::py_core::{PyEngineConfig, PyRegion};

/// Python wrapper for Board.
///
/// A playable session with drag selection, levels and hints.
#[pyclass(name = "Board")]
pub struct PyBoard {
    board: Board,
    solver: Solver,
}

impl PyBoard {
    fn from_board(board: Board) -> Self {
        let solver = Solver::new(board.session().config().min_side());
        Self { board, solver }
    }
}

#[pymethods]
impl PyBoard {
    /// Create a board on the built-in levels.
    #[new]
    #[pyo3(signature = (config = None))]
    fn new(config: Option<PyEngineConfig>) -> Self {
        let config = config.map(|c| c.0).unwrap_or_default();
        Self::from_board(Board::with_levels(LevelRegistry::builtin(), config))
    }

    /// Create a board from a JSON level pack.
    #[staticmethod]
    #[pyo3(signature = (json, config = None))]
    fn from_json(json: &str, config: Option<PyEngineConfig>) -> PyResult<Self> {
        let levels = LevelRegistry::from_json(json)
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
        let config = config.map(|c| c.0).unwrap_or_default();
        Ok(Self::from_board(Board::with_levels(levels, config)))
    }

    /// Press on tile (row, col). Returns True if a drag started.
    fn pointer_down(&mut self, row: i32, col: i32) -> bool {
        self.board.pointer_down(Coord::new(row, col))
    }

    /// Move the drag onto (row, col).
    fn pointer_enter(&mut self, row: i32, col: i32) {
        self.board.pointer_enter(Coord::new(row, col));
    }

    /// Release. Returns True if a flip was applied.
    fn pointer_up(&mut self) -> bool {
        self.board.pointer_up().is_some_and(|o| o.is_applied())
    }

    /// Flip a region directly. Returns True if the flip counted as a move.
    fn flip(&mut self, region: &PyRegion) -> bool {
        self.board.flip(region.0).is_applied()
    }

    /// Restore the current level.
    fn reset_level(&mut self) {
        self.board.reset_level();
    }

    /// Advance to the next level. Returns False on the final level.
    fn next_level(&mut self) -> bool {
        matches!(self.board.next_level(), LevelAdvance::Advanced(_))
    }

    /// Jump to a level by play-order index.
    fn select_level(&mut self, index: usize) -> PyResult<()> {
        self.board
            .select_level(index)
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
    }

    /// Grid as nested lists of 0/1.
    fn grid(&self) -> Vec<Vec<u8>> {
        self.board
            .grid()
            .values()
            .iter()
            .map(|row| row.to_vec())
            .collect()
    }

    /// Grid as a 2D numpy array of 0/1.
    fn grid_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        PyArray2::from_vec2_bound(py, &self.grid())
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    /// Suggested next flip, or None if won or unsolvable.
    fn hint(&self) -> Option<PyRegion> {
        self.solver.hint(&self.board).map(PyRegion)
    }

    /// Minimal number of flips left, or None if unsolvable.
    fn moves_to_solve(&self) -> Option<usize> {
        self.solver.solve(self.board.grid()).map(|s| s.len())
    }

    /// Text rendering of the current frame.
    fn render(&self) -> String {
        TextRenderer::default().render(&self.board.frame())
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.board.moves()
    }

    #[getter]
    fn is_won(&self) -> bool {
        self.board.is_won()
    }

    #[getter]
    fn level_index(&self) -> usize {
        self.board.session().level_index()
    }

    #[getter]
    fn level_count(&self) -> usize {
        self.board.session().level_count()
    }

    #[getter]
    fn level_name(&self) -> String {
        self.board.session().current_level().name.clone()
    }

    #[getter]
    fn level_lore(&self) -> String {
        self.board.session().current_level().lore.clone()
    }

    /// Copy the board for lookahead.
    fn copy(&self) -> Self {
        Self {
            board: self.board.clone(),
            solver: self.solver.clone(),
        }
    }

    fn __repr__(&self) -> String {
        let status = if self.board.is_won() { "won" } else { "ongoing" };
        format!(
            "Board(level={}, moves={}, status={})",
            self.board.session().level_index(),
            self.board.moves(),
            status
        )
    }
}
