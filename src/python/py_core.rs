//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{EngineConfig, Region};

/// Python wrapper for Region.
#[pyclass(name = "Region")]
#[derive(Clone, Debug)]
pub struct PyRegion(pub Region);

#[pymethods]
impl PyRegion {
    /// Create a new region from its top-left corner and extents.
    #[new]
    #[pyo3(signature = (row, col, width, height = None))]
    fn new(row: i32, col: i32, width: i32, height: Option<i32>) -> Self {
        Self(Region::new(row, col, width, height.unwrap_or(width)))
    }

    #[getter]
    fn row(&self) -> i32 {
        self.0.row
    }

    #[getter]
    fn col(&self) -> i32 {
        self.0.col
    }

    #[getter]
    fn width(&self) -> i32 {
        self.0.width
    }

    #[getter]
    fn height(&self) -> i32 {
        self.0.height
    }

    fn __repr__(&self) -> String {
        format!(
            "Region(row={}, col={}, width={}, height={})",
            self.0.row, self.0.col, self.0.width, self.0.height
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

/// Python wrapper for EngineConfig.
#[pyclass(name = "EngineConfig")]
#[derive(Clone, Debug)]
pub struct PyEngineConfig(pub EngineConfig);

#[pymethods]
impl PyEngineConfig {
    /// Create a new engine configuration.
    ///
    /// # Arguments
    /// - min_selection_side: Smallest square a drag must cover to flip (default: 2)
    /// - record_history: Keep a per-level move history (default: True)
    /// - lock_on_win: Ignore flips once the level is won (default: True)
    #[new]
    #[pyo3(signature = (min_selection_side = 2, record_history = true, lock_on_win = true))]
    fn new(min_selection_side: usize, record_history: bool, lock_on_win: bool) -> Self {
        Self(
            EngineConfig::default()
                .with_min_selection_side(min_selection_side)
                .with_history(record_history)
                .with_lock_on_win(lock_on_win),
        )
    }

    #[getter]
    fn min_selection_side(&self) -> usize {
        self.0.min_selection_side
    }

    #[getter]
    fn record_history(&self) -> bool {
        self.0.record_history
    }

    #[getter]
    fn lock_on_win(&self) -> bool {
        self.0.lock_on_win
    }

    fn __repr__(&self) -> String {
        format!(
            "EngineConfig(min_selection_side={}, record_history={}, lock_on_win={})",
            self.0.min_selection_side, self.0.record_history, self.0.lock_on_win
        )
    }
}
