//! Optimal solver and hint provider.
//!
//! Treats the board as a vector over GF(2): see `search` for the method.
//! Used to verify that level sets are solvable and to offer hints.
//!
//! ```
//! use eclipse_grid::levels::LevelRegistry;
//! use eclipse_grid::solver::Solver;
//!
//! let solver = Solver::default();
//! for level in LevelRegistry::builtin().iter() {
//!     assert!(solver.is_solvable(&level.initial_grid));
//! }
//! ```

pub mod search;
pub mod solution;

pub use search::{Solver, MAX_EXHAUSTIVE_NULLITY};
pub use solution::Solution;
