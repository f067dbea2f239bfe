//! Level definitions and the ordered level registry.
//!
//! - `Level`: immutable puzzle definition (id, name, lore, initial grid)
//! - `LevelRegistry`: play order plus lookup by id
//! - `builtin`: the compiled-in level set

pub mod builtin;
pub mod definition;
pub mod registry;

pub use definition::{Level, LevelId};
pub use registry::{LevelError, LevelRegistry};
