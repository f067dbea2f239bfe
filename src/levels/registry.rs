//! Ordered level registry.
//!
//! The registry fixes the play order of a level set and provides lookup by
//! position (what sessions use) and by `LevelId` (what level-select chrome
//! and level packs use). A registry is never empty and never holds two
//! levels with the same id or a level that starts out solved.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::builtin;
use super::definition::{Level, LevelId};

/// Errors from building a registry or addressing a level in it.
#[derive(Debug, Error)]
pub enum LevelError {
    /// A level set must contain at least one level.
    #[error("level set is empty")]
    Empty,

    /// Two levels share an id.
    #[error("duplicate level id {0}")]
    DuplicateId(LevelId),

    /// A level whose starting grid is already all-Moon.
    #[error("level {0} starts out solved")]
    TrivialLevel(LevelId),

    /// A level index past the end of the set.
    #[error("level index {index} out of range ({len} levels)")]
    OutOfRange { index: usize, len: usize },

    /// A level pack that is not valid JSON or has malformed grids.
    #[error("invalid level pack: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered, non-empty set of levels.
///
/// ## Example
///
/// ```
/// use eclipse_grid::levels::{LevelId, LevelRegistry};
///
/// let registry = LevelRegistry::builtin();
/// assert_eq!(registry.len(), 5);
///
/// let index = registry.position(LevelId::new(3)).unwrap();
/// assert_eq!(registry.get(index).unwrap().name, "The Corner");
/// ```
#[derive(Clone, Debug)]
pub struct LevelRegistry {
    levels: Vec<Level>,
    by_id: FxHashMap<LevelId, usize>,
}

impl LevelRegistry {
    /// The compiled-in level set.
    #[must_use]
    pub fn builtin() -> Self {
        let levels = builtin::levels();
        let by_id = levels
            .iter()
            .enumerate()
            .map(|(index, level)| (level.id, index))
            .collect();
        Self { levels, by_id }
    }

    /// Build a registry from levels in play order.
    pub fn from_levels(levels: Vec<Level>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::Empty);
        }

        let mut by_id = FxHashMap::default();
        for (index, level) in levels.iter().enumerate() {
            if by_id.insert(level.id, index).is_some() {
                return Err(LevelError::DuplicateId(level.id));
            }
            if level.is_trivial() {
                return Err(LevelError::TrivialLevel(level.id));
            }
        }

        Ok(Self { levels, by_id })
    }

    /// Parse a JSON level pack: an array of level objects in play order.
    ///
    /// ```json
    /// [{"id": 1, "name": "Noon", "lore": "", "initial_grid": [[1,1,1,1,1], ...]}]
    /// ```
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let levels: Vec<Level> = serde_json::from_str(json)?;
        let registry = Self::from_levels(levels)?;
        log::debug!("Loaded level pack with {} levels", registry.len());
        Ok(registry)
    }

    /// Serialize this level set as a JSON level pack.
    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(&self.levels)?)
    }

    /// Get the level at `index` in play order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// Get the level at `index`, or an `OutOfRange` error.
    pub fn try_get(&self, index: usize) -> Result<&Level, LevelError> {
        self.levels.get(index).ok_or(LevelError::OutOfRange {
            index,
            len: self.levels.len(),
        })
    }

    /// Find a level by id.
    #[must_use]
    pub fn find(&self, id: LevelId) -> Option<&Level> {
        self.position(id).and_then(|index| self.get(index))
    }

    /// Play-order position of a level id.
    #[must_use]
    pub fn position(&self, id: LevelId) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// Number of levels (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Index of the final level.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.levels.len() - 1
    }

    /// All levels in play order.
    #[must_use]
    pub fn as_slice(&self) -> &[Level] {
        &self.levels
    }

    /// Iterate over levels in play order.
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Grid};

    fn level(id: u32) -> Level {
        Level::new(LevelId::new(id), format!("L{id}"), "", Grid::filled(Cell::Sun))
    }

    #[test]
    fn test_builtin() {
        let registry = LevelRegistry::builtin();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.last_index(), 4);
        assert!(!registry.is_empty());
        assert_eq!(registry.find(LevelId::new(5)).unwrap().name, "Duality");
        assert!(registry.find(LevelId::new(99)).is_none());
    }

    #[test]
    fn test_from_levels_keeps_order() {
        let registry = LevelRegistry::from_levels(vec![level(30), level(10), level(20)]).unwrap();

        let names: Vec<_> = registry.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["L30", "L10", "L20"]);
        assert_eq!(registry.position(LevelId::new(10)), Some(1));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(LevelRegistry::from_levels(vec![]), Err(LevelError::Empty)));
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = LevelRegistry::from_levels(vec![level(1), level(2), level(1)]);
        assert!(matches!(result, Err(LevelError::DuplicateId(id)) if id == LevelId::new(1)));
    }

    #[test]
    fn test_solved_level_rejected() {
        let dusk = Level::new(LevelId::new(2), "Dusk", "", Grid::filled(Cell::Moon));
        let result = LevelRegistry::from_levels(vec![level(1), dusk]);
        assert!(matches!(result, Err(LevelError::TrivialLevel(id)) if id == LevelId::new(2)));
    }

    #[test]
    fn test_json_rejects_solved_grid() {
        let json = r#"[{"id": 4, "name": "Night",
            "initial_grid": [[0,0,0,0,0],[0,0,0,0,0],[0,0,0,0,0],[0,0,0,0,0],[0,0,0,0,0]]}]"#;
        assert!(matches!(
            LevelRegistry::from_json(json),
            Err(LevelError::TrivialLevel(id)) if id == LevelId::new(4)
        ));
    }

    #[test]
    fn test_try_get() {
        let registry = LevelRegistry::builtin();
        assert!(registry.try_get(4).is_ok());
        assert!(matches!(
            registry.try_get(5),
            Err(LevelError::OutOfRange { index: 5, len: 5 })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let registry = LevelRegistry::builtin();
        let json = registry.to_json().unwrap();
        let back = LevelRegistry::from_json(&json).unwrap();

        assert_eq!(back.len(), registry.len());
        for (a, b) in registry.iter().zip(back.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_json_rejects_bad_cell() {
        let json = r#"[{"id": 1, "name": "Bad",
            "initial_grid": [[2,0,0,0,0],[0,0,0,0,0],[0,0,0,0,0],[0,0,0,0,0],[0,0,0,0,0]]}]"#;
        assert!(matches!(LevelRegistry::from_json(json), Err(LevelError::Json(_))));
    }

    #[test]
    fn test_json_rejects_short_row() {
        let json = r#"[{"id": 1, "name": "Short",
            "initial_grid": [[0,0,0,0],[0,0,0,0,0],[0,0,0,0,0],[0,0,0,0,0],[0,0,0,0,0]]}]"#;
        assert!(matches!(LevelRegistry::from_json(json), Err(LevelError::Json(_))));
    }

    #[test]
    fn test_json_empty_pack() {
        assert!(matches!(LevelRegistry::from_json("[]"), Err(LevelError::Empty)));
    }
}
