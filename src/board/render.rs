//! Rendering boundary.
//!
//! A `Frame` is a read-only snapshot of what to draw. Renderers never see
//! the session itself, so they cannot mutate it.

use std::fmt::Write as _;

use crate::core::{Coord, Grid, GRID_SIZE};
use crate::levels::Level;
use crate::selection::SquareSelection;

/// Everything a renderer needs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub grid: &'a Grid,
    /// Live drag selection, if a drag is in progress.
    pub selection: Option<SquareSelection>,
    /// Whether releasing now would flip (highlight colour).
    pub selection_valid: bool,
    /// Drives the success overlay.
    pub won: bool,
    pub level: &'a Level,
    pub level_index: usize,
    pub level_count: usize,
    pub moves: u32,
}

impl Frame<'_> {
    /// Check if `coord` is inside the live selection.
    #[must_use]
    pub fn is_highlighted(&self, coord: Coord) -> bool {
        self.selection.is_some_and(|s| s.contains(coord))
    }
}

/// Something that draws frames.
pub trait Renderer {
    type Output;

    fn render(&mut self, frame: &Frame<'_>) -> Self::Output;
}

/// Plain-text renderer for terminals, logs and tests.
///
/// Tiles are `#` (Sun) and `.` (Moon). Highlighted tiles are wrapped in
/// `[ ]` when the selection is valid and `( )` when it is not.
#[derive(Clone, Debug)]
pub struct TextRenderer {
    /// Include level name, lore and counters above the grid.
    pub show_header: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { show_header: true }
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&mut self, frame: &Frame<'_>) -> String {
        let mut out = String::new();

        if self.show_header {
            let _ = writeln!(
                out,
                "{} | Level {}/{} | Moves: {}",
                frame.level.name,
                frame.level_index + 1,
                frame.level_count,
                frame.moves
            );
            if !frame.level.lore.is_empty() {
                let _ = writeln!(out, "{}", frame.level.lore);
            }
        }

        let (open, close) = if frame.selection_valid { ('[', ']') } else { ('(', ')') };
        let last_col = GRID_SIZE as i32 - 1;
        for (coord, cell) in frame.grid.iter() {
            if frame.is_highlighted(coord) {
                let _ = write!(out, "{open}{}{close}", cell.symbol());
            } else {
                let _ = write!(out, " {} ", cell.symbol());
            }
            if coord.col == last_col {
                out.push('\n');
            }
        }

        if frame.won {
            out.push_str("Eclipse cleared.\n");
        }

        out
    }
}
