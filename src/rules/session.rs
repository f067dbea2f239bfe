//! Session state: the live puzzle.
//!
//! ## Invariants
//!
//! - `grid` is always a copy of the current level's initial grid with some
//!   flips applied; levels are never written to.
//! - `won` is true iff `grid` is all-Moon.
//! - `level_index` is always a valid index into the registry.
//!
//! ## Lifecycle
//!
//! A session starts on level 0. `reset_level` restores the current level,
//! `next_level` moves forward (a no-op on the final level), and
//! `flip_region` is the only operation that changes tiles.

use im::Vector;

use crate::core::{EngineConfig, FlipRecord, Grid, Region, SessionEvent};
use crate::levels::{Level, LevelError, LevelRegistry};

use super::engine::{FlipOutcome, LevelAdvance, Puzzle};

/// A single player's run through a level set.
///
/// Cloning is cheap enough for previews: the move history is a persistent
/// vector and the grid is a small `Copy` array.
///
/// ## Example
///
/// ```
/// use eclipse_grid::rules::{FlipOutcome, Session};
///
/// let mut session = Session::new();
/// assert_eq!(session.current_level().name, "The Spark");
///
/// let outcome = session.flip_region(0, 0, 5, 5);
/// assert_eq!(outcome, FlipOutcome::Applied { cells_flipped: 25, won: true });
/// assert_eq!(session.moves(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    config: EngineConfig,
    levels: LevelRegistry,
    level_index: usize,
    grid: Grid,
    moves: u32,
    won: bool,
    history: Vector<FlipRecord>,
    events: Vec<SessionEvent>,
}

impl Session {
    /// Start a session on the built-in levels with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::with_levels(LevelRegistry::builtin(), EngineConfig::default())
    }

    /// Start a session on level 0 of `levels`.
    #[must_use]
    pub fn with_levels(levels: LevelRegistry, config: EngineConfig) -> Self {
        let mut session = Self {
            config,
            levels,
            level_index: 0,
            grid: Grid::default(),
            moves: 0,
            won: false,
            history: Vector::new(),
            events: Vec::new(),
        };
        session.load(0);
        session.events.push(SessionEvent::LevelStarted { level_index: 0 });
        session
    }

    // === Accessors ===

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The level set being played.
    #[must_use]
    pub fn levels(&self) -> &LevelRegistry {
        &self.levels
    }

    /// The current level definition.
    #[must_use]
    pub fn current_level(&self) -> &Level {
        // level_index is kept in range by every transition
        &self.levels.as_slice()[self.level_index]
    }

    /// Current tiles.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Moves made on the current level.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether the current level is solved.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Play-order index of the current level.
    #[must_use]
    pub fn level_index(&self) -> usize {
        self.level_index
    }

    /// Number of levels in the set.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Check if the current level is the last one.
    #[must_use]
    pub fn is_final_level(&self) -> bool {
        self.level_index == self.levels.last_index()
    }

    /// Flips applied on the current level, oldest first.
    ///
    /// Empty when `record_history` is off.
    #[must_use]
    pub fn history(&self) -> &Vector<FlipRecord> {
        &self.history
    }

    /// Take all events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // === Transitions ===

    /// Restore the current level's initial grid and zero the move counter.
    pub fn reset_level(&mut self) {
        self.load(self.level_index);
        log::info!(
            "Reset level {}: {}",
            self.level_index,
            self.current_level().name
        );
        self.events.push(SessionEvent::LevelReset {
            level_index: self.level_index,
        });
    }

    /// Advance to the next level.
    ///
    /// Works whether or not the current level is won. On the final level
    /// nothing changes and `AllComplete` is returned.
    pub fn next_level(&mut self) -> LevelAdvance {
        if self.is_final_level() {
            log::info!("All {} levels complete", self.levels.len());
            self.events.push(SessionEvent::AllLevelsComplete);
            return LevelAdvance::AllComplete;
        }

        let next = self.level_index + 1;
        self.start(next);
        LevelAdvance::Advanced(next)
    }

    /// Jump to the level at `index`.
    pub fn select_level(&mut self, index: usize) -> Result<(), LevelError> {
        self.levels.try_get(index)?;
        self.start(index);
        Ok(())
    }

    /// Flip every on-board tile in the `width × height` rectangle whose
    /// top-left corner is `(row_start, col_start)`.
    ///
    /// Off-board coordinates are skipped. Once the level is won further
    /// flips are ignored (unless `lock_on_win` is off). Every applied flip
    /// counts as a move, even one that changed no tiles.
    pub fn flip_region(&mut self, row_start: i32, col_start: i32, width: i32, height: i32) -> FlipOutcome {
        self.flip(Region::new(row_start, col_start, width, height))
    }

    // === Internals ===

    fn start(&mut self, index: usize) {
        self.load(index);
        log::info!("Started level {}: {}", index, self.current_level().name);
        self.events.push(SessionEvent::LevelStarted { level_index: index });
    }

    fn load(&mut self, index: usize) {
        if let Some(level) = self.levels.get(index) {
            self.level_index = index;
            self.grid = level.initial_grid;
            self.won = self.grid.is_all_moon();
            self.moves = 0;
            self.history.clear();
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Puzzle for Session {
    fn grid(&self) -> &Grid {
        Session::grid(self)
    }

    fn moves(&self) -> u32 {
        Session::moves(self)
    }

    fn is_won(&self) -> bool {
        Session::is_won(self)
    }

    fn flip(&mut self, region: Region) -> FlipOutcome {
        if self.won && self.config.lock_on_win {
            log::debug!("Ignoring flip {region}: level already won");
            return FlipOutcome::Locked;
        }

        let was_won = self.won;
        let cells_flipped = self.grid.flip_region(&region);
        self.moves = self.moves.saturating_add(1);
        self.won = self.grid.is_all_moon();

        log::debug!(
            "Flip {} on level {}: {} tiles, move {}",
            region,
            self.level_index,
            cells_flipped,
            self.moves
        );

        if self.config.record_history {
            self.history.push_back(FlipRecord::new(
                self.level_index,
                self.moves,
                region,
                cells_flipped,
            ));
        }
        self.events.push(SessionEvent::Flipped {
            region,
            cells_flipped,
        });

        if self.won && !was_won {
            log::info!(
                "Level {} solved in {} moves",
                self.level_index,
                self.moves
            );
            self.events.push(SessionEvent::Won {
                level_index: self.level_index,
                moves: self.moves,
            });
        }

        FlipOutcome::Applied {
            cells_flipped,
            won: self.won,
        }
    }
}
