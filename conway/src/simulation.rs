// simulation.rs - Owned simulation state, mutated synchronously

use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::grid::Grid;
use crate::patterns::{self, Pattern};
use crate::step::step_into;

/// Identifies one run of the tick loop. A new chain starts every time the
/// simulation goes from stopped to running; ticks from older chains are void.
pub type ChainId = u64;

/// Grid plus run state, with no notion of time.
///
/// The front grid is what callers see; the back grid is scratch space that
/// each tick writes into before the two swap.
pub struct Simulation {
    grid: Grid,
    back: Grid,
    running: bool,
    chain: ChainId,
    generation: u64,
}

impl Simulation {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.cols)?;
        Ok(Self {
            back: grid.clone(),
            grid,
            running: false,
            chain: 0,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Marks the simulation running and returns the chain that now owns the
    /// ticks, or `None` if it was already running.
    pub fn start(&mut self) -> Option<ChainId> {
        if self.running {
            return None;
        }
        self.running = true;
        self.chain += 1;
        debug!(chain = self.chain, generation = self.generation, "simulation started");
        Some(self.chain)
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            debug!(chain = self.chain, generation = self.generation, "simulation stopped");
        }
    }

    /// Advances one generation on behalf of `chain`.
    ///
    /// Returns `false`, leaving the grid untouched, if the simulation is
    /// stopped or `chain` has been superseded; the caller must not reschedule.
    pub fn tick(&mut self, chain: ChainId) -> bool {
        if !self.running || chain != self.chain {
            return false;
        }
        self.advance();
        trace!(chain, generation = self.generation, "tick");
        true
    }

    /// One generation regardless of run state.
    pub fn advance(&mut self) {
        step_into(&self.grid, &mut self.back);
        std::mem::swap(&mut self.grid, &mut self.back);
        self.generation += 1;
    }

    /// Flips a cell, returning its new state. Out-of-range indices leave the
    /// grid untouched.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool> {
        if !self.grid.contains(row, col) {
            return Err(EngineError::IndexOutOfBounds {
                row,
                col,
                rows: self.grid.rows(),
                cols: self.grid.cols(),
            });
        }
        Ok(self.grid.toggle(row, col))
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        debug!("grid cleared");
    }

    pub fn load_pattern(&mut self, pattern: &Pattern) {
        patterns::apply_pattern(&mut self.grid, pattern);
        self.generation = 0;
        debug!(pattern = pattern.name, "pattern loaded");
    }

    pub fn randomize(&mut self, seed: u64) {
        patterns::apply_random_pattern(&mut self.grid, seed);
        self.generation = 0;
        debug!(seed, "grid randomized");
    }
}
