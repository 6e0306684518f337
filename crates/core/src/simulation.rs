//! Convenience driver owning the grid, wind and random stream
//!
//! The transforms themselves are free functions over snapshots; `Simulation`
//! packages them for callers that want a seeded, steppable fire run. Wind may
//! be replaced between ticks, never during one.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::core_types::{CellState, Wind};
use crate::grid::CellGrid;
use crate::spread::tick;

/// Cell counts for one snapshot of a running simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Unburnt cells
    pub normal: usize,
    /// Actively burning cells
    pub on_fire: usize,
    /// Exhausted cells
    pub burnt: usize,
}

/// A steppable fire simulation with a seeded random stream
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: CellGrid,
    wind: Wind,
    rng: StdRng,
    ticks: u64,
}

impl Simulation {
    /// Create a simulation over a validated grid
    ///
    /// The same grid, wind and seed always produce the same run.
    pub fn new(grid: CellGrid, wind: Wind, seed: u64) -> Self {
        Simulation {
            grid,
            wind,
            rng: StdRng::seed_from_u64(seed),
            ticks: 0,
        }
    }

    /// Advance one tick
    pub fn step(&mut self) {
        self.grid = tick(&self.grid, self.wind, &mut self.rng);
        self.ticks += 1;
    }

    /// Current grid snapshot
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Wind applied to the next tick
    pub fn wind(&self) -> Wind {
        self.wind
    }

    /// Replace the wind between ticks
    pub fn set_wind(&mut self, wind: Wind) {
        self.wind = wind;
    }

    /// Ticks elapsed since construction
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Whether any cell is still burning
    pub fn is_active(&self) -> bool {
        self.grid.cells().iter().any(crate::core_types::Cell::is_burning)
    }

    /// Current cell counts
    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            normal: self.grid.count_state(CellState::Normal),
            on_fire: self.grid.count_state(CellState::OnFire),
            burnt: self.grid.count_state(CellState::Burnt),
        }
    }
}
