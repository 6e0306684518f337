//! Cell state, vegetation classes and the per-cell record of the automaton

use serde::{Deserialize, Serialize};

/// Burning state of a single cell
///
/// Transitions are monotonic over a cell's lifetime: Normal → OnFire → Burnt,
/// never backward and never skipping OnFire. Burnt is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Unburnt fuel, may ignite
    Normal,
    /// Actively burning
    OnFire,
    /// Fuel exhausted, inert for the rest of the simulation
    Burnt,
}

/// Vegetation class of a cell
///
/// Immutable for a cell's lifetime. Drives both the nominal ignition
/// probabilities (source and destination side) and the burn duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vegetation {
    Broadleaves,
    Shrubs,
    Grassland,
    FireProne,
    Agroforestry,
    NotFireProne,
}

impl Vegetation {
    /// All vegetation classes in table order
    pub const ALL: [Vegetation; 6] = [
        Vegetation::Broadleaves,
        Vegetation::Shrubs,
        Vegetation::Grassland,
        Vegetation::FireProne,
        Vegetation::Agroforestry,
        Vegetation::NotFireProne,
    ];

    /// Stable index into the ignition and burn-duration tables
    pub fn index(self) -> usize {
        match self {
            Vegetation::Broadleaves => 0,
            Vegetation::Shrubs => 1,
            Vegetation::Grassland => 2,
            Vegetation::FireProne => 3,
            Vegetation::Agroforestry => 4,
            Vegetation::NotFireProne => 5,
        }
    }

    /// Single-letter code used by map files and the ASCII renderer
    pub fn letter(self) -> char {
        match self {
            Vegetation::Broadleaves => 'B',
            Vegetation::Shrubs => 'S',
            Vegetation::Grassland => 'G',
            Vegetation::FireProne => 'F',
            Vegetation::Agroforestry => 'A',
            Vegetation::NotFireProne => 'N',
        }
    }
}

/// One cell of the automaton
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Burning state
    pub state: CellState,
    /// Vegetation class, fixed at construction
    pub vegetation: Vegetation,
    /// Fine fuel moisture fraction in [0,1]; higher is wetter
    pub moisture: f32,
    /// Ticks spent continuously OnFire; 0 while Normal or Burnt
    pub on_fire_counter: u32,
}

impl Cell {
    /// Create an unburnt cell
    pub fn new(vegetation: Vegetation, moisture: f32) -> Self {
        Cell {
            state: CellState::Normal,
            vegetation,
            moisture,
            on_fire_counter: 0,
        }
    }

    /// Create a cell that starts the simulation already burning
    pub fn burning(vegetation: Vegetation, moisture: f32) -> Self {
        Cell {
            state: CellState::OnFire,
            ..Cell::new(vegetation, moisture)
        }
    }

    /// Set the cell alight with a fresh burn counter
    ///
    /// Idempotent within a tick: re-igniting an already burning cell leaves
    /// it burning with its counter untouched.
    pub fn ignite(&mut self) {
        if self.state == CellState::Normal {
            self.state = CellState::OnFire;
            self.on_fire_counter = 0;
        }
    }

    /// Whether the cell is actively burning
    pub fn is_burning(&self) -> bool {
        self.state == CellState::OnFire
    }
}
