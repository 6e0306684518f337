//! Wildfire Spread Cellular Automaton
//!
//! A discrete-time cellular automaton for wildfire propagation over a 2-D
//! landscape. Each tick applies three transforms in fixed order (direct
//! neighbor spread, long-range ember spotting, fuel burnout), driven by
//! vegetation type, moisture, and wind.
//!
//! Every transform consumes an immutable grid snapshot and produces a fresh
//! grid, so a tick is a pure, order-independent function of the prior state.
//! All randomness flows through an injectable, seedable stream; the same
//! grid, wind and seed always reproduce the same fire.

// Core types and calibrated model tables
pub mod core_types;

// Grid data structures
pub mod grid;

// Per-tick spread transforms and the tick pipeline
pub mod spread;

// Seeded driver and JSON scenario persistence
pub mod scenario;
pub mod simulation;

// Re-export core types
pub use core_types::{Cell, CellState, ConfigError, Vegetation, Wind, WindSpeed};

// Re-export the grid and the engine operations
pub use grid::CellGrid;
pub use spread::{burnout, direct_spread, spotting_spread, tick};

// Re-export the driver layer
pub use scenario::{Scenario, ScenarioError};
pub use simulation::{Simulation, SimulationStats};
