//! The per-tick fire spread transforms and their fixed-order pipeline
//!
//! Each transform consumes an immutable grid snapshot and allocates a fresh
//! output grid; ownership passes linearly from stage to stage. A tick is
//! direct spread, then spotting, then burnout.

pub mod burnout;
pub mod direct;
pub mod ignition;
pub mod spotting;

pub use burnout::burnout;
pub use direct::direct_spread;
pub use spotting::spotting_spread;

use rand::Rng;

use crate::core_types::{CellState, Wind};
use crate::grid::CellGrid;

/// Advance the automaton by one tick
///
/// `burnout(spotting_spread(direct_spread(grid)))`, with each stage reading
/// only its predecessor's frozen output. Deterministic for a fixed random
/// stream.
pub fn tick<R: Rng + ?Sized>(grid: &CellGrid, wind: Wind, rng: &mut R) -> CellGrid {
    let after_direct = direct_spread(grid, wind, rng);
    let after_spotting = spotting_spread(&after_direct, wind, rng);
    let next = burnout(&after_spotting);

    tracing::debug!(
        direct_ignitions =
            after_direct.count_state(CellState::OnFire) - grid.count_state(CellState::OnFire),
        spotting_ignitions = after_spotting.count_state(CellState::OnFire)
            - after_direct.count_state(CellState::OnFire),
        newly_burnt =
            next.count_state(CellState::Burnt) - after_spotting.count_state(CellState::Burnt),
        "tick complete"
    );

    next
}
