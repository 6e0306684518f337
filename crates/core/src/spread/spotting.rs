//! Long-range ember transport ("spotting")
//!
//! Burning cells embedded in an active fire front can loft firebrands that
//! the wind carries well past the 8-neighborhood. Each burning source makes
//! at most one attempt per tick: an emission test, a stochastic travel
//! distance, a downwind projection, and a distance-decayed ignition test at
//! the destination.

use rand::Rng;

use crate::core_types::tables::{
    EMISSION_BASE_PROPENSITY, EMISSION_NEIGHBOR_WEIGHT, SPOTTING_BASE_DISTANCE, SPOTTING_DECAY,
    SPOTTING_P0, SPOTTING_SIGMA_FACTOR,
};
use crate::core_types::{CellState, Wind};
use crate::grid::CellGrid;

/// Spread fire by ember transport beyond the immediate neighborhood
///
/// Snapshot in, new grid out; cells not hit by a firebrand copy through
/// unchanged. Projections that leave the grid are discarded silently, and
/// only cells Normal in the snapshot can ignite, so a cell already ignited
/// earlier in the tick is never re-ignited or double-counted.
pub fn spotting_spread<R: Rng + ?Sized>(grid: &CellGrid, wind: Wind, rng: &mut R) -> CellGrid {
    let mut next = grid.clone();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !grid.get(x, y).is_burning() {
                continue;
            }
            if !throws_firebrand(grid, wind, x, y, rng) {
                continue;
            }

            let total_distance = travel_distance(wind, rng);
            let step = i64::from(total_distance.round() as i32);
            let dst_x = x as i64 + step * i64::from(wind.dx);
            let dst_y = y as i64 + step * i64::from(wind.dy);
            if dst_x < 0
                || dst_x >= grid.width() as i64
                || dst_y < 0
                || dst_y >= grid.height() as i64
            {
                continue;
            }

            let (dst_x, dst_y) = (dst_x as usize, dst_y as usize);
            let target = grid.get(dst_x, dst_y);
            if target.state != CellState::Normal {
                continue;
            }
            let p = ignition_probability(total_distance, target.moisture);
            if rng.random::<f32>() < p {
                next.get_mut(dst_x, dst_y).ignite();
            }
        }
    }
    next
}

/// Emission test: does this burning cell loft a firebrand this tick?
///
/// Scales with the number of burning neighbors (an isolated burning cell
/// never emits), the wind speed class, and the source's own dryness. The
/// draw is consumed for every burning source, succeed or fail.
fn throws_firebrand<R: Rng + ?Sized>(
    grid: &CellGrid,
    wind: Wind,
    x: usize,
    y: usize,
    rng: &mut R,
) -> bool {
    let source = grid.get(x, y);
    let burning = grid.burning_neighbors(x, y) as f32;
    let p = EMISSION_BASE_PROPENSITY
        * (burning * EMISSION_NEIGHBOR_WEIGHT)
        * (wind.speed.index() as f32 + 1.0)
        * (1.0 - source.moisture);
    rng.random::<f32>() < p
}

/// Firebrand travel distance in cell units: a base distance by wind speed
/// class plus turbulence jitter of up to ±30%
fn travel_distance<R: Rng + ?Sized>(wind: Wind, rng: &mut R) -> f32 {
    let base = SPOTTING_BASE_DISTANCE[wind.speed.index()];
    let sigma = SPOTTING_SIGMA_FACTOR * base;
    let jitter = rng.random::<f32>() - 0.5;
    base + sigma * jitter * 2.0
}

/// Probability that a landed firebrand ignites the destination, decaying
/// exponentially with the distance flown
fn ignition_probability(total_distance: f32, destination_moisture: f32) -> f32 {
    let receptivity = 1.0 - destination_moisture;
    if receptivity <= 0.0 {
        return 0.0;
    }
    (SPOTTING_P0 * (-SPOTTING_DECAY * total_distance).exp() * receptivity).clamp(0.0, 1.0)
}
