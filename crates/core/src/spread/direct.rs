//! Direct neighbor fire spread
//!
//! For every burning cell in the input snapshot, each Normal cell in its
//! clipped 8-neighborhood gets one independent ignition attempt. Attempts are
//! always evaluated against the snapshot, so the set of attempts (and the
//! random draws they consume) does not depend on which attempts succeed.

use rand::Rng;

use crate::core_types::{CellState, Wind};
use crate::grid::CellGrid;
use crate::spread::ignition::{ignition_probability, wind_factor};

/// Spread fire from burning cells to their immediate neighbors
///
/// Consumes the snapshot by reference and returns a new grid. Burning and
/// burnt cells copy through unchanged; a Normal cell with several burning
/// neighbors may receive several attempts, and once one succeeds the rest are
/// no-ops (ignition is idempotent, not cumulative).
pub fn direct_spread<R: Rng + ?Sized>(grid: &CellGrid, wind: Wind, rng: &mut R) -> CellGrid {
    let mut next = grid.clone();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.get(x, y).is_burning() {
                spread_to_neighbors(grid, &mut next, wind, x, y, rng);
            }
        }
    }
    next
}

/// One burning source cell attempts to ignite each Normal neighbor
fn spread_to_neighbors<R: Rng + ?Sized>(
    grid: &CellGrid,
    next: &mut CellGrid,
    wind: Wind,
    x: usize,
    y: usize,
    rng: &mut R,
) {
    let source = grid.get(x, y);
    for (nx, ny) in grid.neighbors(x, y) {
        let target = grid.get(nx, ny);
        if target.state != CellState::Normal {
            continue;
        }
        let dx = (nx as i64 - x as i64) as i8;
        let dy = (ny as i64 - y as i64) as i8;
        let a_w = wind_factor(wind, dx, dy);
        let p = ignition_probability(source.vegetation, target.vegetation, target.moisture, a_w);
        if rng.random::<f32>() < p {
            next.get_mut(nx, ny).ignite();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{Cell, Vegetation};
    use rand::RngCore;

    /// RNG that always draws 0, so every positive-probability attempt succeeds
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    fn center_fire_grid() -> CellGrid {
        let mut grid = CellGrid::new(3, 3, Cell::new(Vegetation::Grassland, 0.0)).unwrap();
        grid.get_mut(1, 1).ignite();
        grid
    }

    #[test]
    fn guaranteed_draws_ignite_all_eight_neighbors() {
        let grid = center_fire_grid();
        let next = direct_spread(&grid, Wind::CALM, &mut ZeroRng);
        assert_eq!(next.count_state(CellState::OnFire), 9);
        assert_eq!(next.get(1, 1).on_fire_counter, 0, "source untouched");
    }

    #[test]
    fn input_snapshot_is_never_mutated() {
        let grid = center_fire_grid();
        let before = grid.clone();
        let _ = direct_spread(&grid, Wind::CALM, &mut ZeroRng);
        assert_eq!(grid, before);
    }

    #[test]
    fn burnt_neighbors_stay_burnt() {
        let mut grid = center_fire_grid();
        grid.get_mut(0, 0).state = CellState::Burnt;
        let next = direct_spread(&grid, Wind::CALM, &mut ZeroRng);
        assert_eq!(next.get(0, 0).state, CellState::Burnt);
    }

    #[test]
    fn one_by_one_grid_is_unchanged() {
        let grid = CellGrid::from_rows(vec![vec![Cell::burning(Vegetation::Grassland, 0.0)]]).unwrap();
        let next = direct_spread(&grid, Wind::CALM, &mut ZeroRng);
        assert_eq!(next, grid);
    }

    #[test]
    fn saturated_cells_never_ignite() {
        let mut grid = CellGrid::new(3, 3, Cell::new(Vegetation::Grassland, 1.0)).unwrap();
        grid.get_mut(1, 1).ignite();
        let next = direct_spread(&grid, Wind::CALM, &mut ZeroRng);
        assert_eq!(next.count_state(CellState::OnFire), 1);
    }
}
