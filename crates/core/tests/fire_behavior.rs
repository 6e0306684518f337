//! Scenario-level behavior of the spread transforms and the tick pipeline

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use wildfire_ca_core::{
    burnout, direct_spread, spotting_spread, tick, Cell, CellGrid, CellState, Vegetation, Wind,
    WindSpeed,
};

/// RNG that always draws 0, forcing every positive-probability attempt to
/// succeed
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

fn rank(state: CellState) -> u8 {
    match state {
        CellState::Normal => 0,
        CellState::OnFire => 1,
        CellState::Burnt => 2,
    }
}

fn grass_grid_with_center_fire() -> CellGrid {
    let mut grid = CellGrid::new(3, 3, Cell::new(Vegetation::Grassland, 0.0)).unwrap();
    grid.get_mut(1, 1).ignite();
    grid
}

#[test]
fn center_fire_ignites_all_eight_neighbors_under_forced_draws() {
    let grid = grass_grid_with_center_fire();
    let next = direct_spread(&grid, Wind::CALM, &mut ZeroRng);

    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(next.get(x, y).state, CellState::OnFire, "cell ({x}, {y})");
        }
    }
    assert_eq!(next.get(1, 1).on_fire_counter, 0, "center is copied, not re-ignited");
}

#[test]
fn grassland_burnout_boundary_is_counter_reaching_duration() {
    // Grassland's duration is 1. Freshly ignited (counter 0): the check runs
    // before the increment, so the first burnout pass leaves the cell burning
    // at counter 1 and the second retires it.
    let grid = grass_grid_with_center_fire();
    let after_one = burnout(&grid);
    assert_eq!(after_one.get(1, 1).state, CellState::OnFire);
    assert_eq!(after_one.get(1, 1).on_fire_counter, 1);

    let after_two = burnout(&after_one);
    assert_eq!(after_two.get(1, 1).state, CellState::Burnt);
    assert_eq!(after_two.get(1, 1).on_fire_counter, 0);
}

#[test]
fn full_tick_on_the_reference_scenario() {
    let grid = grass_grid_with_center_fire();
    let next = tick(&grid, Wind::CALM, &mut ZeroRng);

    // Direct spread ignites all 8 neighbors; calm-wind spotting projects
    // every firebrand onto its own burning source; burnout advances every
    // counter without retiring anything yet.
    assert_eq!(next.count_state(CellState::OnFire), 9);
    assert!(next.cells().iter().all(|c| c.on_fire_counter == 1));
}

#[test]
fn states_never_regress_over_many_ticks() {
    let mut grid = CellGrid::new(12, 12, Cell::new(Vegetation::Shrubs, 0.2)).unwrap();
    grid.get_mut(6, 6).ignite();
    let wind = Wind::new(1, 1, WindSpeed::Fast).unwrap();
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..40 {
        let next = tick(&grid, wind, &mut rng);
        for (before, after) in grid.cells().iter().zip(next.cells()) {
            assert!(
                rank(after.state) >= rank(before.state),
                "state regressed from {:?} to {:?}",
                before.state,
                after.state
            );
            assert_eq!(before.vegetation, after.vegetation, "vegetation is immutable");
        }
        grid = next;
    }
}

#[test]
fn burnt_cells_are_bit_identical_through_every_transform() {
    let mut grid = CellGrid::new(6, 6, Cell::new(Vegetation::Grassland, 0.0)).unwrap();
    for x in 0..6 {
        grid.get_mut(x, 2).state = CellState::Burnt;
    }
    grid.get_mut(3, 3).ignite();
    let wind = Wind::new(0, -1, WindSpeed::Extreme).unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    let after_direct = direct_spread(&grid, wind, &mut rng);
    let after_spotting = spotting_spread(&after_direct, wind, &mut rng);
    let after_burnout = burnout(&after_spotting);

    for x in 0..6 {
        let untouched = grid.get(x, 2);
        assert_eq!(after_direct.get(x, 2), untouched);
        assert_eq!(after_spotting.get(x, 2), untouched);
        assert_eq!(after_burnout.get(x, 2), untouched);
    }
}

#[test]
fn fire_cannot_cross_a_saturated_break_without_spotting() {
    // Left column burning, middle column saturated, calm wind so spotting
    // never lands anywhere new. The right column must stay Normal forever.
    let mut grid = CellGrid::new(3, 4, Cell::new(Vegetation::Grassland, 0.0)).unwrap();
    for y in 0..4 {
        grid.get_mut(0, y).ignite();
        grid.get_mut(1, y).moisture = 1.0;
    }
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        grid = tick(&grid, Wind::CALM, &mut rng);
    }
    for y in 0..4 {
        assert_eq!(grid.get(1, y).state, CellState::Normal, "firebreak ignited");
        assert_eq!(grid.get(2, y).state, CellState::Normal, "fire jumped the break");
    }
}

#[test]
fn single_cell_grid_passes_through_the_whole_pipeline() {
    let grid = CellGrid::from_rows(vec![vec![Cell::burning(Vegetation::NotFireProne, 0.4)]]).unwrap();
    let wind = Wind::new(-1, 1, WindSpeed::Extreme).unwrap();

    let spread = direct_spread(&grid, wind, &mut ZeroRng);
    assert_eq!(spread, grid, "no neighbors to ignite");
    let spotted = spotting_spread(&grid, wind, &mut ZeroRng);
    assert_eq!(spotted, grid, "no destination inside a 1x1 grid");

    let burned = burnout(&grid);
    assert_eq!(burned.get(0, 0).on_fire_counter, 1);
}
