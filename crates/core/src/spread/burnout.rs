//! Fuel exhaustion
//!
//! The only transform that moves cells out of the burning state. Draws no
//! randomness, so it is a pure per-cell map and runs in parallel over the
//! snapshot.

use crate::core_types::tables::BURN_DURATION;
use crate::core_types::{Cell, CellState};
use crate::grid::CellGrid;

/// Resolve fuel exhaustion for every burning cell
///
/// A burning cell whose counter has reached its vegetation's burn duration
/// becomes Burnt; otherwise it keeps burning with the counter advanced by
/// one. The comparison happens before the increment: a duration-1 vegetation
/// ignited at counter 0 survives this pass and burns out on the next one.
/// Normal and Burnt cells copy through bit-for-bit.
pub fn burnout(grid: &CellGrid) -> CellGrid {
    grid.map_cells(advance_burn)
}

fn advance_burn(cell: Cell) -> Cell {
    if cell.state != CellState::OnFire {
        return cell;
    }
    let duration = BURN_DURATION[cell.vegetation.index()];
    if cell.on_fire_counter >= duration {
        Cell {
            state: CellState::Burnt,
            on_fire_counter: 0,
            ..cell
        }
    } else {
        Cell {
            on_fire_counter: cell.on_fire_counter + 1,
            ..cell
        }
    }
}
