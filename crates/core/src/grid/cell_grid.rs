//! Rectangular cell grid with snapshot semantics
//!
//! The grid is the unit of exchange between pipeline stages: every transform
//! consumes a frozen snapshot by reference and allocates a fresh grid for its
//! output. Nothing in this crate mutates a grid that another stage may still
//! read; that discipline is what keeps a tick a pure, order-independent
//! function of the prior state.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core_types::{Cell, CellState, ConfigError};

/// A rectangular grid of cells in row-major order
///
/// Width and height are fixed for the grid's lifetime. Validation happens at
/// construction (and at [`CellGrid::validate`] for deserialized grids); the
/// transforms assume the invariants hold and do not re-check per cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellGrid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl CellGrid {
    /// Create a grid with every cell set to `fill`
    ///
    /// # Errors
    /// Returns `ConfigError` if either dimension is zero or the fill cell's
    /// moisture is outside [0,1].
    pub fn new(width: usize, height: usize, fill: Cell) -> Result<Self, ConfigError> {
        let grid = CellGrid {
            cells: vec![fill; width * height],
            width,
            height,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Build a grid from explicit rows
    ///
    /// # Errors
    /// Returns `ConfigError` on zero rows, empty rows, ragged rows, or any
    /// cell with moisture outside [0,1].
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, ConfigError> {
        let height = rows.len();
        if height == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let width = rows[0].len();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ConfigError::RaggedRow {
                    row: y,
                    expected: width,
                    actual: row.len(),
                });
            }
        }
        let grid = CellGrid {
            cells: rows.into_iter().flatten().collect(),
            width,
            height,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Re-check the grid invariants, for grids that arrived via
    /// deserialization rather than a validating constructor
    ///
    /// # Errors
    /// Returns `ConfigError` on zero dimensions, a cell count that does not
    /// match `width * height`, or out-of-range moisture.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.cells.len() != self.width * self.height {
            return Err(ConfigError::CellCountMismatch {
                expected: self.width * self.height,
                actual: self.cells.len(),
            });
        }
        for (i, cell) in self.cells.iter().enumerate() {
            if !(0.0..=1.0).contains(&cell.moisture) {
                return Err(ConfigError::MoistureOutOfRange {
                    x: i % self.width,
                    y: i / self.width,
                    value: cell.moisture,
                });
            }
        }
        Ok(())
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(x, y)`
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        assert!(x < self.width && y < self.height, "coordinates out of bounds");
        self.cells[y * self.width + x]
    }

    /// Mutable cell at `(x, y)`; only ever called on a stage's own output
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        assert!(x < self.width && y < self.height, "coordinates out of bounds");
        &mut self.cells[y * self.width + x]
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Coordinates of the clipped 8-neighborhood of `(x, y)`, self excluded
    ///
    /// Out-of-range neighbors are skipped, never wrapped. Iteration order is
    /// row-major and deterministic.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let x0 = x.saturating_sub(1);
        let y0 = y.saturating_sub(1);
        let x1 = (x + 1).min(self.width - 1);
        let y1 = (y + 1).min(self.height - 1);
        (y0..=y1)
            .flat_map(move |ny| (x0..=x1).map(move |nx| (nx, ny)))
            .filter(move |&pos| pos != (x, y))
    }

    /// Number of burning cells in the clipped 8-neighborhood of `(x, y)`
    pub fn burning_neighbors(&self, x: usize, y: usize) -> usize {
        self.neighbors(x, y)
            .filter(|&(nx, ny)| self.get(nx, ny).is_burning())
            .count()
    }

    /// Number of cells currently in `state`
    pub fn count_state(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }

    /// Produce a new grid by applying a pure per-cell function to a snapshot
    ///
    /// The map runs in parallel; `f` must be a pure function of its input
    /// cell so the output is independent of scheduling.
    pub fn map_cells<F>(&self, f: F) -> CellGrid
    where
        F: Fn(Cell) -> Cell + Sync + Send,
    {
        CellGrid {
            cells: self.cells.par_iter().map(|&cell| f(cell)).collect(),
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Vegetation;

    fn grass(moisture: f32) -> Cell {
        Cell::new(Vegetation::Grassland, moisture)
    }

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(CellGrid::from_rows(vec![]), Err(ConfigError::EmptyGrid));
        assert_eq!(
            CellGrid::new(0, 3, grass(0.0)).unwrap_err(),
            ConfigError::ZeroWidth
        );
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows = vec![vec![grass(0.0); 3], vec![grass(0.0); 2]];
        assert_eq!(
            CellGrid::from_rows(rows),
            Err(ConfigError::RaggedRow {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn rejects_out_of_range_moisture() {
        let rows = vec![vec![grass(0.5), grass(1.5)]];
        assert_eq!(
            CellGrid::from_rows(rows),
            Err(ConfigError::MoistureOutOfRange {
                x: 1,
                y: 0,
                value: 1.5
            })
        );
    }

    #[test]
    fn neighbors_clip_at_edges() {
        let grid = CellGrid::new(3, 3, grass(0.0)).unwrap();
        assert_eq!(grid.neighbors(0, 0).count(), 3);
        assert_eq!(grid.neighbors(1, 0).count(), 5);
        assert_eq!(grid.neighbors(1, 1).count(), 8);
        assert_eq!(grid.neighbors(2, 2).count(), 3);
    }

    #[test]
    fn one_by_one_grid_has_no_neighbors() {
        let grid = CellGrid::new(1, 1, grass(0.0)).unwrap();
        assert_eq!(grid.neighbors(0, 0).count(), 0);
    }

    #[test]
    fn neighbors_exclude_self() {
        let grid = CellGrid::new(3, 3, grass(0.0)).unwrap();
        assert!(grid.neighbors(1, 1).all(|pos| pos != (1, 1)));
    }
}
