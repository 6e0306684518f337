//! Configuration errors raised at the validation boundary
//!
//! The transforms assume a valid grid and wind once a tick begins; everything
//! that can be malformed is rejected here, before any transform runs.

/// Rejection of a malformed grid or wind descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid has zero rows
    EmptyGrid,
    /// Grid rows have zero width
    ZeroWidth,
    /// A row's width differs from the first row's
    RaggedRow {
        /// Index of the offending row
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of the offending row
        actual: usize,
    },
    /// A deserialized grid's cell count does not match `width * height`
    CellCountMismatch {
        /// `width * height`
        expected: usize,
        /// Actual number of cells
        actual: usize,
    },
    /// A cell's moisture fraction is outside [0,1]
    MoistureOutOfRange {
        /// Column of the offending cell
        x: usize,
        /// Row of the offending cell
        y: usize,
        /// The rejected value
        value: f32,
    },
    /// A wind direction component is outside {-1, 0, 1}
    InvalidWindComponent {
        /// 'x' or 'y'
        axis: char,
        /// The rejected value
        value: i8,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyGrid => write!(f, "grid has no rows"),
            ConfigError::ZeroWidth => write!(f, "grid rows are empty"),
            ConfigError::RaggedRow {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {row} has width {actual}, expected {expected}"
            ),
            ConfigError::CellCountMismatch { expected, actual } => write!(
                f,
                "grid holds {actual} cells, expected width * height = {expected}"
            ),
            ConfigError::MoistureOutOfRange { x, y, value } => write!(
                f,
                "cell ({x}, {y}) has moisture {value}, expected a fraction in [0, 1]"
            ),
            ConfigError::InvalidWindComponent { axis, value } => write!(
                f,
                "wind {axis} component {value} is not one of -1, 0, 1"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
