//! Wind descriptor: a unit direction vector over the 8 compass octants and a
//! discrete speed class
//!
//! Wind is a whole-grid property, constant within a tick. An external driver
//! may replace it between ticks; the transforms only ever see it as input.

use serde::{Deserialize, Serialize};

use crate::core_types::error::ConfigError;

/// Discrete wind speed class
///
/// The classes correspond to the 10/30/50/70/90 km/h bands of the wind effect
/// table; `index` selects the matching table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindSpeed {
    None,
    Slow,
    Moderate,
    Fast,
    Extreme,
}

impl WindSpeed {
    /// All speed classes in table order
    pub const ALL: [WindSpeed; 5] = [
        WindSpeed::None,
        WindSpeed::Slow,
        WindSpeed::Moderate,
        WindSpeed::Fast,
        WindSpeed::Extreme,
    ];

    /// Stable index into the wind effect and spotting distance tables
    pub fn index(self) -> usize {
        match self {
            WindSpeed::None => 0,
            WindSpeed::Slow => 1,
            WindSpeed::Moderate => 2,
            WindSpeed::Fast => 3,
            WindSpeed::Extreme => 4,
        }
    }
}

/// Wind over the whole grid for one tick
///
/// `dx`/`dy` form a unit vector with components in {-1, 0, 1}: `dx` grows
/// eastward (increasing column), `dy` southward (increasing row). `(0, 0)`
/// means calm air with no preferred direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wind {
    /// East-west direction component
    pub dx: i8,
    /// North-south direction component
    pub dy: i8,
    /// Speed class
    pub speed: WindSpeed,
}

impl Wind {
    /// Calm air
    pub const CALM: Wind = Wind {
        dx: 0,
        dy: 0,
        speed: WindSpeed::None,
    };

    /// Build a wind descriptor, rejecting out-of-range direction components
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidWindComponent` if `dx` or `dy` is outside
    /// {-1, 0, 1}.
    pub fn new(dx: i8, dy: i8, speed: WindSpeed) -> Result<Self, ConfigError> {
        let wind = Wind { dx, dy, speed };
        wind.validate()?;
        Ok(wind)
    }

    /// Re-check the direction components, for descriptors that arrived via
    /// deserialization rather than [`Wind::new`]
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidWindComponent` on the first bad component.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-1..=1).contains(&self.dx) {
            return Err(ConfigError::InvalidWindComponent {
                axis: 'x',
                value: self.dx,
            });
        }
        if !(-1..=1).contains(&self.dy) {
            return Err(ConfigError::InvalidWindComponent {
                axis: 'y',
                value: self.dy,
            });
        }
        Ok(())
    }

    /// Compass octant the wind blows toward, or `None` when calm
    pub fn octant(&self) -> Option<u8> {
        octant_of(self.dx, self.dy)
    }
}

/// Compass octant of a unit step vector, clockwise from north
///
/// N=0, NE=1, E=2, SE=3, S=4, SW=5, W=6, NW=7. Circular order, so the folded
/// absolute difference between two octants is their true angular separation
/// in 45° steps.
pub fn octant_of(dx: i8, dy: i8) -> Option<u8> {
    match (dx, dy) {
        (0, -1) => Some(0),
        (1, -1) => Some(1),
        (1, 0) => Some(2),
        (1, 1) => Some(3),
        (0, 1) => Some(4),
        (-1, 1) => Some(5),
        (-1, 0) => Some(6),
        (-1, -1) => Some(7),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_indices_cover_table_order() {
        for (i, speed) in WindSpeed::ALL.iter().enumerate() {
            assert_eq!(speed.index(), i);
        }
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert_eq!(
            Wind::new(2, 0, WindSpeed::Slow),
            Err(ConfigError::InvalidWindComponent { axis: 'x', value: 2 })
        );
        assert_eq!(
            Wind::new(0, -3, WindSpeed::Slow),
            Err(ConfigError::InvalidWindComponent { axis: 'y', value: -3 })
        );
    }

    #[test]
    fn octants_are_circular() {
        // Walking the compass clockwise visits octants 0..=7 in order.
        let steps = [
            (0, -1),
            (1, -1),
            (1, 0),
            (1, 1),
            (0, 1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
        ];
        for (expected, (dx, dy)) in steps.iter().enumerate() {
            assert_eq!(octant_of(*dx, *dy), Some(expected as u8));
        }
        assert_eq!(octant_of(0, 0), None);
    }
}
