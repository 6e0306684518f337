//! Ignition probability model for direct neighbor spread
//!
//! Pure functions only. The probability a burning cell ignites a neighbor is
//! a nominal vegetation-pair probability, amplified or damped by a wind
//! factor, scaled by the destination's receptivity:
//!
//! `p = (1 - (1 - p_n)^a_w) * e_m`
//!
//! which reduces to `p_n * e_m` at a neutral wind factor of 1, tends to 0 as
//! the wind factor tends to 0, and is monotonically increasing in both the
//! wind factor and the receptivity.

use crate::core_types::tables::{NOMINAL_IGNITION, WIND_EFFECT};
use crate::core_types::{octant_of, Vegetation, Wind};

/// Probability that fire spreads from a burning `source` cell to an adjacent
/// Normal cell of class `destination`, clamped to [0,1]
pub fn ignition_probability(
    source: Vegetation,
    destination: Vegetation,
    destination_moisture: f32,
    wind_factor: f32,
) -> f32 {
    let p_n = NOMINAL_IGNITION[source.index()][destination.index()];
    let receptivity = (1.0 - destination_moisture).clamp(0.0, 1.0);
    let p = (1.0 - (1.0 - p_n).powf(wind_factor)) * receptivity;
    p.clamp(0.0, 1.0)
}

/// Angular separation of two compass octants in 45° buckets (0..=4)
///
/// Octant differences of 5, 6, 7 fold back to 3, 2, 1: the compass is
/// circular, so 315° apart is the same as 45° apart.
pub fn angle_bucket(a: u8, b: u8) -> usize {
    let diff = usize::from(a.abs_diff(b));
    if diff > 4 {
        8 - diff
    } else {
        diff
    }
}

/// Wind factor `a_w` for spread from a source cell toward the neighbor at
/// offset `(dx, dy)`
///
/// Resolves the speed class and the angle bucket between the wind direction
/// and the spread direction against the wind effect table. Calm wind has no
/// direction to compare against and resolves to a neutral 1.0.
pub fn wind_factor(wind: Wind, dx: i8, dy: i8) -> f32 {
    match (wind.octant(), octant_of(dx, dy)) {
        (Some(w), Some(n)) => WIND_EFFECT[wind.speed.index()][angle_bucket(w, n)],
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::tables::NOMINAL_IGNITION;
    use crate::core_types::WindSpeed;
    use approx::assert_relative_eq;

    #[test]
    fn neutral_wind_reduces_to_nominal_times_receptivity() {
        for source in Vegetation::ALL {
            for destination in Vegetation::ALL {
                let p_n = NOMINAL_IGNITION[source.index()][destination.index()];
                let p = ignition_probability(source, destination, 0.4, 1.0);
                assert_relative_eq!(p, p_n * 0.6, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn probability_is_monotonic_in_wind_factor() {
        let mut last = 0.0;
        for a_w in [0.1, 0.5, 1.0, 2.0, 3.7] {
            let p = ignition_probability(Vegetation::Shrubs, Vegetation::Grassland, 0.2, a_w);
            assert!(p > last, "p must grow with the wind factor");
            last = p;
        }
    }

    #[test]
    fn saturated_moisture_blocks_ignition() {
        let p = ignition_probability(Vegetation::Grassland, Vegetation::Grassland, 1.0, 3.7);
        assert_eq!(p, 0.0);
    }

    #[test]
    fn angle_buckets_fold_past_half_circle() {
        assert_eq!(angle_bucket(0, 0), 0);
        assert_eq!(angle_bucket(0, 4), 4);
        assert_eq!(angle_bucket(0, 5), 3);
        assert_eq!(angle_bucket(0, 6), 2);
        assert_eq!(angle_bucket(0, 7), 1);
        assert_eq!(angle_bucket(7, 1), 2);
    }

    #[test]
    fn calm_wind_is_neutral() {
        assert_eq!(wind_factor(Wind::CALM, 1, 0), 1.0);
    }

    #[test]
    fn extreme_tailwind_beats_no_wind() {
        // Spread due east, wind blowing due east.
        let none = Wind::new(1, 0, WindSpeed::None).unwrap();
        let extreme = Wind::new(1, 0, WindSpeed::Extreme).unwrap();
        let p_none =
            ignition_probability(Vegetation::Grassland, Vegetation::Grassland, 0.2, wind_factor(none, 1, 0));
        let p_extreme =
            ignition_probability(Vegetation::Grassland, Vegetation::Grassland, 0.2, wind_factor(extreme, 1, 0));
        assert!(p_extreme > p_none);
    }

    #[test]
    fn headwind_is_weaker_than_tailwind() {
        let wind = Wind::new(1, 0, WindSpeed::Fast).unwrap();
        assert!(wind_factor(wind, 1, 0) > wind_factor(wind, -1, 0));
    }
}
