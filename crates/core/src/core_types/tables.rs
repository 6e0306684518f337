//! Calibrated constant tables driving the spread and burnout models
//!
//! Every number here is a domain constant, not a derived quantity. Keeping
//! them in one place isolates future recalibration from the transform logic.
//!
//! Nominal ignition probabilities follow the vegetation transition matrix of
//! Alexandridis et al. as tabulated in Fire 3(3):26 (MDPI, 2020); the wind
//! effect table is read off the same paper's wind factor graph. Burn
//! durations assume one tick ≈ 2 min 55 s of real time.

/// Nominal probability that fire spreads from a burning cell of the row's
/// vegetation class to a neighboring cell of the column's class, absent wind
/// and moisture effects
///
/// Indexed `[source][destination]` via [`Vegetation::index`]; deliberately
/// asymmetric (grassland ignites its neighbors far more readily than it is
/// ignited by slow-burning stands).
///
/// [`Vegetation::index`]: crate::core_types::Vegetation::index
#[rustfmt::skip]
pub const NOMINAL_IGNITION: [[f32; 6]; 6] = [
    //   B      S      G      FP     AF     N
    [0.300, 0.375, 0.250, 0.275, 0.250, 0.250], // Broadleaves
    [0.375, 0.375, 0.475, 0.400, 0.300, 0.475], // Shrubs
    [0.450, 0.475, 0.475, 0.475, 0.375, 0.475], // Grassland
    [0.225, 0.325, 0.250, 0.350, 0.200, 0.350], // FireProne
    [0.250, 0.250, 0.300, 0.475, 0.350, 0.250], // Agroforestry
    [0.075, 0.100, 0.075, 0.275, 0.075, 0.075], // NotFireProne
];

/// Wind factor `a_w` by `[speed class][angle bucket]`
///
/// Rows are the 10/30/50/70/90 km/h speed classes; columns the angular
/// separation between the wind direction and the direction toward the
/// candidate neighbor, in 45° buckets (0° = spreading straight downwind).
/// Values above 1 accelerate spread, below 1 retard it.
#[rustfmt::skip]
pub const WIND_EFFECT: [[f32; 5]; 5] = [
    //  0°    45°    90°   135°   180°
    [1.20, 1.05, 1.00, 1.00, 1.00], // None      (10 km/h)
    [2.50, 1.70, 1.20, 0.90, 0.80], // Slow      (30 km/h)
    [3.10, 1.90, 1.10, 0.70, 0.60], // Moderate  (50 km/h)
    [3.55, 2.10, 0.95, 0.50, 0.40], // Fast      (70 km/h)
    [3.70, 2.20, 0.80, 0.40, 0.35], // Extreme   (90 km/h)
];

/// Ticks a cell of each vegetation class burns before exhausting its fuel,
/// indexed by [`Vegetation::index`]
///
/// Real-world burn time estimates divided by the tick duration and floored:
/// grass and leaf litter are gone within a tick, pine stands take two, mixed
/// agroforestry ~half an hour, and old hardwoods the better part of two hours.
///
/// [`Vegetation::index`]: crate::core_types::Vegetation::index
pub const BURN_DURATION: [u32; 6] = [1, 1, 1, 2, 11, 42];

/// Base firebrand travel distance in cell units, indexed by
/// [`WindSpeed::index`]
///
/// [`WindSpeed::index`]: crate::core_types::WindSpeed::index
pub const SPOTTING_BASE_DISTANCE: [f32; 5] = [1.0, 4.0, 7.0, 12.0, 16.0];

/// Turbulence sigma as a fraction of the base travel distance
pub const SPOTTING_SIGMA_FACTOR: f32 = 0.3;

/// Base propensity of a burning cell to loft a firebrand at all
pub const EMISSION_BASE_PROPENSITY: f32 = 0.001;

/// Weight of each burning neighbor in the emission probability
pub const EMISSION_NEIGHBOR_WEIGHT: f32 = 0.1;

/// Spotting ignition probability at zero distance
pub const SPOTTING_P0: f32 = 0.5;

/// Exponential decay of spotting ignition probability per cell of travel
pub const SPOTTING_DECAY: f32 = 0.1;
