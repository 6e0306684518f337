//! Core types: cells, vegetation, wind and the calibrated model tables

pub mod cell;
pub mod error;
pub mod tables;
pub mod wind;

pub use cell::{Cell, CellState, Vegetation};
pub use error::ConfigError;
pub use wind::{octant_of, Wind, WindSpeed};
