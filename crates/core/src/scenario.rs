//! Scenario files: a grid plus wind (and optional seed) persisted as JSON
//!
//! The engine itself has no file format; scenarios are how external drivers
//! hand it a fully populated starting state. Loading revalidates every grid
//! and wind invariant, so a hand-edited file cannot smuggle a malformed
//! state past the validation boundary.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core_types::{ConfigError, Wind};
use crate::grid::CellGrid;
use crate::simulation::Simulation;

/// A complete starting state for a fire run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Initial grid, including any cells already burning
    pub grid: CellGrid,
    /// Wind for the first tick
    pub wind: Wind,
    /// Seed for the random stream; defaults to 0 when absent
    pub seed: Option<u64>,
}

impl Scenario {
    /// Load and validate a scenario from a JSON file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if the
    /// parsed grid or wind violates the engine's invariants.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ScenarioError::LoadFailed(e.to_string()))?;
        let scenario: Self = serde_json::from_str(&contents)
            .map_err(|e| ScenarioError::ParseFailed(e.to_string()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Save the scenario as pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error if serialization or the file write fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ScenarioError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ScenarioError::SerializeFailed(e.to_string()))?;
        fs::write(path, contents).map_err(|e| ScenarioError::SaveFailed(e.to_string()))?;
        Ok(())
    }

    /// Re-check all engine invariants on the parsed state
    ///
    /// # Errors
    /// Returns `ScenarioError::Invalid` wrapping the first violated invariant.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        self.grid.validate().map_err(ScenarioError::Invalid)?;
        self.wind.validate().map_err(ScenarioError::Invalid)?;
        Ok(())
    }

    /// Consume the scenario into a runnable simulation
    pub fn into_simulation(self) -> Simulation {
        let seed = self.seed.unwrap_or(0);
        Simulation::new(self.grid, self.wind, seed)
    }
}

/// Failure to load, save or validate a scenario file
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioError {
    /// Failed to read the file
    LoadFailed(String),
    /// Failed to parse the file contents
    ParseFailed(String),
    /// Failed to serialize the scenario
    SerializeFailed(String),
    /// Failed to write the file
    SaveFailed(String),
    /// Parsed state violates an engine invariant
    Invalid(ConfigError),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::LoadFailed(msg) => write!(f, "failed to load scenario: {msg}"),
            ScenarioError::ParseFailed(msg) => write!(f, "failed to parse scenario: {msg}"),
            ScenarioError::SerializeFailed(msg) => {
                write!(f, "failed to serialize scenario: {msg}")
            }
            ScenarioError::SaveFailed(msg) => write!(f, "failed to save scenario: {msg}"),
            ScenarioError::Invalid(err) => write!(f, "invalid scenario: {err}"),
        }
    }
}

impl std::error::Error for ScenarioError {}
