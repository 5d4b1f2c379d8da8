//! # Nozzle Task Module
//!
//! Holds the user-supplied parameters of one nozzle run and the error type shared
//! by the whole crate.
//!
//! A task can come from the interactive prompts (see `cli::cli_nozzle`) or from a
//! JSON task file:
//!
//! ```json
//! {
//!   "left_boundary": 0.0,
//!   "right_boundary": 1.0,
//!   "grid_point_count": 5,
//!   "diffusion_coeff": 0.5,
//!   "time_step": 0.01,
//!   "grid_step": 0.25
//! }
//! ```
//!
//! camelCase keys (`leftBoundary`, `gridPointCount`, ...) are accepted as well.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// error types for nozzle tasks
#[derive(Debug, Error)]
pub enum NozzleError {
    #[error("Invalid grid size: {0} (at least 2 grid points are required)")]
    InvalidGridSize(i32),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task file error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Input closed while waiting for {0}")]
    InputClosed(String),
}

/// Parameters of a single nozzle run.
///
/// Immutable once built: the solver borrows it for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NozzleInput {
    /// first grid coordinate
    #[serde(alias = "leftBoundary")]
    pub left_boundary: f32,
    /// sets the grid increment `right_boundary / (grid_point_count - 1)`
    #[serde(alias = "rightBoundary")]
    pub right_boundary: f32,
    /// signed so that negative input is rejected by `validate` and not by the parser
    #[serde(alias = "gridPointCount")]
    pub grid_point_count: i32,
    #[serde(alias = "diffusionCoeff")]
    pub diffusion_coeff: f32,
    #[serde(alias = "timeStep")]
    pub time_step: f32,
    #[serde(alias = "gridStep")]
    pub grid_step: f32,
}

impl Default for NozzleInput {
    fn default() -> Self {
        Self {
            left_boundary: 0.0,
            right_boundary: 1.0,
            grid_point_count: 5,
            diffusion_coeff: 0.5,
            time_step: 0.01,
            grid_step: 0.25,
        }
    }
}

impl NozzleInput {
    pub fn new(
        left_boundary: f32,
        right_boundary: f32,
        grid_point_count: i32,
        diffusion_coeff: f32,
        time_step: f32,
        grid_step: f32,
    ) -> Self {
        Self {
            left_boundary,
            right_boundary,
            grid_point_count,
            diffusion_coeff,
            time_step,
            grid_step,
        }
    }

    /// Checks the grid size and returns it as a usable length.
    ///
    /// # Returns
    /// * `Ok(n)` - number of grid points, `n >= 2`
    /// * `Err(NozzleError::InvalidGridSize)` - for `grid_point_count <= 1`
    pub fn validate(&self) -> Result<usize, NozzleError> {
        if self.grid_point_count <= 1 {
            return Err(NozzleError::InvalidGridSize(self.grid_point_count));
        }
        Ok(self.grid_point_count as usize)
    }

    /// Reads a task from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, NozzleError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let input: NozzleInput = serde_json::from_str(&content)?;
        info!("Loaded nozzle task from '{}'", path.display());
        debug!("{:?}", input);
        Ok(input)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), NozzleError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        Ok(())
    }
}

/// Writes a task file with default parameters that the user can edit.
pub fn create_template<P: AsRef<Path>>(path: P) -> Result<(), NozzleError> {
    NozzleInput::default().save_to_file(&path)?;
    info!("Template written to '{}'", path.as_ref().display());
    Ok(())
}
