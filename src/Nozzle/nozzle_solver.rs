//! # Nozzle Solver Module
//!
//! Runs the whole pipeline for one `NozzleInput`:
//!
//! 1. validate the grid size (nothing is allocated for a rejected task)
//! 2. build the coordinate grid
//! 3. derive the initial pressure and temperature profiles
//! 4. one MacCormack pass over pressure, then over temperature
//! 5. derive velocity from coordinates and corrected temperature
//! 6. scan corrected temperature and velocity for NaN/Inf
//!
//! Every field belongs to the returned `NozzleSolution`; nothing outlives the run.

use super::fields::{Field, FieldKind};
use super::grid::build_grid;
use super::initial_fields::{derive_pressure, derive_temperature};
use super::maccormack::MacCormackStepper;
use super::nozzle_task::{NozzleError, NozzleInput};
use super::velocity::derive_velocity;
use log::{info, warn};

/// A non-finite value found in the output. Informational only: the value stays
/// in the field and the run still succeeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericAnomaly {
    pub field: FieldKind,
    pub index: usize,
    pub value: f32,
}

/// All profiles of one run
#[derive(Debug, Clone)]
pub struct NozzleSolution {
    pub input: NozzleInput,
    pub coordinate: Field,
    pub pressure: Field,
    pub predicted_pressure: Field,
    pub corrected_pressure: Field,
    pub temperature: Field,
    pub predicted_temperature: Field,
    pub corrected_temperature: Field,
    pub velocity: Field,
    pub anomalies: Vec<NumericAnomaly>,
}

impl NozzleSolution {
    /// Fields in the order they are reported
    pub fn fields(&self) -> [&Field; 8] {
        [
            &self.coordinate,
            &self.pressure,
            &self.predicted_pressure,
            &self.corrected_pressure,
            &self.temperature,
            &self.predicted_temperature,
            &self.corrected_temperature,
            &self.velocity,
        ]
    }

    pub fn field(&self, kind: FieldKind) -> &Field {
        match kind {
            FieldKind::Coordinate => &self.coordinate,
            FieldKind::Pressure => &self.pressure,
            FieldKind::PredictedPressure => &self.predicted_pressure,
            FieldKind::CorrectedPressure => &self.corrected_pressure,
            FieldKind::Temperature => &self.temperature,
            FieldKind::PredictedTemperature => &self.predicted_temperature,
            FieldKind::CorrectedTemperature => &self.corrected_temperature,
            FieldKind::Velocity => &self.velocity,
        }
    }

    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }
}

fn find_anomalies(field: &Field) -> Vec<NumericAnomaly> {
    field
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_finite())
        .map(|(index, &value)| NumericAnomaly {
            field: field.kind(),
            index,
            value,
        })
        .collect()
}

pub struct NozzleSolver {
    pub input: NozzleInput,
}

impl NozzleSolver {
    pub fn new(input: NozzleInput) -> Self {
        Self { input }
    }

    pub fn solve(&self) -> Result<NozzleSolution, NozzleError> {
        let input = &self.input;
        let n = input.validate()?;
        info!(
            "solving nozzle task: {} grid points, a = {}, dt = {}, dx = {}",
            n, input.diffusion_coeff, input.time_step, input.grid_step
        );

        let coordinate = build_grid(
            input.left_boundary,
            input.right_boundary,
            input.grid_point_count,
        )?;
        let pressure = derive_pressure(&coordinate);
        let temperature = derive_temperature(&coordinate);

        let stepper = MacCormackStepper::from_input(input);
        info!("diffusion number a*dt/dx = {}", stepper.diffusion_number());
        let (predicted_pressure, corrected_pressure) = stepper.step(&pressure);
        let (predicted_temperature, corrected_temperature) = stepper.step(&temperature);

        let velocity = derive_velocity(&coordinate, &corrected_temperature);

        let mut anomalies = find_anomalies(&corrected_temperature);
        anomalies.extend(find_anomalies(&velocity));
        for anomaly in &anomalies {
            warn!(
                "{} contains {} at index {}",
                anomaly.field.label(),
                anomaly.value,
                anomaly.index
            );
        }
        info!("nozzle task solved, {} numeric anomalies", anomalies.len());

        Ok(NozzleSolution {
            input: *input,
            coordinate,
            pressure,
            predicted_pressure: predicted_pressure.into_field(),
            corrected_pressure,
            temperature,
            predicted_temperature: predicted_temperature.into_field(),
            corrected_temperature,
            velocity,
            anomalies,
        })
    }
}

/// One-shot helper: task in, solution out.
pub fn solve_nozzle(input: &NozzleInput) -> Result<NozzleSolution, NozzleError> {
    NozzleSolver::new(*input).solve()
}
