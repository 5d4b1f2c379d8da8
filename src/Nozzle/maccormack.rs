//! # MacCormack Predictor-Corrector Module
//!
//! One explicit MacCormack pass over a field with fixed end values.
//!
//! ## Stages
//!
//! ```text
//! predictor (forward difference):
//!     u*_i = u_i - a·(dt/dx)·(u_{i+1} - u_i)
//! corrector (central difference of the prediction):
//!     u'_i = ½(u_i + u*_i) - (a/2)·(dt/dx)·(u*_{i+1} - u*_{i-1})
//! ```
//!
//! for interior points `1 <= i <= N-2`. Indices `0` and `N-1` are boundary
//! conditions and are copied from the source field by both stages.
//!
//! ## Notes
//!
//! - `correct` takes a [`Predicted`] field, which only [`MacCormackStepper::predict`]
//!   can create, so a prediction with unset boundaries never reaches the corrector.
//! - No NaN/Inf checks: IEEE special values pass through unchanged.
//! - With `N <= 2` the interior is empty and both stages copy their input.

use super::fields::{Field, FieldKind};
use super::nozzle_task::NozzleInput;
use log::debug;

/// Output of the predictor stage
#[derive(Debug, Clone, PartialEq)]
pub struct Predicted(Field);

impl Predicted {
    pub fn field(&self) -> &Field {
        &self.0
    }

    pub fn into_field(self) -> Field {
        self.0
    }
}

/// Predictor-corrector engine shared by every field of a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacCormackStepper {
    /// diffusion coefficient `a`
    pub diffusion_coeff: f32,
    pub time_step: f32,
    pub grid_step: f32,
}

impl MacCormackStepper {
    pub fn new(diffusion_coeff: f32, time_step: f32, grid_step: f32) -> Self {
        Self {
            diffusion_coeff,
            time_step,
            grid_step,
        }
    }

    pub fn from_input(input: &NozzleInput) -> Self {
        Self::new(input.diffusion_coeff, input.time_step, input.grid_step)
    }

    /// `dt / dx`
    fn ratio(&self) -> f32 {
        self.time_step / self.grid_step
    }

    /// `a * dt / dx`, the factor in front of every difference in the stencil
    pub fn diffusion_number(&self) -> f32 {
        self.diffusion_coeff * self.ratio()
    }

    /// Copies the end values of `values` and fills the interior with `interior(i)`.
    fn with_fixed_ends<F>(values: &Field, kind: FieldKind, interior: F) -> Field
    where
        F: Fn(usize) -> f32,
    {
        let n = values.len();
        let mut out = values.values().to_vec();
        // saturating_sub keeps the range empty for n = 0 and n = 1
        for i in 1..n.saturating_sub(1) {
            out[i] = interior(i);
        }
        Field::new(kind, out)
    }

    /// Predictor stage: forward difference in space.
    pub fn predict(&self, values: &Field) -> Predicted {
        let a = self.diffusion_coeff;
        let ratio = self.ratio();
        let u = values.values();
        let predicted = Self::with_fixed_ends(values, values.kind().predicted(), |i| {
            u[i] - (a * ratio * (u[i + 1] - u[i]))
        });
        debug!("{} {:?}", predicted.label(), predicted.values());
        Predicted(predicted)
    }

    /// Corrector stage: average of source and prediction minus the central
    /// difference of the prediction.
    ///
    /// # Panics
    /// If `predicted` was made from a field of another length.
    pub fn correct(&self, values: &Field, predicted: &Predicted) -> Field {
        let pred = predicted.field().values();
        assert_eq!(
            values.len(),
            pred.len(),
            "predicted field does not match the grid of {}",
            values.label()
        );
        let half_a = self.diffusion_coeff / 2.0;
        let ratio = self.ratio();
        let u = values.values();
        let corrected = Self::with_fixed_ends(values, values.kind().corrected(), |i| {
            let average = 0.5 * (u[i] + pred[i]) as f64;
            let flux = (half_a * ratio * (pred[i + 1] - pred[i - 1])) as f64;
            (average - flux) as f32
        });
        debug!("{} {:?}", corrected.label(), corrected.values());
        corrected
    }

    /// Both stages in order.
    pub fn step(&self, values: &Field) -> (Predicted, Field) {
        let predicted = self.predict(values);
        let corrected = self.correct(values, &predicted);
        (predicted, corrected)
    }
}
